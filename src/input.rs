//! Keyboard input
//!
//! Key listeners fire between frames; they only record held keys and queue
//! edge events here. The frame loop drains everything once per frame with
//! [`InputState::take_tick_input`].

use std::collections::HashSet;

use crate::sim::TickInput;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    Launch,
    Pause,
    Restart,
    ToggleAutopilot,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(KeyAction::MoveLeft),
            "ArrowRight" | "d" | "D" => Some(KeyAction::MoveRight),
            " " => Some(KeyAction::Launch),
            "p" | "P" => Some(KeyAction::Pause),
            "r" | "R" => Some(KeyAction::Restart),
            "i" | "I" => Some(KeyAction::ToggleAutopilot),
            _ => None,
        }
    }

    /// Keys whose browser default (scrolling) should be suppressed
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            KeyAction::Launch | KeyAction::MoveLeft | KeyAction::MoveRight
        )
    }
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    fn holds(&self, action: KeyAction) -> bool {
        self.keys
            .iter()
            .any(|k| KeyAction::from_key(k) == Some(action))
    }

    /// Horizontal direction: -1, 0 or 1 (left and right cancel out)
    pub fn direction(&self) -> f32 {
        let left = if self.holds(KeyAction::MoveLeft) { -1.0 } else { 0.0 };
        let right = if self.holds(KeyAction::MoveRight) { 1.0 } else { 0.0 };
        left + right
    }
}

/// Held keys plus edge events waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub held: HeldKeys,
    launch: bool,
    pause: bool,
    restart: bool,
    autopilot: bool,
}

impl InputState {
    /// Record a key press; returns the mapped action, if any
    pub fn key_down(&mut self, key: &str) -> Option<KeyAction> {
        self.held.press(key);
        let action = KeyAction::from_key(key)?;
        match action {
            KeyAction::Launch => self.launch = true,
            KeyAction::Pause => self.pause = true,
            KeyAction::Restart => self.restart = true,
            KeyAction::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
            KeyAction::MoveLeft | KeyAction::MoveRight => {}
        }
        Some(action)
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.release(key);
    }

    /// Queue a pause (e.g. the tab lost focus)
    pub fn request_pause(&mut self) {
        self.pause = true;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Build this frame's input, consuming queued edge events
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            move_dir: self.held.direction(),
            launch: std::mem::take(&mut self.launch),
            pause: std::mem::take(&mut self.pause),
            restart: std::mem::take(&mut self.restart),
            autopilot: self.autopilot,
        }
    }
}
