//! Windbreaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use windbreaker::sim::GameEvent;

/// Report what the last tick did
fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::LifeLost { .. } | GameEvent::GameOver | GameEvent::LevelClear => {
                log::info!("{:?}", event)
            }
            _ => log::debug!("{:?}", event),
        }
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use windbreaker::renderer::{self, CanvasRenderer};
    use windbreaker::sim::{GamePhase, GameState, Snapshot, tick};
    use windbreaker::{HudText, InputState, KeyAction, Tuning};

    /// HUD elements written every frame
    struct Hud {
        score: Element,
        lives: Element,
        wind: Element,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        hud: Hud,
        input: InputState,
        last_time: f64,
    }

    impl Game {
        /// Advance the simulation by one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(self.state.tuning.max_frame_dt);
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input, dt);
            super::log_events(&self.state.events);
        }

        /// Paint the frame and refresh the HUD text
        fn render(&self) {
            let snap = Snapshot::of(&self.state);
            let hud = HudText::of(&snap);

            if let Err(e) = self.renderer.draw(&renderer::frame(&snap, &hud)) {
                log::warn!("Render error: {:?}", e);
            }

            self.hud.score.set_text_content(Some(&hud.score));
            self.hud.lives.set_text_content(Some(&hud.lives));
            self.hud.wind.set_text_content(Some(&hud.wind));
        }

        /// Pause when the player looks away mid-game
        fn auto_pause(&mut self, reason: &str) {
            if matches!(self.state.phase, GamePhase::Playing | GamePhase::Serve) {
                self.input.request_pause();
                log::info!("Auto-paused ({reason})");
            }
            self.input.held.clear();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Windbreaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("Missing UI elements: #game")
            .dyn_into()
            .expect("#game is not a canvas");
        let hud = Hud {
            score: document.get_element_by_id("score").expect("Missing UI elements: #score"),
            lives: document.get_element_by_id("lives").expect("Missing UI elements: #lives"),
            wind: document.get_element_by_id("wind").expect("Missing UI elements: #wind"),
        };
        let renderer = CanvasRenderer::new(&canvas).expect("Missing canvas context");

        let mut tuning = Tuning::from_override(canvas.get_attribute("data-tuning").as_deref());
        tuning.field_width = canvas.width() as f32;
        tuning.field_height = canvas.height() as f32;
        if let Err(e) = tuning.validate() {
            log::warn!("Canvas size rejected ({e}), using default tuning");
            tuning = Tuning::default();
            canvas.set_width(tuning.field_width as u32);
            canvas.set_height(tuning.field_height as u32);
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_tuning(tuning, seed),
            renderer,
            hud,
            input: InputState::default(),
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Windbreaker running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = game.borrow_mut().input.key_down(&event.key());
                if action.is_some_and(KeyAction::prevents_default) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().auto_pause("tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().auto_pause("window blur");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // First frame only establishes the clock
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use windbreaker::Tuning;
    use windbreaker::sim::{GameState, Snapshot, TickInput, tick};

    env_logger::init();
    log::info!("Windbreaker (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let tuning = Tuning::from_override(std::env::var("WINDBREAKER_TUNING").ok().as_deref());
    let dt = tuning.max_frame_dt.min(1.0 / 60.0);

    let mut state = GameState::with_tuning(tuning, seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    // Two simulated minutes, or until the session ends
    let max_frames = (120.0 / dt) as u32;
    let mut frames = 0;
    while frames < max_frames && !state.phase.is_terminal() {
        tick(&mut state, &input, dt);
        log_events(&state.events);
        frames += 1;
    }

    log::info!(
        "Session ended after {:.1}s: score {}, lives {}, {} bricks left",
        frames as f32 * dt,
        state.score,
        state.lives,
        state.bricks.len()
    );

    match serde_json::to_string_pretty(&Snapshot::of(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
