//! HUD text formatting

use crate::sim::Snapshot;

/// Strings the presentation layer writes into the page
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub score: String,
    pub lives: String,
    pub wind: String,
    /// Drawn at the bottom of the playfield
    pub wind_banner: String,
    /// Status message, if any
    pub message: Option<String>,
}

impl HudText {
    pub fn of(snap: &Snapshot) -> Self {
        Self {
            score: snap.score.to_string(),
            lives: snap.lives.to_string(),
            wind: format!("{:.1}", snap.wind),
            wind_banner: format!(
                "Wind: {:.1}  Next shift: {:.1}s",
                snap.wind, snap.next_wind_shift
            ),
            message: (!snap.message.is_empty()).then(|| snap.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Snapshot, TickInput, tick};

    #[test]
    fn test_hud_new_game() {
        let hud = HudText::of(&Snapshot::of(&GameState::new(3)));
        assert_eq!(hud.score, "0");
        assert_eq!(hud.lives, "3");
        assert_eq!(hud.wind, "0.0");
        assert_eq!(hud.wind_banner, "Wind: 0.0  Next shift: 5.0s");
        assert_eq!(hud.message.as_deref(), Some("Press Space to launch"));
    }

    #[test]
    fn test_hud_rounds_wind() {
        let mut state = GameState::new(3);
        state.wind.current = -1.26;
        state.wind.timer = 1.7;
        let hud = HudText::of(&Snapshot::of(&state));
        assert_eq!(hud.wind, "-1.3");
        assert_eq!(hud.wind_banner, "Wind: -1.3  Next shift: 3.3s");
    }

    #[test]
    fn test_hud_hides_empty_message() {
        let mut state = GameState::new(3);
        let input = TickInput {
            launch: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.01);
        assert_eq!(HudText::of(&Snapshot::of(&state)).message, None);
    }
}
