//! Player records and game modes.

use derive_getters::Getters;
use derive_new::new;
use noughts_core::Figure;
use serde::{Deserialize, Serialize};

/// Who controls each seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// A person against the search engine.
    PlayerAi,
    /// Two people.
    PlayerPlayer,
    /// The search engine against itself.
    AiAi,
}

/// A participant in a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Moves are chosen by the search engine.
    search_driven: bool,
    /// Mark this player places.
    figure: Figure,
}

/// Builds both players for `mode`; the first player gets `first_figure`.
pub fn players_for(mode: GameMode, first_figure: Figure) -> [Player; 2] {
    let second_figure = first_figure.opponent();
    match mode {
        GameMode::PlayerAi => [
            Player::new("Player".to_string(), false, first_figure),
            Player::new("AI".to_string(), true, second_figure),
        ],
        GameMode::PlayerPlayer => [
            Player::new("Player 1".to_string(), false, first_figure),
            Player::new("Player 2".to_string(), false, second_figure),
        ],
        GameMode::AiAi => [
            Player::new("AI 1".to_string(), true, first_figure),
            Player::new("AI 2".to_string(), true, second_figure),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ai_seats() {
        let [human, ai] = players_for(GameMode::PlayerAi, Figure::Zero);
        assert!(!human.search_driven());
        assert_eq!(*human.figure(), Figure::Zero);
        assert!(*ai.search_driven());
        assert_eq!(*ai.figure(), Figure::Cross);
    }

    #[test]
    fn test_ai_ai_names() {
        let players = players_for(GameMode::AiAi, Figure::Cross);
        assert_eq!(players[0].name(), "AI 1");
        assert_eq!(players[1].name(), "AI 2");
    }

    #[test]
    fn test_game_mode_parsing() {
        assert_eq!("ai-ai".parse::<GameMode>().unwrap(), GameMode::AiAi);
        assert_eq!(GameMode::PlayerPlayer.to_string(), "player-player");
    }
}
