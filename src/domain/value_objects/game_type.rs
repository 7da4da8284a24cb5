use serde::{Deserialize, Serialize};

use super::{JoinCode, PlayerCountRange};

/// Mini-games that support creating a shareable session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Everyone but one player sees the secret word
    Impostor,
    /// Grid battle on a board that grows with the table size
    Battleship,
}

impl GameType {
    pub const ALL: [GameType; 2] = [GameType::Impostor, GameType::Battleship];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Impostor => "impostor",
            GameType::Battleship => "battleship",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "impostor" => Some(GameType::Impostor),
            "battleship" => Some(GameType::Battleship),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameType::Impostor => "Impostor",
            GameType::Battleship => "Battleship",
        }
    }

    pub fn player_range(&self) -> PlayerCountRange {
        match self {
            GameType::Impostor => PlayerCountRange::new(3, 20),
            GameType::Battleship => PlayerCountRange::new(2, 10),
        }
    }

    /// Client path of the create screen
    pub fn create_path(&self) -> String {
        format!("/games/{}", self.as_str())
    }

    /// Client path a created session is reachable at
    pub fn session_path(&self, code: &JoinCode) -> String {
        format!("/games/{}/{}", self.as_str(), code)
    }
}
