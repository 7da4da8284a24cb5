use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GameType, GridDimensions, JoinCode, PlayerCount};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Playing,
    Finished,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Waiting => "waiting",
            SessionStatus::Playing => "playing",
            SessionStatus::Finished => "finished",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "waiting" => Some(SessionStatus::Waiting),
            "playing" => Some(SessionStatus::Playing),
            "finished" => Some(SessionStatus::Finished),
            _ => None,
        }
    }
}

/// Per-game fields of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gameType", rename_all = "lowercase")]
pub enum SessionDetails {
    Impostor {
        #[serde(rename = "wordId")]
        word_id: String,
        #[serde(rename = "impostorIndex")]
        impostor_index: u8,
    },
    Battleship {
        #[serde(rename = "gridSize")]
        grid_size: u32,
    },
}

impl SessionDetails {
    pub fn game_type(&self) -> GameType {
        match self {
            SessionDetails::Impostor { .. } => GameType::Impostor,
            SessionDetails::Battleship { .. } => GameType::Battleship,
        }
    }

    /// Battleship details for a table size
    pub fn battleship(player_count: PlayerCount) -> Self {
        SessionDetails::Battleship {
            grid_size: GridDimensions::for_players(player_count).height,
        }
    }
}

/// Game session entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: String,
    pub code: JoinCode,
    pub player_count: PlayerCount,
    pub status: SessionStatus,
    #[serde(flatten)]
    pub details: SessionDetails,
    pub created_at: i64,
}

impl GameSession {
    /// Create a new session waiting for players
    pub fn new(id: String, code: JoinCode, player_count: PlayerCount, details: SessionDetails) -> Self {
        Self {
            id,
            code,
            player_count,
            status: SessionStatus::Waiting,
            details,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn game_type(&self) -> GameType {
        self.details.game_type()
    }

    /// Client path the session is reachable at
    pub fn path(&self) -> String {
        self.game_type().session_path(&self.code)
    }

    /// Board dimensions, for battleship sessions only
    pub fn grid(&self) -> Option<GridDimensions> {
        match self.details {
            SessionDetails::Battleship { .. } => Some(GridDimensions::for_players(self.player_count)),
            SessionDetails::Impostor { .. } => None,
        }
    }
}
