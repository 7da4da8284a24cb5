use serde::{Deserialize, Serialize};

/// Inclusive player count bounds for a game type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCountRange {
    pub min: u8,
    pub max: u8,
}

impl PlayerCountRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, n: i64) -> bool {
        n >= i64::from(self.min) && n <= i64::from(self.max)
    }
}

/// Number of seats in a game session, already checked against its game's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Parse a human-entered player count.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a plain
    /// integer inside `range` is rejected.
    pub fn parse(raw: &str, range: PlayerCountRange) -> Result<Self, PlayerCountError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| PlayerCountError::NotANumber(trimmed.to_string()))?;

        if !range.contains(value) {
            return Err(PlayerCountError::OutOfRange {
                value,
                min: range.min,
                max: range.max,
            });
        }

        // contains() guarantees the value fits in u8
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Rebuild from a stored value without bounds checking
    pub(crate) fn from_stored(value: u8) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerCountError {
    #[error("'{0}' is not a valid number of players")]
    NotANumber(String),
    #[error("{value} players is outside the allowed range {min}-{max}")]
    OutOfRange { value: i64, min: u8, max: u8 },
}
