use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Characters a join code may contain (no I, O, 0 or 1)
pub const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every join code
pub const JOIN_CODE_LENGTH: usize = 6;

/// Short shareable code identifying a game session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    /// Draw a fresh code, one character at a time with replacement.
    /// Uniqueness is left to the session store.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..JOIN_CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..JOIN_CODE_CHARSET.len());
                JOIN_CODE_CHARSET[idx] as char
            })
            .collect();
        Self(code)
    }

    /// Parse a user-supplied code, accepting lower case input
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().to_ascii_uppercase();
        Self::is_valid(&code).then_some(Self(code))
    }

    pub fn is_valid(code: &str) -> bool {
        code.len() == JOIN_CODE_LENGTH && code.bytes().all(|b| JOIN_CODE_CHARSET.contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rebuild from storage without validation
    pub(crate) fn from_stored(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
