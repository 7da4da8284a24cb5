use serde::{Deserialize, Serialize};

/// Account entity, mirrored from the auth platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    /// E.164 phone number
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub is_admin: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Create a new regular account
    pub fn new(id: String, email: Option<String>, phone: Option<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            email,
            phone,
            password_hash: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_password_hash(mut self, hash: String) -> Self {
        self.password_hash = Some(hash);
        self
    }

    pub fn as_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// Normalize a phone number to E.164 (`+` followed by 8-15 digits).
///
/// Spaces, dashes, dots and parentheses are stripped first.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let digits = compact.strip_prefix('+')?;
    if digits.len() < 8 || digits.len() > 15 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(compact)
}
