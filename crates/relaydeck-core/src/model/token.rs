use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gateway access token as list reads see it: masked, never the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: String,
    pub name: String,
    pub masked_token: Option<String>,
    pub enabled: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
}

/// The create response — the only place the secret ever appears. Show it
/// to the operator once; every later read carries only the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedToken {
    pub secret: String,
    pub record: AccessToken,
}

/// Operator input for minting a token.
#[derive(Debug, Clone)]
pub struct TokenDraft {
    pub name: String,
    pub expires_at: Option<DateTime<Utc>>,
}
