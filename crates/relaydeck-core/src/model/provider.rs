use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Which upstream API family a provider speaks.
///
/// Wire codes 0..4 map to the known families; anything else is carried
/// through untouched in [`Other`](Self::Other) — the console displays it
/// as "Unknown" but never coerces it on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    OpenAiChat,
    OpenAiResponse,
    Anthropic,
    Gemini,
    NewApi,
    Other(i64),
}

impl ProviderKind {
    /// Human label for display. Unknown codes render as "Unknown".
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenAiChat => "OpenAI Chat",
            Self::OpenAiResponse => "OpenAI Response",
            Self::Anthropic => "Anthropic",
            Self::Gemini => "Gemini",
            Self::NewApi => "New API",
            Self::Other(_) => "Unknown",
        }
    }
}

/// Whether a provider participates in routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderStatus {
    Active,
    Inactive,
}

impl ProviderStatus {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Active } else { Self::Inactive }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// An upstream LLM provider as the console sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub kind: ProviderKind,
    pub base_url: String,
    /// Masked by the backend on reads; the real credential is write-only.
    pub api_key: Option<String>,
    pub models: Vec<String>,
    pub status: ProviderStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Operator input for creating or updating a provider.
#[derive(Debug, Clone)]
pub struct ProviderDraft {
    pub name: String,
    pub kind: ProviderKind,
    pub base_url: String,
    pub api_key: SecretString,
    pub models: Vec<String>,
    pub enabled: bool,
}

/// A model offered through the gateway (catalog entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayModel {
    pub name: String,
    pub provider_id: Option<String>,
    pub provider_name: Option<String>,
}
