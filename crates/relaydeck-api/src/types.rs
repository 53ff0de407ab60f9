// ── Wire types for the gateway admin API ──
//
// Response shapes exactly as the backend sends them: camelCase fields,
// integer enums, comma-joined strings, bool-or-int flags. Translation into
// domain types happens in `relaydeck-core`; nothing here interprets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ── Envelope ────────────────────────────────────────────────────────

/// The `{code, message, data}` wrapper most endpoints use. `code == 200`
/// is the sole application-level success signal — HTTP 2xx is not enough.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the envelope signals application-level success.
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

/// Some endpoints return a bare payload instead of an envelope. Both
/// shapes are declared here and decided once, at deserialization — never
/// by downstream duck-typing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Wrapped(Envelope<T>),
    Bare(T),
}

impl<T> Reply<T> {
    /// Normalize to an envelope; a bare payload counts as success.
    pub fn into_envelope(self) -> Envelope<T> {
        match self {
            Self::Wrapped(envelope) => envelope,
            Self::Bare(data) => Envelope {
                code: 200,
                message: String::new(),
                data: Some(data),
            },
        }
    }
}

// ── Pagination ──────────────────────────────────────────────────────

/// A page of records plus navigation metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDto<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub current: i64,
    #[serde(default)]
    pub pages: i64,
}

// ── Flag fields ─────────────────────────────────────────────────────

// The backend is inconsistent about boolean flags: some rows carry JSON
// booleans, some carry 0/1 integers. Accept both.
pub(crate) fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(flag) => flag,
        Raw::Int(n) => n != 0,
    })
}

pub(crate) fn default_true() -> bool {
    true
}

// ── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

// ── Providers ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDto {
    pub id: String,
    pub name: String,
    /// Integer provider-type code (0..4 known; others passed through).
    #[serde(rename = "type", default)]
    pub kind: i64,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Comma-joined model list. Splitting is lossy if a model name itself
    /// contains a comma — a documented backend limitation, not corrected.
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_or_int")]
    pub is_enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderWrite {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    pub is_enabled: bool,
}

// ── Groups ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItemDto {
    pub provider_id: String,
    pub model_name: String,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub priority: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: String,
    pub name: String,
    /// Integer balance-mode code (1..5).
    #[serde(default)]
    pub balance_mode: i64,
    #[serde(default = "default_true", deserialize_with = "bool_or_int")]
    pub is_enabled: bool,
    #[serde(default)]
    pub group_items: Vec<GroupItemDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWrite {
    pub name: String,
    pub balance_mode: i64,
    pub group_items: Vec<GroupItemDto>,
}

// ── Circuit breakers ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakerDto {
    pub provider_id: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    /// `CLOSED | OPEN | HALF_OPEN` as sent by the backend.
    #[serde(default)]
    pub circuit_state: String,
    #[serde(default)]
    pub failure_count: i64,
    #[serde(default)]
    pub success_count: i64,
    #[serde(default)]
    pub failure_rate: Option<f64>,
    #[serde(default)]
    pub last_failure_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub manual_override: bool,
    #[serde(default)]
    pub override_operator: Option<String>,
    #[serde(default)]
    pub override_reason: Option<String>,
    #[serde(default)]
    pub override_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakerControlWrite {
    pub state: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

// ── Access tokens ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub id: String,
    pub name: String,
    /// The secret. Present only in the create response, never again.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub masked_token: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_or_int")]
    pub is_enabled: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenWrite {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUpdate {
    pub is_enabled: bool,
}

// ── Request logs ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDto {
    pub id: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub success: bool,
    #[serde(default)]
    pub latency_ms: Option<i64>,
    #[serde(default)]
    pub prompt_tokens: Option<i64>,
    #[serde(default)]
    pub completion_tokens: Option<i64>,
    #[serde(default)]
    pub total_tokens: Option<i64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── Model catalog ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDto {
    pub name: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
}
