use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One proxied request as recorded by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLog {
    pub id: String,
    pub provider_id: Option<String>,
    pub provider_name: Option<String>,
    pub group_name: Option<String>,
    pub model: Option<String>,
    pub status_code: Option<u16>,
    pub success: bool,
    pub latency_ms: Option<u64>,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub cost: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}
