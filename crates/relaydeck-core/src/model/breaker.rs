use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The backend's per-provider health gate. The console observes and may
/// override it, but the state machine itself lives in the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
    /// A wire value this console version does not know.
    Unknown,
}

impl CircuitState {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "CLOSED" => Self::Closed,
            "OPEN" => Self::Open,
            "HALF_OPEN" => Self::HalfOpen,
            _ => Self::Unknown,
        }
    }
}

/// Rolling health metrics reported alongside the circuit state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakerHealth {
    pub failure_count: u64,
    pub success_count: u64,
    pub failure_rate: Option<f64>,
    pub last_failure_at: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
}

/// An operator-forced state, with the audit trail the gateway keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    pub operator: Option<String>,
    pub reason: Option<String>,
    pub until: Option<DateTime<Utc>>,
}

/// Read-mostly breaker snapshot for one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerStatus {
    pub provider_id: String,
    pub provider_name: Option<String>,
    pub state: CircuitState,
    pub health: BreakerHealth,
    pub manual_override: Option<ManualOverride>,
}

/// An operator-initiated override request.
#[derive(Debug, Clone)]
pub struct BreakerCommand {
    pub state: CircuitState,
    /// Human-supplied justification, recorded by the gateway.
    pub reason: String,
    /// How long the override holds; `None` means until released.
    pub duration: Option<Duration>,
}
