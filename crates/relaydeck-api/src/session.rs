// ── Session store ──
//
// Persisted bearer token + username, plus the log view's auto-refresh
// preferences, in a single JSON state file keyed by fixed storage keys.
// This is the one choke point for session invalidation: the transport
// client calls `invalidate()` on an authenticated 401, which clears the
// persisted keys *before* notifying subscribers, so no subscriber can
// observe a stale token.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "admin_token";
/// Storage key for the logged-in operator's username.
pub const USERNAME_KEY: &str = "admin_username";
/// Storage key for the token expiry timestamp (RFC 3339).
pub const EXPIRES_AT_KEY: &str = "admin_token_expires_at";
/// Storage key for the log view's auto-refresh toggle.
pub const LOG_AUTO_REFRESH_KEY: &str = "log_auto_refresh";
/// Storage key for the log view's auto-refresh interval (seconds).
pub const LOG_REFRESH_INTERVAL_KEY: &str = "log_refresh_interval_secs";

const DEFAULT_LOG_REFRESH_SECS: u64 = 5;

/// A live session as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// The log view's persisted auto-refresh preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRefreshPrefs {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for LogRefreshPrefs {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: DEFAULT_LOG_REFRESH_SECS,
        }
    }
}

/// Token access as the transport client sees it.
///
/// An interface rather than a direct storage read so tests can substitute
/// a stub without touching disk.
pub trait SessionHandle: Send + Sync {
    /// The current bearer token, if a session exists.
    fn bearer_token(&self) -> Option<String>;

    /// Clear the session in reaction to a server-signalled expiry.
    ///
    /// Returns `true` if a session was actually cleared. Must be
    /// idempotent: concurrent calls clear and notify at most once.
    fn invalidate(&self) -> bool;
}

/// Persisted client state under fixed storage keys.
///
/// Mutations write through to the backing file immediately; the file is
/// best-effort (a failed write logs and keeps the in-memory state). Not
/// guarded across processes — concurrent mutation from two console
/// instances is a known, undefended race.
pub struct SessionStore {
    path: Option<PathBuf>,
    state: RwLock<BTreeMap<String, Value>>,
    invalidated: watch::Sender<u64>,
}

impl SessionStore {
    /// Open (or create) a store backed by `path`.
    ///
    /// A missing or unreadable file starts an empty store; corruption is
    /// logged, never fatal — the console degrades to logged-out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("state file {} is corrupt, starting fresh: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        let (invalidated, _) = watch::channel(0);
        Self {
            path: Some(path),
            state: RwLock::new(state),
            invalidated,
        }
    }

    /// An unpersisted store (tests, ephemeral sessions).
    pub fn in_memory() -> Self {
        let (invalidated, _) = watch::channel(0);
        Self {
            path: None,
            state: RwLock::new(BTreeMap::new()),
            invalidated,
        }
    }

    fn persist(&self, state: &BTreeMap<String, Value>) {
        let Some(path) = &self.path else { return };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("cannot create state dir {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(state) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(path, raw) {
                    warn!("cannot write state file {}: {e}", path.display());
                }
            }
            Err(e) => warn!("cannot serialize state: {e}"),
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Record a freshly issued session (called after a successful login).
    pub fn start_session(
        &self,
        token: &str,
        username: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.insert(TOKEN_KEY.into(), Value::String(token.to_owned()));
        match username {
            Some(name) => {
                state.insert(USERNAME_KEY.into(), Value::String(name.to_owned()));
            }
            None => {
                state.remove(USERNAME_KEY);
            }
        }
        match expires_at {
            Some(at) => {
                state.insert(EXPIRES_AT_KEY.into(), Value::String(at.to_rfc3339()));
            }
            None => {
                state.remove(EXPIRES_AT_KEY);
            }
        }
        self.persist(&state);
        debug!("session started");
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<Session> {
        let state = self.state.read().expect("session lock poisoned");
        let token = state.get(TOKEN_KEY)?.as_str()?.to_owned();
        let username = state
            .get(USERNAME_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned);
        let expires_at = state
            .get(EXPIRES_AT_KEY)
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Some(Session {
            token,
            username,
            expires_at,
        })
    }

    /// The logged-in operator's username, for the `X-Operator` audit header.
    pub fn username(&self) -> Option<String> {
        let state = self.state.read().expect("session lock poisoned");
        state
            .get(USERNAME_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// Clear the session on explicit logout. Does not notify subscribers —
    /// the caller initiated this and already knows.
    pub fn end_session(&self) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.remove(TOKEN_KEY);
        state.remove(USERNAME_KEY);
        state.remove(EXPIRES_AT_KEY);
        self.persist(&state);
        debug!("session ended");
    }

    // ── Invalidation channel ─────────────────────────────────────────

    /// Subscribe to session-invalidation events. The receiver's value is a
    /// generation counter; any change means "reset to unauthenticated".
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.invalidated.subscribe()
    }

    /// How many times this store has been invalidated.
    pub fn generation(&self) -> u64 {
        *self.invalidated.borrow()
    }

    // ── Log auto-refresh preferences ─────────────────────────────────

    pub fn log_refresh(&self) -> LogRefreshPrefs {
        let state = self.state.read().expect("session lock poisoned");
        let defaults = LogRefreshPrefs::default();
        LogRefreshPrefs {
            enabled: state
                .get(LOG_AUTO_REFRESH_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(defaults.enabled),
            interval_secs: state
                .get(LOG_REFRESH_INTERVAL_KEY)
                .and_then(Value::as_u64)
                .unwrap_or(defaults.interval_secs),
        }
    }

    pub fn set_log_refresh(&self, prefs: LogRefreshPrefs) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.insert(LOG_AUTO_REFRESH_KEY.into(), Value::Bool(prefs.enabled));
        state.insert(
            LOG_REFRESH_INTERVAL_KEY.into(),
            Value::from(prefs.interval_secs),
        );
        self.persist(&state);
    }
}

impl SessionHandle for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        let state = self.state.read().expect("session lock poisoned");
        state
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn invalidate(&self) -> bool {
        // The write lock makes concurrent 401s race to a single winner:
        // the loser finds no token and leaves the generation untouched.
        let mut state = self.state.write().expect("session lock poisoned");
        if !state.contains_key(TOKEN_KEY) {
            return false;
        }
        state.remove(TOKEN_KEY);
        state.remove(USERNAME_KEY);
        state.remove(EXPIRES_AT_KEY);
        self.persist(&state);
        drop(state);
        self.invalidated.send_modify(|generation| *generation += 1);
        warn!("session invalidated by the gateway");
        true
    }
}
