// Login / logout against the gateway, wired into the session store.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use relaydeck_api::{ApiClient, Error, Session, SessionStore};

use super::{unwrap_data, validation};

/// Exchange credentials for a bearer token and persist the session.
pub async fn login(
    api: &ApiClient,
    store: &SessionStore,
    username: &str,
    password: &SecretString,
) -> Result<Session, Error> {
    if username.trim().is_empty() {
        return Err(validation("username must not be empty"));
    }
    if password.expose_secret().is_empty() {
        return Err(validation("password must not be empty"));
    }

    let data = unwrap_data(api.login(username, password).await?)?;
    // The gateway may echo a canonical username; trust it over the input.
    let username = data.username.as_deref().unwrap_or(username).to_owned();
    store.start_session(&data.token, Some(username.as_str()), data.expires_at);

    Ok(Session {
        token: data.token,
        username: Some(username),
        expires_at: data.expires_at,
    })
}

/// End the session. The store is cleared unconditionally; the revocation
/// call to the gateway is best-effort.
pub async fn logout(api: &ApiClient, store: &SessionStore) {
    let outcome = api.logout().await;
    store.end_session();
    if let Err(e) = outcome {
        debug!("logout call failed after clearing session: {e}");
    }
}
