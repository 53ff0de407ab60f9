// Login / logout.
//
// Login is the one unauthenticated call in the API — it must never send a
// stale bearer token. Logout is authenticated and best-effort; session
// cleanup is the caller's job regardless of the response.

use secrecy::{ExposeSecret, SecretString};

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{Envelope, LoginData, LoginRequest};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Envelope<LoginData>, Error> {
        let body = LoginRequest {
            username,
            password: password.expose_secret(),
        };
        self.post("auth/login", &body, RequestOptions::unauthenticated())
            .await
    }

    /// Revoke the current session on the gateway side.
    pub async fn logout(&self) -> Result<(), Error> {
        self.post_empty("auth/logout", &serde_json::json!({}), RequestOptions::new())
            .await
    }
}
