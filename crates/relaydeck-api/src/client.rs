// ── Gateway admin API transport ──
//
// Wraps `reqwest::Client` with header merging, bearer-auth injection,
// query-parameter handling, a per-call timeout, and failure
// classification. Endpoint modules (providers, groups, etc.) are
// implemented as inherent methods in `endpoints/` to keep this module
// focused on transport mechanics.
//
// The one piece of policy that lives here: a 401 on an authenticated call
// clears the session store and emits the invalidation event *before* the
// error is returned, so the application never observes a stale token.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, ErrorBody};
use crate::session::SessionHandle;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

// ── Request options ─────────────────────────────────────────────────

/// Per-call knobs. Everything defaults to "plain authenticated JSON call".
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers; caller wins over defaults and auth on conflict.
    pub headers: Vec<(String, String)>,
    /// Query parameters; `None` values are omitted entirely.
    pub params: Vec<(String, Option<String>)>,
    /// Overrides the client's default timeout for this call.
    pub timeout: Option<Duration>,
    /// Suppress the `Authorization` header (login itself).
    pub skip_auth: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an unauthenticated call.
    pub fn unauthenticated() -> Self {
        Self {
            skip_auth: true,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.params.push((name.into(), value));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the gateway admin API.
///
/// Constructed from a base URL and an injected [`SessionHandle`] — the
/// client never reads storage directly, so tests can substitute a stub.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    default_timeout: Duration,
    session: Arc<dyn SessionHandle>,
}

impl ApiClient {
    /// Build a client against `base_url` (trailing slash is normalized).
    pub fn new(base_url: Url, session: Arc<dyn SessionHandle>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base(base_url),
            default_timeout: DEFAULT_TIMEOUT,
            session,
        }
    }

    /// Override the default per-call timeout.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Wrap an existing `reqwest::Client` (connection pools, proxies).
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL / header builders ────────────────────────────────────────

    /// Join a relative path onto the base URL and append live params.
    fn url(&self, path: &str, params: &[(String, Option<String>)]) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        let mut url = self
            .base_url
            .join(path)
            .expect("path should be a valid relative URL");
        let live: Vec<_> = params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect();
        if !live.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in live {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Defaults, then bearer auth, then caller headers — caller wins.
    fn build_headers(&self, opts: &RequestOptions) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !opts.skip_auth {
            if let Some(token) = self.session.bearer_token() {
                match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(e) => warn!("stored token is not a valid header value: {e}"),
                }
            }
        }

        for (name, value) in &opts.headers {
            let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                warn!("dropping invalid header name {name:?}");
                continue;
            };
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.insert(name, value);
                }
                Err(e) => warn!("dropping invalid header value for {name:?}: {e}"),
            }
        }
        headers
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, Error> {
        let url = self.url(path, &opts.params);
        debug!("GET {url}");
        let builder = self.http.get(url);
        self.dispatch_json(builder, &opts).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<T, Error> {
        let url = self.url(path, &opts.params);
        debug!("POST {url}");
        let builder = self.http.post(url).json(body);
        self.dispatch_json(builder, &opts).await
    }

    /// POST whose response body is discarded (204 or irrelevant).
    pub async fn post_empty<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<(), Error> {
        let url = self.url(path, &opts.params);
        debug!("POST {url}");
        let builder = self.http.post(url).json(body);
        self.exchange(builder, &opts).await.map(|_| ())
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<T, Error> {
        let url = self.url(path, &opts.params);
        debug!("PUT {url}");
        let builder = self.http.put(url).json(body);
        self.dispatch_json(builder, &opts).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<T, Error> {
        let url = self.url(path, &opts.params);
        debug!("PATCH {url}");
        let builder = self.http.patch(url).json(body);
        self.dispatch_json(builder, &opts).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, Error> {
        let url = self.url(path, &opts.params);
        debug!("DELETE {url}");
        let builder = self.http.delete(url);
        self.dispatch_json(builder, &opts).await
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    async fn dispatch_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        opts: &RequestOptions,
    ) -> Result<T, Error> {
        let (status, content_type, text) = self.exchange(builder, opts).await?;

        // 204 / empty body: an empty result, if T admits one.
        if status == StatusCode::NO_CONTENT || text.is_empty() {
            return serde_json::from_str("null").map_err(|e| Error::Decode {
                message: format!("empty body where a payload was expected: {e}"),
                body: text,
            });
        }

        if is_json(content_type.as_deref()) {
            serde_json::from_str(&text).map_err(|e| decode_error(&e, text))
        } else {
            // Non-JSON success body: hand the raw text through.
            serde_json::from_value(Value::String(text.clone()))
                .map_err(|e| decode_error(&e, text))
        }
    }

    /// Send the request and read the body, both bounded by the per-call
    /// timeout. Classifies every non-success outcome.
    async fn exchange(
        &self,
        builder: reqwest::RequestBuilder,
        opts: &RequestOptions,
    ) -> Result<(StatusCode, Option<String>, String), Error> {
        let headers = self.build_headers(opts);
        let timeout = opts.timeout.unwrap_or(self.default_timeout);

        let round_trip = async {
            let resp = builder.headers(headers).send().await.map_err(|e| {
                warn!("network failure: {e}");
                Error::Network {
                    message: e.to_string(),
                }
            })?;
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let text = resp.text().await.map_err(|e| Error::Network {
                message: format!("failed reading response body: {e}"),
            })?;
            Ok::<_, Error>((status, content_type, text))
        };

        // Dropping the future aborts the in-flight call.
        let (status, content_type, text) = match tokio::time::timeout(timeout, round_trip).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                warn!("request timed out after {timeout_ms}ms");
                return Err(Error::Timeout { timeout_ms });
            }
        };

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED && !opts.skip_auth {
                // Clear first, then the error still propagates — by the
                // time a caller could catch it the application is already
                // resetting to unauthenticated.
                self.session.invalidate();
            }
            return Err(Error::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_owned(),
                body: parse_error_body(content_type.as_deref(), text),
            });
        }

        Ok((status, content_type, text))
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("json"))
}

/// Parse an error body by content-type, once, into its explicit shape.
fn parse_error_body(content_type: Option<&str>, text: String) -> ErrorBody {
    if text.is_empty() {
        return ErrorBody::Empty;
    }
    if is_json(content_type) {
        match serde_json::from_str(&text) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(text),
        }
    } else {
        ErrorBody::Text(text)
    }
}

fn decode_error(e: &serde_json::Error, body: String) -> Error {
    let preview = &body[..body.len().min(200)];
    Error::Decode {
        message: format!("{e} (body preview: {preview:?})"),
        body,
    }
}
