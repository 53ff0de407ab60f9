#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` transport mechanics using wiremock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use relaydeck_api::{
    ApiClient, Error, ErrorBody, LogFilter, RequestOptions, SessionHandle, SessionStore,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<SessionStore>, ApiClient) {
    let server = MockServer::start().await;
    let store = Arc::new(SessionStore::in_memory());
    let handle: Arc<dyn SessionHandle> = store.clone();
    let base = Url::parse(&format!("{}/api/", server.uri())).unwrap();
    let client = ApiClient::new(base, handle);
    (server, store, client)
}

/// Matches only requests that carry no `Authorization` header at all.
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn provider_page() -> Value {
    json!({
        "code": 200,
        "message": "ok",
        "data": {
            "records": [{
                "id": "p1",
                "name": "openai-main",
                "type": 0,
                "baseUrl": "https://api.openai.com/v1",
                "modelName": "gpt-4o,gpt-4o-mini",
                "isEnabled": 1
            }],
            "total": 1, "size": 10, "current": 1, "pages": 1
        }
    })
}

// ── Auth header handling ────────────────────────────────────────────

#[tokio::test]
async fn bearer_token_is_attached_to_authenticated_calls() {
    let (server, store, client) = setup().await;
    store.start_session("tok-1", Some("alice"), None);

    Mock::given(method("GET"))
        .and(path("/api/providers"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_page()))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.list_providers(1, 10, None).await.unwrap();
    assert_eq!(envelope.code, 200);
    let page = envelope.data.unwrap();
    assert_eq!(page.records.len(), 1);
    assert!(page.records[0].is_enabled);
}

#[tokio::test]
async fn login_never_sends_a_stale_token() {
    let (server, store, client) = setup().await;
    store.start_session("stale-token", Some("alice"), None);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200, "message": "ok",
            "data": {"token": "fresh-token", "username": "alice"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let envelope = client.login("alice", &secret).await.unwrap();
    assert_eq!(envelope.data.unwrap().token, "fresh-token");
}

#[tokio::test]
async fn caller_headers_win_over_defaults() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let opts = RequestOptions::new().header("Accept", "text/plain");
    let _: Value = client.get("ping", opts).await.unwrap();
}

// ── Query parameters ────────────────────────────────────────────────

#[tokio::test]
async fn absent_filter_params_are_omitted_from_the_query() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(query_param("current", "1"))
        .and(query_param("size", "20"))
        .and(query_param_is_missing("providerId"))
        .and(query_param_is_missing("startTime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200, "message": "ok",
            "data": {"records": [], "total": 0, "size": 20, "current": 1, "pages": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.list_logs(1, 20, &LogFilter::default()).await.unwrap();
    assert!(envelope.is_ok());
}

// ── Failure classification ──────────────────────────────────────────

#[tokio::test]
async fn slow_endpoint_raises_timeout_not_network() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 200}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let result: Result<Value, Error> = client
        .get("logs", RequestOptions::new().timeout(Duration::from_millis(50)))
        .await;

    match result {
        Err(Error::Timeout { timeout_ms }) => assert_eq!(timeout_ms, 50),
        other => panic!("expected Timeout, got: {other:?}"),
    }
    assert!(
        started.elapsed() < Duration::from_millis(300),
        "timeout did not fire promptly: {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn unreachable_host_raises_network() {
    let handle: Arc<dyn SessionHandle> = Arc::new(SessionStore::in_memory());
    // Nothing listens on the discard port.
    let base = Url::parse("http://127.0.0.1:9/api/").unwrap();
    let client = ApiClient::new(base, handle).with_default_timeout(Duration::from_secs(2));

    let result: Result<Value, Error> = client.get("providers", RequestOptions::new()).await;
    assert!(
        matches!(result, Err(Error::Network { .. })),
        "expected Network error, got: {result:?}"
    );
}

#[tokio::test]
async fn json_error_bodies_are_parsed() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/providers"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"code": 500, "message": "provider backend offline"})),
        )
        .mount(&server)
        .await;

    let result = client.list_providers(1, 10, None).await;
    match result {
        Err(Error::Http { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body.message(), Some("provider backend offline"));
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn text_error_bodies_are_kept_raw() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/providers"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream gone"))
        .mount(&server)
        .await;

    let result = client.list_providers(1, 10, None).await;
    match result {
        Err(Error::Http { status, body, .. }) => {
            assert_eq!(status, 502);
            assert_eq!(body, ErrorBody::Text("upstream gone".into()));
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn no_content_resolves_empty() {
    let (server, _store, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.logout().await.unwrap();
}

#[tokio::test]
async fn non_json_success_body_is_handed_through() {
    let (server, _store, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let body: String = client.get("ping", RequestOptions::new()).await.unwrap();
    assert_eq!(body, "pong");
}

// ── Session expiry ──────────────────────────────────────────────────

#[tokio::test]
async fn authenticated_401_clears_the_session_exactly_once() {
    let (server, store, client) = setup().await;
    store.start_session("tok-1", Some("alice"), None);
    let mut invalidated = store.subscribe();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    // Two in-flight requests both see the 401 in the same tick.
    let (first, second) = tokio::join!(
        client.list_providers(1, 10, None),
        client.list_groups(1, 10),
    );

    assert!(first.as_ref().is_err_and(|e| e.is_unauthorized()));
    assert!(second.as_ref().is_err_and(|e| e.is_unauthorized()));
    assert!(store.session().is_none(), "session should be cleared");
    assert_eq!(store.generation(), 1, "exactly one invalidation event");
    assert!(invalidated.has_changed().unwrap());
    assert_eq!(*invalidated.borrow_and_update(), 1);
}

#[tokio::test]
async fn unauthenticated_401_does_not_touch_the_session() {
    let (server, store, client) = setup().await;
    store.start_session("tok-1", Some("alice"), None);

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result: Result<Value, Error> = client
        .get("health", RequestOptions::unauthenticated())
        .await;

    assert!(matches!(result, Err(Error::Http { status: 401, .. })));
    assert!(store.session().is_some(), "session must survive");
    assert_eq!(store.generation(), 0);
}
