//! Integration tests for the full invocation pipeline: routing →
//! transport → decode, with a wiremock stand-in for the backend.

use raidlink::prelude::*;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ServiceClient {
    ServiceClient::builder(server.uri()).build().unwrap()
}

fn client_with(
    server: &MockServer,
    routing: RoutingConfig,
) -> ServiceClient {
    ServiceClient::builder(server.uri())
        .routing(routing)
        .build()
        .unwrap()
}

// =========================================================================
// Routing conventions
// =========================================================================

#[tokio::test]
async fn service_time_composes_path_segment_under_path_routing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service-time"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","serviceTime":1700000000}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_service_time().await;

    assert!(result.success());
    assert_eq!(result.service_time, 1_700_000_000);
}

#[tokio::test]
async fn service_time_composes_query_parameter_under_query_routing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("action", "service-time"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","serviceTime":42}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        RoutingConfig {
            action_via_query: true,
            token_via_query: false,
        },
    );
    let result = client.get_service_time().await;

    assert!(result.success());
    assert_eq!(result.service_time, 42);
}

// =========================================================================
// Credential placement
// =========================================================================

#[tokio::test]
async fn login_posts_payload_without_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(
            serde_json::json!({"username": "a", "password": "b"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","id":"p-1","loginToken":"tok-1"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.login("a", "b").await;

    assert!(result.success());
    assert_eq!(result.player.login_token, "tok-1");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("Authorization"));
}

#[tokio::test]
async fn token_travels_as_bearer_header_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(wiremock::matchers::header(
            "Authorization",
            "Bearer tok123",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","items":[]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_item_list("tok123").await;
    assert!(result.success());

    // Header placement must not leak into the query.
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.as_str().contains("logintoken"));
}

#[tokio::test]
async fn token_travels_as_query_parameter_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("logintoken", "tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","items":[]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        RoutingConfig {
            action_via_query: false,
            token_via_query: true,
        },
    );
    let result = client.get_item_list("tok123").await;
    assert!(result.success());

    // Query placement must not also set the header.
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("Authorization"));
}

#[tokio::test]
async fn query_routed_action_and_query_token_share_one_question_mark() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("action", "items"))
        .and(query_param("logintoken", "tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","items":[]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        RoutingConfig {
            action_via_query: true,
            token_via_query: true,
        },
    );
    let result = client.get_item_list("tok123").await;
    assert!(result.success());
}

// =========================================================================
// Outcome classification through the typed pipeline
// =========================================================================

#[tokio::test]
async fn server_error_yields_unknown_server_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/staminas"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("oops"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_stamina_list("tok123").await;

    assert!(!result.success());
    assert_eq!(result.error_code, ErrorCode::UnknownServer);
    assert!(result.staminas.is_empty());
}

#[tokio::test]
async fn unreachable_backend_yields_network_code() {
    // Nothing listens on this port.
    let client = ServiceClient::builder("http://127.0.0.1:9")
        .build()
        .unwrap();
    let result = client.get_currency_list("tok123").await;

    assert!(!result.success());
    assert_eq!(result.error_code, ErrorCode::Network);
}

#[tokio::test]
async fn malformed_success_body_yields_decode_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service-time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>maintenance</html>"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_service_time().await;

    assert!(!result.success());
    assert_eq!(result.error_code, ErrorCode::DecodeError);
}

#[tokio::test]
async fn domain_failure_arrives_as_ordinary_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open-lootbox"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NOT_ENOUGH_HARD_CURRENCY"}"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.open_loot_box("tok123", "lootbox-01", 0).await;

    assert!(!result.success());
    assert_eq!(
        result.error_code,
        ErrorCode::NotEnoughHardCurrency
    );
}

// =========================================================================
// Composite register-or-login
// =========================================================================

#[tokio::test]
async fn register_or_login_chains_login_after_successful_register() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","id":"p-1"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(
            serde_json::json!({"username": "alice", "password": "pw"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","id":"p-1","loginToken":"tok-9"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.register_or_login("alice", "pw").await;

    assert!(result.success());
    assert_eq!(result.player.login_token, "tok-9");
}

#[tokio::test]
async fn register_or_login_never_logs_in_after_failed_register() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"USERNAME_ALREADY_EXISTS"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE"}"#,
        ))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.register_or_login("alice", "pw").await;

    // The failing register result is forwarded unchanged.
    assert!(!result.success());
    assert_eq!(
        result.error_code,
        ErrorCode::UsernameAlreadyExists
    );
}

// =========================================================================
// Raw passthrough
// =========================================================================

#[tokio::test]
async fn raw_get_returns_unparsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service-time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("not json at all"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.get_raw("service-time", "").await;

    assert!(outcome.is_success());
    assert_eq!(outcome.body(), Some("not json at all"));
}

#[tokio::test]
async fn raw_post_sends_payload_and_preserves_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/finish-stage"))
        .and(body_json(serde_json::json!({"session": "s-1"})))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"detail":"bad session"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client
        .post_raw(
            "finish-stage",
            serde_json::json!({"session": "s-1"}),
            "tok123",
        )
        .await;

    assert_eq!(
        outcome,
        RawOutcome::Protocol {
            status: 400,
            body: r#"{"detail":"bad session"}"#.into(),
        }
    );
}

// =========================================================================
// Concurrency
// =========================================================================

#[tokio::test]
async fn concurrent_calls_share_no_state_and_all_resolve() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service-time"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errorCode":"NONE","serviceTime":7}"#,
        ))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_service_time().await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.success());
        assert_eq!(result.service_time, 7);
    }
}
