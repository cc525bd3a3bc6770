//! Integration tests for the full client pipeline.
//!
//! A mock [`Dispatcher`] records every [`Request`] the client composes
//! and answers with canned [`Response`]s, which exercises the whole
//! path (identity resolution, queueing, batching, endpoint and header
//! composition, settlement semantics) without a socket.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use gametrics::prelude::*;
use http::StatusCode;
use http::header::AUTHORIZATION;
use serde_json::{Value, json};

// =========================================================================
// Mock dispatcher
// =========================================================================

#[derive(Clone, Default)]
struct MockDispatcher {
    requests: Arc<Mutex<Vec<Request>>>,
    responses: Arc<Mutex<VecDeque<Response>>>,
}

impl MockDispatcher {
    fn new() -> Self {
        Self::default()
    }

    /// Queues a canned response; unanswered dispatches get `200 {}`.
    fn push_response(&self, response: Response) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn dispatch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Dispatcher for MockDispatcher {
    async fn dispatch(&self, request: Request) -> Response {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Response::completed(StatusCode::OK, "{}"))
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn test_device() -> DeviceInfo {
    DeviceInfo {
        model: "Pixel 8".into(),
        device_type: "Handheld".into(),
        operating_system: "Android 15".into(),
        unique_id: "device-abc".into(),
    }
}

fn test_client() -> (GametricsClient<MockDispatcher>, MockDispatcher) {
    let mock = MockDispatcher::new();
    let client = GametricsClient::builder()
        .settings(
            Settings::new("key-123")
                .with_player_id("p1")
                .with_game_version("1.0")
                .with_base_url("https://api.test.io")
                .with_api_version("v1"),
        )
        .device(test_device())
        .dispatcher(mock.clone())
        .build();
    (client, mock)
}

fn body_of(request: &Request) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body"))
        .expect("body is JSON")
}

// =========================================================================
// Sending and batching
// =========================================================================

#[tokio::test]
async fn send_action_wraps_a_single_action_in_an_array() {
    init_tracing();
    let (client, mock) = test_client();

    let response = client
        .send_action("start_game", json!({"game_type": "tactical", "xp": 0}))
        .await;
    assert!(response.is_success());

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.url, "https://api.test.io/v1/actions/key-123/");
    assert_eq!(
        request.headers.get(AUTHORIZATION).unwrap(),
        "api_key key-123"
    );

    // Even a singleton is a one-element array on the wire.
    let body = body_of(request);
    let batch = body.as_array().expect("body is an array");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0]["type"], "start_game");
    assert_eq!(batch[0]["player_id"], "p1");
    assert_eq!(batch[0]["parameters"]["game_type"], "tactical");
    assert_eq!(batch[0]["version"], "1.0");
    assert_eq!(batch[0]["device_model"], "Pixel 8");
}

#[tokio::test]
async fn queued_actions_flush_as_one_ordered_array() {
    let (client, mock) = test_client();

    client.queue_action("start_game", json!("0")).unwrap();
    client.queue_action("gain_xp", json!("1000")).unwrap();
    assert_eq!(client.pending_actions(), 2);

    let response = client.flush_actions().await;
    assert!(response.is_success());
    assert_eq!(client.pending_actions(), 0);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1, "one batch, one POST");

    let body = body_of(&requests[0]);
    let batch = body.as_array().expect("body is an array");
    assert_eq!(batch.len(), 2);
    // Arrival order, exactly.
    assert_eq!(batch[0]["type"], "start_game");
    assert_eq!(batch[0]["parameters"], "0");
    assert_eq!(batch[1]["type"], "gain_xp");
    assert_eq!(batch[1]["parameters"], "1000");
}

#[tokio::test]
async fn empty_action_type_settles_without_any_dispatch() {
    let (client, mock) = test_client();

    let response = client.send_action("", json!({"xp": 1})).await;

    // The flow completes through the error channel, not a panic, and
    // nothing reaches the network.
    assert!(!response.is_success());
    assert!(matches!(
        response.error(),
        Some(DispatchError::Protocol(_))
    ));
    assert_eq!(mock.dispatch_count(), 0);

    // Queueing rejects the same way.
    assert!(client.queue_action("", json!({})).is_err());
    assert_eq!(client.pending_actions(), 0);
}

#[tokio::test]
async fn failed_flush_keeps_the_queue_until_a_send_succeeds() {
    let (client, mock) = test_client();

    client.queue_action("start_game", json!("0")).unwrap();
    client.queue_action("gain_xp", json!("1000")).unwrap();

    // First flush: the server is unhappy. Nothing may be lost.
    mock.push_response(Response::completed(
        StatusCode::INTERNAL_SERVER_ERROR,
        "",
    ));
    let response = client.flush_actions().await;
    assert!(!response.is_success());
    assert_eq!(client.pending_actions(), 2);

    // Second flush: delivery confirmed, queue cleared.
    let response = client.flush_actions().await;
    assert!(response.is_success());
    assert_eq!(client.pending_actions(), 0);

    // Both flushes posted the same two-action batch.
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(body_of(&requests[0]), body_of(&requests[1]));
}

#[tokio::test]
async fn flushing_an_empty_queue_is_a_local_success() {
    let (client, mock) = test_client();

    let response = client.flush_actions().await;

    assert!(response.is_success());
    assert!(!response.has_data());
    assert_eq!(mock.dispatch_count(), 0);
}

#[tokio::test]
async fn queued_identity_is_frozen_at_creation_time() {
    let (client, mock) = test_client();

    client.queue_action("start_game", json!({})).unwrap();
    client.set_player_id("someone-else");
    client.flush_actions().await;

    let body = body_of(&mock.requests()[0]);
    // The action keeps the identity it was created with.
    assert_eq!(body[0]["player_id"], "p1");
}

// =========================================================================
// Kill-switch
// =========================================================================

#[tokio::test]
async fn disabled_client_settles_every_operation_without_network() {
    let (client, mock) = test_client();
    client.queue_action("start_game", json!({})).unwrap();

    client.disable();
    assert!(!client.is_enabled());

    // Every operation still completes; none of them dispatches.
    let send = client.send_action("gain_xp", json!(10)).await;
    let flush = client.flush_actions().await;
    let advisor = client.get_advisor().await;

    for response in [&send, &flush, &advisor] {
        assert!(matches!(
            response.error(),
            Some(DispatchError::Disabled)
        ));
    }
    assert_eq!(mock.dispatch_count(), 0);
    // The queued action is retained, not confirmed away.
    assert_eq!(client.pending_actions(), 1);

    // Re-enabling restores normal operation.
    client.enable();
    assert!(client.flush_actions().await.is_success());
    assert_eq!(client.pending_actions(), 0);
}

// =========================================================================
// Fetching
// =========================================================================

#[tokio::test]
async fn advisor_value_is_extractable_from_the_response() {
    let (client, mock) = test_client();
    mock.push_response(Response::completed(
        StatusCode::OK,
        r#"{"advisor":"X"}"#,
    ));

    let response = client.get_advisor().await;

    assert_eq!(response.value("advisor"), Some(&json!("X")));
    assert_eq!(response.value("missing"), None);
    assert!(response.has_data());

    let request = &mock.requests()[0];
    assert_eq!(request.method, http::Method::GET);
    assert_eq!(request.url, "https://api.test.io/v1/advisor/key-123/p1/");
    assert!(request.body.is_none());
    assert_eq!(
        request.headers.get(AUTHORIZATION).unwrap(),
        "api_key key-123"
    );
}

#[tokio::test]
async fn stats_and_recommendations_hit_player_scoped_urls() {
    let (client, mock) = test_client();

    client.get_player_stats().await;
    client.get_recommendations().await;

    let requests = mock.requests();
    assert_eq!(
        requests[0].url,
        "https://api.test.io/v1/players/key-123/p1/"
    );
    assert_eq!(
        requests[1].url,
        "https://api.test.io/v1/recommendations/key-123/p1/"
    );
}

#[tokio::test]
async fn device_id_stands_in_when_no_player_id_is_configured() {
    let mock = MockDispatcher::new();
    let client = GametricsClient::builder()
        .settings(
            Settings::new("key-123")
                .with_base_url("https://api.test.io")
                .with_api_version("v1"),
        )
        .device(test_device())
        .dispatcher(mock.clone())
        .build();

    client.get_advisor().await;
    client.send_action("start_game", json!({})).await;

    let requests = mock.requests();
    assert_eq!(
        requests[0].url,
        "https://api.test.io/v1/advisor/key-123/device-abc/"
    );
    assert_eq!(body_of(&requests[1])[0]["player_id"], "device-abc");
}

// =========================================================================
// Convenience senders
// =========================================================================

#[tokio::test]
async fn start_session_reports_the_game_version() {
    let (client, mock) = test_client();

    client.start_session().await;

    let body = body_of(&mock.requests()[0]);
    assert_eq!(body[0]["type"], "start_session");
    assert_eq!(body[0]["parameters"]["version"], "1.0");
}

#[tokio::test]
async fn retention_and_conversion_use_the_service_type_names() {
    let (client, mock) = test_client();

    client.retention("daily_reward").await;
    client.conversion("watched_ad").await;

    let requests = mock.requests();
    let retention = body_of(&requests[0]);
    assert_eq!(retention[0]["type"], "retention_action");
    assert_eq!(retention[0]["parameters"]["retention_type"], "daily_reward");

    let conversion = body_of(&requests[1]);
    assert_eq!(conversion[0]["type"], "conversion_action");
    assert_eq!(
        conversion[0]["parameters"]["conversion_type"],
        "watched_ad"
    );
}
