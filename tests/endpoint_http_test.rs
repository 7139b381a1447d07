//! HTTP-level tests of the endpoint tools against a mock platform server.

use std::sync::Arc;

use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use pretty_assertions::assert_eq;
use serde_json::json;

use realtime_mcp::{ApiConfig, ToolRegistry};

fn registry(server: &MockServer, credential: Option<&str>) -> ToolRegistry {
    let config = ApiConfig::new(server.base_url(), credential.map(str::to_string));
    ToolRegistry::from_config(Arc::new(config))
}

#[tokio::test]
async fn channel_metadata_request_carries_auth_and_accept_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/channels/abc")
            .header("accept", "application/json")
            .header("authorization", "Basic dXNlcjpwYXNz");
        then.status(200).json_body(json!({
            "channelId": "abc",
            "status": {"isActive": true, "occupancy": {"metrics": {"connections": 2}}}
        }));
    });

    let result = registry(&server, Some("dXNlcjpwYXNz"))
        .call("get_channels_channel_id", Some(json!({"channel_id": "abc"})))
        .await;

    mock.assert();
    assert!(!result.is_error());
    let decoded: serde_json::Value = serde_json::from_str(&result.text_content()).unwrap();
    assert_eq!(decoded["status"]["occupancy"]["metrics"]["connections"], 2);
}

#[tokio::test]
async fn unauthenticated_config_sends_no_authorization() {
    let server = MockServer::start();
    let authorized = server.mock(|when, then| {
        when.method(GET)
            .path("/time")
            .header_exists("authorization");
        then.status(500);
    });
    let mock = server.mock(|when, then| {
        when.method(GET).path("/time");
        then.status(200).body("[1700000000000]");
    });

    let result = registry(&server, None).call("get_time", None).await;

    authorized.assert_hits(0);
    mock.assert();
    assert_eq!(result.text_content(), "[1700000000000]");
}

#[tokio::test]
async fn publish_posts_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/channels/news/messages")
            .header("content-type", "application/json")
            .json_body(json!({"name": "headline", "data": "hello"}));
        then.status(201).json_body(json!({"channel": "news", "messageId": "m1"}));
    });

    let result = registry(&server, Some("dXNlcjpwYXNz"))
        .call(
            "post_channels_channel_id_messages",
            Some(json!({"channel_id": "news", "name": "headline", "data": "hello"})),
        )
        .await;

    mock.assert();
    assert!(!result.is_error());
    assert!(result.text_content().contains("\"messageId\": \"m1\""));
}

#[tokio::test]
async fn stats_query_parameters_reach_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stats")
            .query_param("start", "1000")
            .query_param("limit", "10")
            .query_param("unit", "hour");
        then.status(200).body("[]");
    });

    let result = registry(&server, None)
        .call(
            "get_stats",
            Some(json!({"start": "1000", "limit": 10, "unit": "hour"})),
        )
        .await;

    mock.assert();
    assert_eq!(result.text_content(), "[]");
}

#[tokio::test]
async fn not_found_returns_raw_body_as_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/channels/missing");
        then.status(404).body(r#"{"message":"not found"}"#);
    });

    let result = registry(&server, None)
        .call("get_channels_channel_id", Some(json!({"channel_id": "missing"})))
        .await;

    mock.assert();
    assert!(result.is_error());
    assert_eq!(result.text_content(), r#"{"message":"not found"}"#);
}

#[tokio::test]
async fn request_token_returns_token_details() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/keys/app.key/requestToken")
            .json_body(json!({"keyName": "app.key", "ttl": 60000}));
        then.status(200).json_body(json!({
            "token": "xVLyHw.abc",
            "keyName": "app.key",
            "expires": 1700000060000i64
        }));
    });

    let result = registry(&server, Some("dXNlcjpwYXNz"))
        .call(
            "post_keys_keyName_requestToken",
            Some(json!({"keyName": "app.key", "ttl": 60000})),
        )
        .await;

    mock.assert();
    let decoded: serde_json::Value = serde_json::from_str(&result.text_content()).unwrap();
    assert_eq!(decoded["token"], "xVLyHw.abc");
    assert_eq!(decoded["expires"], 1700000060000i64);
}

#[tokio::test]
async fn device_unregistration_uses_delete() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/push/deviceRegistrations/d1");
        then.status(204);
    });

    let result = registry(&server, Some("dXNlcjpwYXNz"))
        .call(
            "delete_push_deviceRegistrations_device_id",
            Some(json!({"device_id": "d1"})),
        )
        .await;

    mock.assert();
    assert!(!result.is_error());
    assert_eq!(result.text_content(), "");
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    let config = ApiConfig::new("http://127.0.0.1:1", None);
    let registry = ToolRegistry::from_config(Arc::new(config));

    let result = registry.call("get_time", None).await;

    assert!(result.is_error());
    assert!(result.text_content().starts_with("Request failed: "));
}
