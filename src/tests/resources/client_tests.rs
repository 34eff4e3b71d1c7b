use crate::{
    FailurePolicy, SdpClient, SdpClientBuilder, SdpError, ValidationError, required_env,
    tests::common::create_test_client,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[test]
fn test_builder_requires_server() {
    let err = SdpClient::builder()
        .credentials("admin", "secret")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SdpError::Validation(ValidationError::Field { ref field, .. }) if field == "server"
    ));
}

#[test]
fn test_builder_requires_credentials() {
    let err = SdpClient::builder().server("10.0.0.5").build().unwrap_err();
    assert!(err.to_string().contains("Username is required"));
}

#[test]
fn test_builder_rejects_scheme_in_server() {
    let err = SdpClient::connect("https://10.0.0.5", "admin", "secret").unwrap_err();
    assert!(matches!(err, SdpError::Validation(ValidationError::Format(_))));
}

#[test]
fn test_builder_applies_settings() {
    let client = SdpClient::builder()
        .server("sdp.example.com:8443")
        .credentials("admin", "secret")
        .timeout(Duration::from_secs(3))
        .page_size(50)
        .volume_cleanup(FailurePolicy::Abort)
        .build()
        .unwrap();

    assert_eq!(
        client.connection().base_url().as_str(),
        "https://sdp.example.com:8443/api/v2"
    );
    assert_eq!(client.config().timeout, Duration::from_secs(3));
    assert_eq!(client.config().page_size, 50);
    assert_eq!(client.config().volume_cleanup, FailurePolicy::Abort);
    assert!(client.config().accept_invalid_certs);
}

#[test]
fn test_builder_debug_hides_password() {
    let builder = SdpClientBuilder::default().credentials("admin", "hunter2");
    let rendered = format!("{:?}", builder);
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn test_missing_environment_variable_is_named() {
    let err = required_env("SILK_SDP_VARIABLE_THAT_IS_NEVER_SET").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: The `SILK_SDP_VARIABLE_THAT_IS_NEVER_SET` environment variable is not present"
    );
}

#[tokio::test]
async fn test_with_timeout_keeps_connection() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let short = client.with_timeout(Duration::from_millis(200));

    assert_eq!(short.config().timeout, Duration::from_millis(200));
    assert_eq!(short.api_client.timeout(), Duration::from_millis(200));
    assert_eq!(client.config().timeout, crate::DEFAULT_TIMEOUT);
    assert_eq!(short.connection().base_url(), client.connection().base_url());
}

#[tokio::test]
async fn test_raw_calls_pass_json_through() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v2/system/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [{"state": "online"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/hosts"))
        .and(body_json(json!({"name": "raw", "type": "Linux"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "name": "raw"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/hosts/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let state = client.get_raw("/system/state").await.unwrap();
    assert_eq!(state["hits"][0]["state"], "online");

    let created = client
        .post_raw("/hosts", &json!({"name": "raw", "type": "Linux"}))
        .await
        .unwrap();
    assert_eq!(created["id"], 1);

    let deleted = client.delete_raw("/hosts/1").await.unwrap();
    assert_eq!(deleted, json!({"status_code": 204}));
}

#[tokio::test]
async fn test_raw_endpoint_is_validated_before_sending() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    assert!(client.get_raw("hosts").await.is_err());
    assert!(client.get_raw("/hosts/").await.is_err());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_raw_error_msg_becomes_api_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/api/v2/volumes/9"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error_msg": "Volume is read only"})),
        )
        .mount(&mock_server)
        .await;

    let err = client
        .patch_raw("/volumes/9", &json!({"size": 1}))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdpError::Api { status: 400, ref message } if message == "Volume is read only"
    ));
}
