use crate::{
    SdpClient, SdpConfig, SdpConnection, SdpPassword, SdpServer, SdpUsername,
    core::infrastructure::api_client::ApiClient,
};
use serde_json::{Value, json};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn create_test_connection(server_url: &str) -> SdpConnection {
    SdpConnection::with_base_url(
        SdpServer::new_unchecked("sdp.test".to_string()),
        SdpUsername::new_unchecked("admin".to_string()),
        SdpPassword::new_unchecked("secret".to_string()),
        Url::parse(&format!("{}/api/v2", server_url)).unwrap(),
    )
}

pub(crate) fn create_test_client(mock_server: &MockServer) -> SdpClient {
    create_test_client_with(mock_server, SdpConfig::default())
}

pub(crate) fn create_test_client_with(mock_server: &MockServer, config: SdpConfig) -> SdpClient {
    let connection = create_test_connection(&mock_server.uri());
    let api_client = ApiClient::new(connection, &config).unwrap();
    SdpClient { api_client, config }
}

/// A list endpoint page holding every hit.
pub(crate) fn page(hits: Value) -> ResponseTemplate {
    let total = hits.as_array().map_or(0, Vec::len);
    ResponseTemplate::new(200).set_body_json(json!({
        "hits": hits,
        "limit": 1000,
        "offset": 0,
        "total": total
    }))
}

/// Serves `hits` for every GET on `/api/v2{endpoint}`, whatever the query.
pub(crate) async fn mount_list(mock_server: &MockServer, endpoint: &str, hits: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2{}", endpoint)))
        .respond_with(page(hits))
        .mount(mock_server)
        .await;
}

/// Answers DELETE on `/api/v2{endpoint}` with `204 No Content`.
pub(crate) async fn mount_delete(mock_server: &MockServer, endpoint: &str, times: u64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/api/v2{}", endpoint)))
        .respond_with(ResponseTemplate::new(204))
        .expect(times)
        .mount(mock_server)
        .await;
}

/// The `METHOD /path` of every non-GET request received, in order.
pub(crate) async fn mutations(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.method.as_str() != "GET")
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}

/// The JSON bodies of every POST received, in order.
pub(crate) async fn posted_bodies(mock_server: &MockServer) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.method.as_str() == "POST")
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

pub(crate) fn config(value: Value) -> crate::UpdateConfig {
    value.as_object().cloned().unwrap()
}
