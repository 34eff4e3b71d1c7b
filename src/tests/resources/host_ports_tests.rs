use crate::{
    SdpError,
    tests::common::{create_test_client, mount_delete, mount_list, mutations},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

async fn mount_hosts(mock_server: &MockServer) {
    mount_list(
        mock_server,
        "/hosts",
        json!([
            {"id": 1, "name": "h1", "type": "Linux"},
            {"id": 2, "name": "h2", "type": "Linux"}
        ]),
    )
    .await;
}

#[tokio::test]
async fn test_create_host_iqn_references_host() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/host_iqns"))
        .and(body_json(json!({
            "iqn": "iqn.1994-05.com.redhat:h2",
            "host": {"ref": "/hosts/2"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "iqn": "iqn.1994-05.com.redhat:h2", "host": {"ref": "/hosts/2"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let iqn = client
        .create_host_iqn("h2", "iqn.1994-05.com.redhat:h2")
        .await
        .unwrap();
    assert_eq!(iqn.id, 3);
}

#[tokio::test]
async fn test_host_pwwns_filters_by_host() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;
    mount_list(
        &mock_server,
        "/host_fc_ports",
        json!([
            {"id": 1, "host": {"ref": "/hosts/1"}, "pwwn": "20:00:00:25:b5:00:00:01"},
            {"id": 2, "host": {"ref": "/hosts/2"}, "pwwn": "20:00:00:25:b5:00:00:02"},
            {"id": 3, "host": {"ref": "/hosts/1"}, "pwwn": "20:00:00:25:b5:00:00:03"}
        ]),
    )
    .await;

    let pwwns: Vec<String> = client
        .host_pwwns("h1")
        .await
        .unwrap()
        .into_iter()
        .map(|port| port.pwwn)
        .collect();
    assert_eq!(pwwns, vec!["20:00:00:25:b5:00:00:01", "20:00:00:25:b5:00:00:03"]);
}

#[tokio::test]
async fn test_delete_host_iqns_without_iqns() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;
    mount_list(
        &mock_server,
        "/host_iqns",
        json!([{"id": 7, "host": {"ref": "/hosts/2"}, "iqn": "iqn.x"}]),
    )
    .await;

    let response = client.delete_host_iqns("h1").await.unwrap();
    assert_eq!(response.status_code, 404);
    assert!(mutations(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_delete_host_iqn_removes_only_that_iqn() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;
    mount_list(
        &mock_server,
        "/host_iqns",
        json!([
            {"id": 7, "host": {"ref": "/hosts/1"}, "iqn": "iqn.a"},
            {"id": 8, "host": {"ref": "/hosts/1"}, "iqn": "iqn.b"}
        ]),
    )
    .await;
    mount_delete(&mock_server, "/host_iqns/8", 1).await;

    let response = client.delete_host_iqn("h1", "iqn.b").await.unwrap();
    assert_eq!(response.status_code, 204);
    assert_eq!(mutations(&mock_server).await, vec!["DELETE /api/v2/host_iqns/8"]);
}

#[tokio::test]
async fn test_delete_host_pwwn_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;
    mount_list(&mock_server, "/host_fc_ports", json!([])).await;

    let err = client
        .delete_host_pwwn("h1", "20:00:00:25:b5:00:00:01")
        .await
        .unwrap_err();
    assert!(matches!(err, SdpError::NotFound(_)));
    assert_eq!(err.to_string(), "No PWWNs found on the host 'h1'");
}

#[tokio::test]
async fn test_delete_host_pwwns_removes_each_port() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_hosts(&mock_server).await;
    mount_list(
        &mock_server,
        "/host_fc_ports",
        json!([
            {"id": 1, "host": {"ref": "/hosts/1"}, "pwwn": "a"},
            {"id": 2, "host": {"ref": "/hosts/2"}, "pwwn": "b"},
            {"id": 3, "host": {"ref": "/hosts/1"}, "pwwn": "c"}
        ]),
    )
    .await;
    mount_delete(&mock_server, "/host_fc_ports/1", 1).await;
    mount_delete(&mock_server, "/host_fc_ports/3", 1).await;

    client.delete_host_pwwns("h1").await.unwrap();
    assert_eq!(
        mutations(&mock_server).await,
        vec!["DELETE /api/v2/host_fc_ports/1", "DELETE /api/v2/host_fc_ports/3"]
    );
}
