use crate::{
    CreateVolumeParams, FailurePolicy, SdpConfig, SdpError, ValidationError,
    tests::common::{
        config, create_test_client, create_test_client_with, mount_delete, mount_list, mutations,
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

async fn mount_volume(mock_server: &MockServer) {
    mount_list(
        mock_server,
        "/volumes",
        json!([
            {"id": 5, "name": "v1", "size": 10485760, "volume_group": {"ref": "/volume_groups/2"}},
            {"id": 6, "name": "v2", "size": 10485760, "volume_group": {"ref": "/volume_groups/2"}}
        ]),
    )
    .await;
}

async fn mount_volume_mappings(mock_server: &MockServer) {
    mount_list(
        mock_server,
        "/mappings",
        json!([
            {"id": 30, "host": {"ref": "/hosts/1"}, "volume": {"ref": "/volumes/5"}},
            {"id": 31, "host": {"ref": "/host_groups/4"}, "volume": {"ref": "/volumes/5"}},
            {"id": 32, "host": {"ref": "/hosts/1"}, "volume": {"ref": "/volumes/6"}}
        ]),
    )
    .await;
}

#[tokio::test]
async fn test_create_volume_sends_kib_and_group_ref() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/volume_groups", json!([{"id": 2, "name": "databases"}])).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/volumes"))
        .and(body_json(json!({
            "name": "db01-data",
            "size": 100 * 1024 * 1024,
            "volume_group": {"ref": "/volume_groups/2"},
            "vmware_support": true,
            "description": "primary data",
            "read_only": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "db01-data",
            "size": 104857600,
            "volume_group": {"ref": "/volume_groups/2"},
            "vmware_support": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = CreateVolumeParams::new("db01-data", 100, "databases")
        .vmware_support(true)
        .description("primary data");
    let volume = client.create_volume(params).await.unwrap();
    assert_eq!(volume.size, 104_857_600);
    assert!(volume.is_in_volume_group(2));
}

#[tokio::test]
async fn test_create_volume_in_unknown_group() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/volume_groups", json!([])).await;

    let err = client
        .create_volume(CreateVolumeParams::new("v", 1, "missing"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the server does not contain a Volume Group named 'missing'"
    );
    assert!(mutations(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_update_volume_rejects_unknown_keys() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let err = client
        .update_volume("v1", config(json!({"size": 1, "vmware_support": true})))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdpError::Validation(ValidationError::InvalidUpdateKeys { .. })
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_volume_moves_to_named_group() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;
    mount_list(&mock_server, "/volume_groups", json!([{"id": 3, "name": "archive"}])).await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/volumes/5"))
        .and(body_json(json!({"volume_group": {"ref": "/volume_groups/3"}, "read_only": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "name": "v1", "read_only": true, "volume_group": {"ref": "/volume_groups/3"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let volume = client
        .update_volume(
            "v1",
            config(json!({"volume_group": "archive", "read_only": true})),
        )
        .await
        .unwrap();
    assert!(volume.read_only);
    assert!(volume.is_in_volume_group(3));
}

#[tokio::test]
async fn test_volume_by_id_uses_id_filter() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;

    assert_eq!(client.volume_by_id(6).await.unwrap().name, "v2");
    assert!(matches!(
        client.volume_by_id(99).await,
        Err(SdpError::IdNotFound { id: 99, .. })
    ));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(
        requests
            .iter()
            .all(|request| request.url.query().unwrap_or_default().contains("id__in="))
    );
}

#[tokio::test]
async fn test_volume_host_mappings_lists_hosts_only() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;
    mount_volume_mappings(&mock_server).await;
    mount_list(
        &mock_server,
        "/hosts",
        json!([{"id": 1, "name": "h1", "type": "Linux"}, {"id": 4, "name": "h4", "type": "Linux"}]),
    )
    .await;
    mount_list(&mock_server, "/host_groups", json!([{"id": 4, "name": "hg4"}])).await;

    assert_eq!(client.volume_host_mappings("v1").await.unwrap(), vec!["h1"]);
    assert_eq!(client.volume_host_group_mappings("v1").await.unwrap(), vec!["hg4"]);
    assert!(client.volume_host_group_mappings("v2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_volume_removes_mappings_first() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;
    mount_volume_mappings(&mock_server).await;
    mount_delete(&mock_server, "/mappings/30", 1).await;
    mount_delete(&mock_server, "/mappings/31", 1).await;
    mount_delete(&mock_server, "/mappings/32", 0).await;
    mount_delete(&mock_server, "/volumes/5", 1).await;

    client.delete_volume("v1").await.unwrap();
    assert_eq!(
        mutations(&mock_server).await,
        vec![
            "DELETE /api/v2/mappings/30",
            "DELETE /api/v2/mappings/31",
            "DELETE /api/v2/volumes/5",
        ]
    );
}

#[tokio::test]
async fn test_delete_volume_continues_past_failed_cleanup_by_default() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;
    mount_volume_mappings(&mock_server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/mappings/30"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error_msg": "busy"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_delete(&mock_server, "/mappings/31", 1).await;
    mount_delete(&mock_server, "/volumes/5", 1).await;

    let response = client.delete_volume("v1").await.unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn test_delete_volume_continues_when_mappings_cannot_be_listed() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/mappings"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    mount_delete(&mock_server, "/volumes/5", 1).await;

    client.delete_volume("v1").await.unwrap();
}

#[tokio::test]
async fn test_delete_volume_abort_policy_keeps_volume() {
    let mock_server = MockServer::start().await;
    let client = create_test_client_with(
        &mock_server,
        SdpConfig {
            volume_cleanup: FailurePolicy::Abort,
            ..SdpConfig::default()
        },
    );
    mount_volume(&mock_server).await;
    mount_volume_mappings(&mock_server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/mappings/30"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error_msg": "busy"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_delete(&mock_server, "/mappings/31", 0).await;
    mount_delete(&mock_server, "/volumes/5", 0).await;

    let err = client.delete_volume("v1").await.unwrap_err();
    match err {
        SdpError::StepFailed { operation, step, .. } => {
            assert_eq!(operation, "delete Volume 'v1'");
            assert_eq!(step, "delete mapping 30 of /hosts/1");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_create_volume_rejects_oversized_size_without_requests() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let err = client
        .create_volume(CreateVolumeParams::new("huge", u64::MAX, "databases"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdpError::Validation(ValidationError::ConstraintViolation(_))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
