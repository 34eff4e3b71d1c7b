use crate::{
    CreateCapacityPolicyParams, CreateRetentionPolicyParams, SdpError, ValidationError,
    tests::common::{config, create_test_client, mount_delete, mount_list},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

#[tokio::test]
async fn test_create_capacity_policy() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/api/v2/vg_capacity_policies"))
        .and(body_json(json!({
            "name": "tight",
            "warning_threshold": 70,
            "error_threshold": 80,
            "critical_threshold": 90,
            "full_threshold": 95,
            "snapshot_overhead_threshold": 50
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8,
            "name": "tight",
            "warning_threshold": 70,
            "error_threshold": 80,
            "critical_threshold": 90,
            "full_threshold": 95,
            "snapshot_overhead_threshold": 50
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = client
        .create_capacity_policy(CreateCapacityPolicyParams {
            name: "tight".to_string(),
            warning_threshold: 70,
            error_threshold: 80,
            critical_threshold: 90,
            full_threshold: 95,
            snapshot_overhead_threshold: 50,
        })
        .await
        .unwrap();
    assert_eq!(policy.id, 8);
    assert_eq!(policy.full_threshold, 95);
}

#[tokio::test]
async fn test_capacity_policy_lookups() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(
        &mock_server,
        "/vg_capacity_policies",
        json!([{"id": 1, "name": "default"}, {"id": 8, "name": "tight"}]),
    )
    .await;

    assert_eq!(client.capacity_policy_id("tight").await.unwrap(), 8);
    assert_eq!(client.capacity_policy_name(1).await.unwrap(), "default");
    assert!(matches!(
        client.capacity_policy_id("loose").await,
        Err(SdpError::NameNotFound { .. })
    ));
}

#[tokio::test]
async fn test_capacity_policies_by_name_uses_contains_filter() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v2/vg_capacity_policies"))
        .and(query_param("name__contains", "gold tier"))
        .respond_with(crate::tests::common::page(json!([{"id": 4, "name": "gold tier 1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let found = client.capacity_policies_by_name("gold tier").await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_update_capacity_policy_validates_thresholds_keys() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let err = client
        .update_capacity_policy("tight", config(json!({"warningThreshold": 60})))
        .await
        .unwrap_err();
    match err {
        SdpError::Validation(ValidationError::InvalidUpdateKeys { invalid, allowed, .. }) => {
            assert_eq!(invalid, vec!["warningThreshold".to_string()]);
            assert!(allowed.contains(&"warning_threshold".to_string()));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_capacity_policy() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/vg_capacity_policies", json!([{"id": 8, "name": "tight"}])).await;
    mount_delete(&mock_server, "/vg_capacity_policies/8", 1).await;

    let response = client.delete_capacity_policy("tight").await.unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn test_create_retention_policy_sends_counters_as_strings() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/api/v2/retention_policies"))
        .and(body_json(json!({
            "name": "daily",
            "num_snapshots": "7",
            "weeks": "0",
            "days": "7",
            "hours": "0"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "name": "daily", "num_snapshots": "7", "weeks": "0", "days": "7", "hours": "0"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = client
        .create_retention_policy(CreateRetentionPolicyParams {
            name: "daily".to_string(),
            num_snapshots: 7,
            weeks: 0,
            days: 7,
            hours: 0,
        })
        .await
        .unwrap();
    assert_eq!(policy.num_snapshots, Some(7));
    assert_eq!(policy.days, Some(7));
}

#[tokio::test]
async fn test_update_retention_policy() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/retention_policies", json!([{"id": 3, "name": "daily"}])).await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/retention_policies/3"))
        .and(body_json(json!({"num_snapshots": 14})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "daily", "num_snapshots": 14
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = client
        .update_retention_policy("daily", config(json!({"num_snapshots": 14})))
        .await
        .unwrap();
    assert_eq!(policy.num_snapshots, Some(14));

    assert!(
        client
            .update_retention_policy("daily", config(json!({"minutes": 5})))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_create_snapshot_references_group_and_policy() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/volume_groups", json!([{"id": 2, "name": "vg1"}])).await;
    mount_list(&mock_server, "/retention_policies", json!([{"id": 3, "name": "daily"}])).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/snapshots"))
        .and(body_json(json!({
            "name": "nightly",
            "volume_group": {"ref": "/volume_groups/2"},
            "retention_policy": {"ref": "/retention_policies/3"},
            "deletable": true,
            "exposable": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 40,
            "name": "vg1:nightly",
            "volume_group": {"ref": "/volume_groups/2"},
            "retention_policy": {"ref": "/retention_policies/3"},
            "deletable": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = client
        .create_snapshot("nightly", "vg1", "daily", true, false)
        .await
        .unwrap();
    assert_eq!(snapshot.id, 40);
    assert!(snapshot.deletable);
    assert!(!snapshot.exposable);
}

#[tokio::test]
async fn test_delete_snapshot() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_list(&mock_server, "/snapshots", json!([{"id": 40, "name": "vg1:nightly"}])).await;
    mount_delete(&mock_server, "/snapshots/40", 1).await;

    client.delete_snapshot("vg1:nightly").await.unwrap();
}
