//! Volume group snapshots. The endpoint has no `PATCH`, so there is no update.

use crate::{
    DeleteResponse, ObjectRef, ResourceKind, SdpClient, SdpResult, Snapshot,
    core::domain::model::snapshot::CreateSnapshotRequest,
};

impl SdpClient {
    pub async fn snapshots(&self) -> SdpResult<Vec<Snapshot>> {
        self.list_named().await
    }

    pub async fn snapshot_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<Snapshot>(name).await
    }

    /// Takes a snapshot of a volume group under a retention policy.
    pub async fn create_snapshot(
        &self,
        name: &str,
        volume_group: &str,
        retention_policy: &str,
        deletable: bool,
        exposable: bool,
    ) -> SdpResult<Snapshot> {
        let volume_group_id = self.volume_group_id(volume_group).await?;
        let retention_policy_id = self.retention_policy_id(retention_policy).await?;
        let body = CreateSnapshotRequest {
            name,
            volume_group: ObjectRef::new(ResourceKind::VolumeGroup, volume_group_id),
            retention_policy: ObjectRef::new(ResourceKind::RetentionPolicy, retention_policy_id),
            deletable,
            exposable,
        };
        self.api_client
            .post(&ResourceKind::Snapshot.endpoint(), &body)
            .await
    }

    pub async fn delete_snapshot(&self, name: &str) -> SdpResult<DeleteResponse> {
        let id = self.snapshot_id(name).await?;
        self.api_client
            .delete(&ResourceKind::Snapshot.object_endpoint(id))
            .await
    }
}
