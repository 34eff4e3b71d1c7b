//! Host and host group mappings to volumes and volume groups.
//!
//! The server keeps a single `/mappings` collection; each record links one
//! initiator (host or host group) to one target (volume or volume group).
//! Group-level operations here fan out into one mapping per volume, run
//! strictly in sequence. A failure stops the fan-out and mappings already
//! created are kept.

use crate::{
    DeleteResponse, FailurePolicy, Mapping, ObjectRef, ResourceKind, SdpClient, SdpError,
    SdpResult, SequentialExecutor, core::domain::model::mapping::CreateMappingRequest,
};
use tracing::info;

impl SdpClient {
    /// Every mapping on the array.
    pub async fn mappings(&self) -> SdpResult<Vec<Mapping>> {
        self.api_client
            .list_all(&ResourceKind::Mapping.endpoint())
            .await
    }

    /// Mappings whose initiator is the given host.
    pub async fn host_mappings(&self, host: &str) -> SdpResult<Vec<Mapping>> {
        let host_id = self.host_id(host).await?;
        self.mappings_of((ResourceKind::Host, host_id)).await
    }

    /// Mappings whose initiator is the given host group.
    pub async fn host_group_mappings(&self, host_group: &str) -> SdpResult<Vec<Mapping>> {
        let group_id = self.host_group_id(host_group).await?;
        self.mappings_of((ResourceKind::HostGroup, group_id)).await
    }

    async fn mappings_of(&self, initiator: (ResourceKind, i64)) -> SdpResult<Vec<Mapping>> {
        Ok(self
            .mappings()
            .await?
            .into_iter()
            .filter(|mapping| mapping.initiator_is(initiator.0, initiator.1))
            .collect())
    }

    /// Maps a single host to a volume.
    ///
    /// # Errors
    /// `SdpError::HostInGroup` when the host belongs to a host group; such
    /// hosts are mapped through their group and no mapping is attempted.
    pub async fn create_host_volume_mapping(&self, host: &str, volume: &str) -> SdpResult<Mapping> {
        let hosts = self.hosts().await?;
        if hosts
            .iter()
            .any(|candidate| candidate.name == host && candidate.is_part_of_group)
        {
            return Err(SdpError::HostInGroup {
                host: host.to_string(),
            });
        }

        let host_id = self.host_id(host).await?;
        let volume_id = self.volume_id(volume).await?;
        self.post_mapping(
            ObjectRef::new(ResourceKind::Host, host_id),
            ObjectRef::new(ResourceKind::Volume, volume_id),
        )
        .await
    }

    /// Maps a host to every volume of a volume group, one volume at a time.
    pub async fn create_host_volume_group_mapping(
        &self,
        host: &str,
        volume_group: &str,
    ) -> SdpResult<Vec<Mapping>> {
        let volumes = self.volume_group_volumes(volume_group).await?;
        let operation = format!("map Volume Group '{}' to Host '{}'", volume_group, host);
        info!(%operation, volumes = volumes.len(), "fanning out volume mappings");

        let mut executor = SequentialExecutor::new(operation, FailurePolicy::Abort);
        for volume in &volumes {
            executor.push(
                format!("map Volume '{}'", volume),
                self.create_host_volume_mapping(host, volume),
            );
        }
        executor.run().await
    }

    /// Maps a host group to a volume.
    pub async fn create_host_group_volume_mapping(
        &self,
        host_group: &str,
        volume: &str,
    ) -> SdpResult<Mapping> {
        let group_id = self.host_group_id(host_group).await?;
        let volume_id = self.volume_id(volume).await?;
        self.post_mapping(
            ObjectRef::new(ResourceKind::HostGroup, group_id),
            ObjectRef::new(ResourceKind::Volume, volume_id),
        )
        .await
    }

    /// Maps a host group to every volume of a volume group.
    ///
    /// With N volumes this issues N mapping creations in order. If the k-th
    /// fails, the k-1 mappings before it remain and the failure is returned
    /// as [`SdpError::StepFailed`].
    pub async fn create_host_group_volume_group_mapping(
        &self,
        host_group: &str,
        volume_group: &str,
    ) -> SdpResult<Vec<Mapping>> {
        let volumes = self.volume_group_volumes(volume_group).await?;
        let operation = format!(
            "map Volume Group '{}' to Host Group '{}'",
            volume_group, host_group
        );
        info!(%operation, volumes = volumes.len(), "fanning out volume mappings");

        let mut executor = SequentialExecutor::new(operation, FailurePolicy::Abort);
        for volume in &volumes {
            executor.push(
                format!("map Volume '{}'", volume),
                self.create_host_group_volume_mapping(host_group, volume),
            );
        }
        executor.run().await
    }

    /// Removes every mapping of a host.
    ///
    /// A host without mappings is not an error; the result is a plain `204`.
    pub async fn delete_host_mappings(&self, host: &str) -> SdpResult<DeleteResponse> {
        let mappings = self.host_mappings(host).await?;
        if mappings.is_empty() {
            return Ok(DeleteResponse::no_content());
        }
        self.delete_mapping_records(
            format!("delete mappings of Host '{}'", host),
            FailurePolicy::Abort,
            &mappings,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    /// Removes every mapping of a host group.
    ///
    /// # Errors
    /// Unlike [`delete_host_mappings`](Self::delete_host_mappings), a group
    /// without mappings is reported as `SdpError::NotFound`.
    pub async fn delete_host_group_mappings(&self, host_group: &str) -> SdpResult<DeleteResponse> {
        let mappings = self.host_group_mappings(host_group).await?;
        if mappings.is_empty() {
            return Err(SdpError::NotFound(format!(
                "No mappings found on the Host Group '{}'",
                host_group
            )));
        }
        self.delete_mapping_records(
            format!("delete mappings of Host Group '{}'", host_group),
            FailurePolicy::Abort,
            &mappings,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    /// Removes the mapping between a host and a volume.
    pub async fn delete_host_volume_mapping(
        &self,
        host: &str,
        volume: &str,
    ) -> SdpResult<DeleteResponse> {
        let host_id = self.host_id(host).await?;
        let volume_id = self.volume_id(volume).await?;
        self.delete_linking_mapping(
            (ResourceKind::Host, host_id),
            (ResourceKind::Volume, volume_id),
            format!("No {} Volume Mappings found on the Host '{}'", volume, host),
        )
        .await
    }

    /// Removes the mapping between a host and a volume group.
    pub async fn delete_host_volume_group_mapping(
        &self,
        host: &str,
        volume_group: &str,
    ) -> SdpResult<DeleteResponse> {
        let host_id = self.host_id(host).await?;
        let group_id = self.volume_group_id(volume_group).await?;
        self.delete_linking_mapping(
            (ResourceKind::Host, host_id),
            (ResourceKind::VolumeGroup, group_id),
            format!(
                "No {} Volume Group Mappings found on the Host '{}'",
                volume_group, host
            ),
        )
        .await
    }

    /// Removes the mapping between a host group and a volume.
    pub async fn delete_host_group_volume_mapping(
        &self,
        host_group: &str,
        volume: &str,
    ) -> SdpResult<DeleteResponse> {
        let group_id = self.host_group_id(host_group).await?;
        let volume_id = self.volume_id(volume).await?;
        self.delete_linking_mapping(
            (ResourceKind::HostGroup, group_id),
            (ResourceKind::Volume, volume_id),
            format!(
                "No {} Volume mappings found on the Host Group '{}'",
                volume, host_group
            ),
        )
        .await
    }

    /// Removes the mapping between a host group and a volume group.
    pub async fn delete_host_group_volume_group_mapping(
        &self,
        host_group: &str,
        volume_group: &str,
    ) -> SdpResult<DeleteResponse> {
        let group_id = self.host_group_id(host_group).await?;
        let volume_group_id = self.volume_group_id(volume_group).await?;
        self.delete_linking_mapping(
            (ResourceKind::HostGroup, group_id),
            (ResourceKind::VolumeGroup, volume_group_id),
            format!(
                "No {} Volume Group mappings found on the Host Group '{}'",
                volume_group, host_group
            ),
        )
        .await
    }

    async fn post_mapping(&self, host: ObjectRef, volume: ObjectRef) -> SdpResult<Mapping> {
        self.api_client
            .post(
                &ResourceKind::Mapping.endpoint(),
                &CreateMappingRequest { host, volume },
            )
            .await
    }

    /// Deletes the mapping linking `initiator` to `target`. If several match,
    /// the last one listed is removed.
    async fn delete_linking_mapping(
        &self,
        initiator: (ResourceKind, i64),
        target: (ResourceKind, i64),
        missing: String,
    ) -> SdpResult<DeleteResponse> {
        let mapping_id = self
            .mappings()
            .await?
            .iter()
            .filter(|mapping| mapping.links(initiator, target))
            .map(|mapping| mapping.id)
            .last()
            .ok_or(SdpError::NotFound(missing))?;
        self.api_client
            .delete(&ResourceKind::Mapping.object_endpoint(mapping_id))
            .await
    }

    /// Deletes the given mapping records one by one under `policy`.
    pub(crate) async fn delete_mapping_records(
        &self,
        operation: String,
        policy: FailurePolicy,
        mappings: &[Mapping],
    ) -> SdpResult<Vec<DeleteResponse>> {
        let mut executor = SequentialExecutor::new(operation, policy);
        for mapping in mappings {
            let endpoint = ResourceKind::Mapping.object_endpoint(mapping.id);
            executor.push(
                format!("delete mapping {} of {}", mapping.id, mapping.host),
                async move { self.api_client.delete(&endpoint).await },
            );
        }
        executor.run().await
    }
}
