use crate::{
    CreateVolumeGroupParams, CapacityPolicy, DeleteResponse, Host, HostGroup, ObjectRef,
    ResourceKind, SdpClient, SdpError, SdpResult, UpdateConfig, VOLUME_GROUP_UPDATE_KEYS,
    VolumeGroup,
    core::domain::model::{
        update_config::validate_update_keys,
        volume::gib_to_kib,
        volume_group::CreateVolumeGroupRequest,
    },
};

impl SdpClient {
    /// Creates a volume group. The quota is given in GiB and sent in KiB.
    ///
    /// When a capacity policy name is set it is resolved and attached.
    pub async fn create_volume_group(
        &self,
        params: CreateVolumeGroupParams,
    ) -> SdpResult<VolumeGroup> {
        let quota = gib_to_kib("quota", params.quota_gb)?;
        let capacity_policy = match params.capacity_policy.as_deref() {
            Some(policy) if !policy.is_empty() => {
                let id = self.capacity_policy_id(policy).await?;
                Some(ObjectRef::new(ResourceKind::CapacityPolicy, id))
            }
            _ => None,
        };
        let body = CreateVolumeGroupRequest {
            name: &params.name,
            quota,
            is_dedup: params.enable_dedup,
            description: &params.description,
            capacity_policy,
        };
        self.api_client
            .post(&ResourceKind::VolumeGroup.endpoint(), &body)
            .await
    }

    pub async fn volume_groups(&self) -> SdpResult<Vec<VolumeGroup>> {
        self.list_named().await
    }

    /// Updates a volume group. Accepted keys are `name`, `quota` (KiB),
    /// `capacity_policy` (a name or a reference) and `description`.
    pub async fn update_volume_group(
        &self,
        name: &str,
        mut config: UpdateConfig,
    ) -> SdpResult<VolumeGroup> {
        validate_update_keys(ResourceKind::VolumeGroup, &config, VOLUME_GROUP_UPDATE_KEYS)?;
        let id = self.volume_group_id(name).await?;
        self.resolve_ref_field::<CapacityPolicy>(&mut config, "capacity_policy")
            .await?;
        self.api_client
            .patch(&ResourceKind::VolumeGroup.object_endpoint(id), &config)
            .await
    }

    pub async fn delete_volume_group(&self, name: &str) -> SdpResult<DeleteResponse> {
        let id = self.volume_group_id(name).await?;
        self.api_client
            .delete(&ResourceKind::VolumeGroup.object_endpoint(id))
            .await
    }

    pub async fn volume_group_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<VolumeGroup>(name).await
    }

    /// Names of the volumes in a volume group.
    ///
    /// # Errors
    /// `SdpError::NotFound` when the group holds no volumes.
    pub async fn volume_group_volumes(&self, name: &str) -> SdpResult<Vec<String>> {
        let group_id = self.volume_group_id(name).await?;
        let volumes: Vec<String> = self
            .volumes()
            .await?
            .into_iter()
            .filter(|volume| volume.is_in_volume_group(group_id))
            .map(|volume| volume.name)
            .collect();
        if volumes.is_empty() {
            return Err(SdpError::NotFound(format!(
                "The Volume Group '{}' does not contain any Volumes",
                name
            )));
        }
        Ok(volumes)
    }

    /// Names of the hosts individually mapped to a volume group.
    ///
    /// # Errors
    /// `SdpError::NotFound` when no host is mapped.
    pub async fn volume_group_host_mappings(&self, name: &str) -> SdpResult<Vec<String>> {
        let group_id = self.volume_group_id(name).await?;
        let hosts = self
            .initiator_names::<Host>((ResourceKind::VolumeGroup, group_id))
            .await?;
        if hosts.is_empty() {
            return Err(SdpError::NotFound(format!(
                "No Host Mappings found on the Volume Group '{}'",
                name
            )));
        }
        Ok(hosts)
    }

    /// Names of the host groups mapped to a volume group. Empty is fine.
    pub async fn volume_group_host_group_mappings(&self, name: &str) -> SdpResult<Vec<String>> {
        let group_id = self.volume_group_id(name).await?;
        self.initiator_names::<HostGroup>((ResourceKind::VolumeGroup, group_id))
            .await
    }
}
