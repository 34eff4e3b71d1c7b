use crate::{
    DeleteResponse, HOST_GROUP_UPDATE_KEYS, HostGroup, ResourceKind, SdpClient, SdpError,
    SdpResult, UpdateConfig,
    core::{
        domain::model::{host_group::CreateHostGroupRequest, update_config::validate_update_keys},
        infrastructure::api_client::filtered,
    },
};

impl SdpClient {
    /// Creates a host group.
    pub async fn create_host_group(
        &self,
        name: &str,
        description: &str,
        allow_different_host_types: bool,
    ) -> SdpResult<HostGroup> {
        let body = CreateHostGroupRequest {
            name,
            description,
            allow_different_host_types,
        };
        self.api_client
            .post(&ResourceKind::HostGroup.endpoint(), &body)
            .await
    }

    pub async fn host_groups(&self) -> SdpResult<Vec<HostGroup>> {
        self.list_named().await
    }

    /// Updates a host group. Accepted keys are `description` and
    /// `allow_different_host_types`.
    pub async fn update_host_group(&self, name: &str, config: UpdateConfig) -> SdpResult<HostGroup> {
        validate_update_keys(ResourceKind::HostGroup, &config, HOST_GROUP_UPDATE_KEYS)?;
        let id = self.host_group_id(name).await?;
        self.api_client
            .patch(&ResourceKind::HostGroup.object_endpoint(id), &config)
            .await
    }

    pub async fn delete_host_group(&self, name: &str) -> SdpResult<DeleteResponse> {
        let id = self.host_group_id(name).await?;
        self.api_client
            .delete(&ResourceKind::HostGroup.object_endpoint(id))
            .await
    }

    pub async fn host_group_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<HostGroup>(name).await
    }

    /// Looks a host group name up by id with the server's `id__in` filter.
    pub async fn host_group_name(&self, id: i64) -> SdpResult<String> {
        let hits: Vec<HostGroup> = self
            .api_client
            .list_all(&filtered(
                &ResourceKind::HostGroup.endpoint(),
                "id__in",
                &id.to_string(),
            ))
            .await?;
        hits.into_iter()
            .next()
            .map(|group| group.name)
            .ok_or(SdpError::IdNotFound {
                kind: ResourceKind::HostGroup,
                id,
            })
    }

    /// Names of the hosts that belong to a host group.
    pub async fn host_group_hosts(&self, name: &str) -> SdpResult<Vec<String>> {
        let group_id = self.host_group_id(name).await?;
        Ok(self
            .hosts()
            .await?
            .into_iter()
            .filter(|host| host.host_group_id() == Some(group_id))
            .map(|host| host.name)
            .collect())
    }
}
