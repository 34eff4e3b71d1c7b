use crate::{
    CAPACITY_POLICY_UPDATE_KEYS, CapacityPolicy, CreateCapacityPolicyParams, DeleteResponse,
    ResourceKind, SdpClient, SdpResult, UpdateConfig,
    core::{
        domain::model::update_config::validate_update_keys,
        infrastructure::api_client::filtered,
    },
};

impl SdpClient {
    pub async fn capacity_policies(&self) -> SdpResult<Vec<CapacityPolicy>> {
        self.list_named().await
    }

    /// Capacity policies whose name contains `fragment`.
    pub async fn capacity_policies_by_name(&self, fragment: &str) -> SdpResult<Vec<CapacityPolicy>> {
        self.api_client
            .list_all(&filtered(
                &ResourceKind::CapacityPolicy.endpoint(),
                "name__contains",
                fragment,
            ))
            .await
    }

    pub async fn capacity_policy_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<CapacityPolicy>(name).await
    }

    pub async fn capacity_policy_name(&self, id: i64) -> SdpResult<String> {
        self.resolve_name::<CapacityPolicy>(id).await
    }

    pub async fn create_capacity_policy(
        &self,
        params: CreateCapacityPolicyParams,
    ) -> SdpResult<CapacityPolicy> {
        self.api_client
            .post(&ResourceKind::CapacityPolicy.endpoint(), &params)
            .await
    }

    /// Updates a capacity policy. Accepted keys are `name` and the five
    /// `*_threshold` fields.
    pub async fn update_capacity_policy(
        &self,
        name: &str,
        config: UpdateConfig,
    ) -> SdpResult<CapacityPolicy> {
        validate_update_keys(
            ResourceKind::CapacityPolicy,
            &config,
            CAPACITY_POLICY_UPDATE_KEYS,
        )?;
        let id = self.capacity_policy_id(name).await?;
        self.api_client
            .patch(&ResourceKind::CapacityPolicy.object_endpoint(id), &config)
            .await
    }

    pub async fn delete_capacity_policy(&self, name: &str) -> SdpResult<DeleteResponse> {
        let id = self.capacity_policy_id(name).await?;
        self.api_client
            .delete(&ResourceKind::CapacityPolicy.object_endpoint(id))
            .await
    }
}
