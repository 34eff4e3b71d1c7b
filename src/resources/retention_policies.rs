use crate::{
    CreateRetentionPolicyParams, DeleteResponse, RETENTION_POLICY_UPDATE_KEYS, ResourceKind,
    RetentionPolicy, SdpClient, SdpResult, UpdateConfig,
    core::domain::model::{
        retention_policy::CreateRetentionPolicyRequest, update_config::validate_update_keys,
    },
};

impl SdpClient {
    pub async fn retention_policies(&self) -> SdpResult<Vec<RetentionPolicy>> {
        self.list_named().await
    }

    pub async fn retention_policy_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<RetentionPolicy>(name).await
    }

    pub async fn create_retention_policy(
        &self,
        params: CreateRetentionPolicyParams,
    ) -> SdpResult<RetentionPolicy> {
        self.api_client
            .post(
                &ResourceKind::RetentionPolicy.endpoint(),
                &CreateRetentionPolicyRequest::from(&params),
            )
            .await
    }

    /// Updates a retention policy. Accepted keys are `name`,
    /// `num_snapshots`, `weeks`, `days` and `hours`.
    pub async fn update_retention_policy(
        &self,
        name: &str,
        config: UpdateConfig,
    ) -> SdpResult<RetentionPolicy> {
        validate_update_keys(
            ResourceKind::RetentionPolicy,
            &config,
            RETENTION_POLICY_UPDATE_KEYS,
        )?;
        let id = self.retention_policy_id(name).await?;
        self.api_client
            .patch(&ResourceKind::RetentionPolicy.object_endpoint(id), &config)
            .await
    }

    pub async fn delete_retention_policy(&self, name: &str) -> SdpResult<DeleteResponse> {
        let id = self.retention_policy_id(name).await?;
        self.api_client
            .delete(&ResourceKind::RetentionPolicy.object_endpoint(id))
            .await
    }
}
