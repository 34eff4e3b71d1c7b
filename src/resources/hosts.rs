use crate::{
    DeleteResponse, FailurePolicy, HOST_UPDATE_KEYS, Host, HostGroup, HostType, ResourceKind,
    SdpClient, SdpError, SdpResult, SequentialExecutor, UpdateConfig, ValidationError,
    core::{
        domain::model::{host::CreateHostRequest, update_config::validate_update_keys},
        infrastructure::api_client::filtered,
    },
};
use serde_json::{Value, json};
use tracing::{debug, info};

impl SdpClient {
    /// Creates a host.
    pub async fn create_host(&self, name: &str, host_type: HostType) -> SdpResult<Host> {
        self.api_client
            .post(
                &ResourceKind::Host.endpoint(),
                &CreateHostRequest { name, host_type },
            )
            .await
    }

    /// Lists every host on the array.
    pub async fn hosts(&self) -> SdpResult<Vec<Host>> {
        self.list_named().await
    }

    /// Fetches one host through the server's `name__in` filter, then keeps
    /// only an exact match.
    ///
    /// # Errors
    /// `SdpError::NameNotFound` when no host has exactly this name.
    pub async fn host(&self, name: &str) -> SdpResult<Host> {
        let hits: Vec<Host> = self
            .api_client
            .list_all(&filtered(&ResourceKind::Host.endpoint(), "name__in", name))
            .await?;
        hits.into_iter()
            .filter(|host| host.name == name)
            .last()
            .ok_or_else(|| SdpError::NameNotFound {
                kind: ResourceKind::Host,
                name: name.to_string(),
            })
    }

    /// Hosts whose name contains `fragment` (server-side `name__contains`).
    pub async fn hosts_by_name(&self, fragment: &str) -> SdpResult<Vec<Host>> {
        self.api_client
            .list_all(&filtered(&ResourceKind::Host.endpoint(), "name__contains", fragment))
            .await
    }

    pub async fn host_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<Host>(name).await
    }

    pub async fn host_name(&self, id: i64) -> SdpResult<String> {
        self.resolve_name::<Host>(id).await
    }

    /// Updates a host. Accepted keys are `name`, `type` and `host_group`.
    ///
    /// `type` must be one of `Linux`, `Windows` or `ESX`. `host_group` may be
    /// given as a group name, as a `{"ref": ..}` object, or as `""` to leave
    /// the group.
    ///
    /// # Errors
    /// `SdpError::Validation` before any request when a key or the host type
    /// is not accepted.
    pub async fn update_host(&self, name: &str, mut config: UpdateConfig) -> SdpResult<Host> {
        validate_update_keys(ResourceKind::Host, &config, HOST_UPDATE_KEYS)?;
        if let Some(value) = config.get("type") {
            match value {
                Value::String(raw) => {
                    raw.parse::<HostType>()?;
                }
                other => {
                    return Err(ValidationError::Field {
                        field: "type".to_string(),
                        message: format!("expected a string, got {}", other),
                    }
                    .into());
                }
            }
        }

        let host_id = self.host_id(name).await?;
        self.resolve_ref_field::<HostGroup>(&mut config, "host_group")
            .await?;
        self.api_client
            .patch(&ResourceKind::Host.object_endpoint(host_id), &config)
            .await
    }

    /// Adds a host to a host group.
    pub async fn create_host_host_group_mapping(
        &self,
        host: &str,
        host_group: &str,
    ) -> SdpResult<Host> {
        let host_id = self.host_id(host).await?;
        let group_id = self.host_group_id(host_group).await?;
        let body = json!({
            "host_group": { "ref": ResourceKind::HostGroup.object_endpoint(group_id) }
        });
        self.api_client
            .patch(&ResourceKind::Host.object_endpoint(host_id), &body)
            .await
    }

    /// Removes a host from a host group.
    ///
    /// Returns `Ok(None)` without changing anything when the host is not a
    /// member of that group.
    pub async fn delete_host_host_group_mapping(
        &self,
        host: &str,
        host_group: &str,
    ) -> SdpResult<Option<Host>> {
        let group_id = self.host_group_id(host_group).await?;
        let host_id = self.host_id(host).await?;

        let is_member = self.hosts().await?.iter().any(|h| {
            h.name == host
                && h.host_group
                    .as_ref()
                    .is_some_and(|r| r.points_to(ResourceKind::HostGroup, group_id))
        });
        if !is_member {
            debug!(host, host_group, "host is not a member of the host group");
            return Ok(None);
        }

        let body = json!({ "host_group": {} });
        self.api_client
            .patch(&ResourceKind::Host.object_endpoint(host_id), &body)
            .await
            .map(Some)
    }

    /// Deletes a host and everything hanging off it.
    ///
    /// In order: leave the host group (when a member), remove the host's
    /// volume mappings, its IQNs, its PWWNs, then delete the host record.
    /// The first failing step stops the sequence with
    /// [`SdpError::StepFailed`]; steps that already ran stay applied.
    pub async fn delete_host(&self, name: &str) -> SdpResult<DeleteResponse> {
        let host = self.host(name).await?;
        let host_id = host.id;
        let operation = format!("delete Host '{}'", name);
        info!(host = name, host_id, "deleting host");

        let mut executor = SequentialExecutor::new(operation, FailurePolicy::Abort);
        if host.is_part_of_group {
            let group_id = host.host_group_id();
            executor.push("remove the host from its Host Group", async move {
                let group_id = group_id.ok_or_else(|| {
                    SdpError::NotFound(format!(
                        "Host '{}' is marked as a group member but has no Host Group reference",
                        name
                    ))
                })?;
                let group = self.host_group_name(group_id).await?;
                self.delete_host_host_group_mapping(name, &group)
                    .await
                    .map(|_| ())
            });
        }
        executor.push("remove host mappings", async move {
            self.delete_host_mappings(name).await.map(|_| ())
        });
        executor.push("remove host IQNs", async move {
            self.delete_host_iqns(name).await.map(|_| ())
        });
        executor.push("remove host PWWNs", async move {
            self.delete_host_pwwns(name).await.map(|_| ())
        });
        executor.run().await?;

        self.api_client
            .delete(&ResourceKind::Host.object_endpoint(host_id))
            .await
    }
}
