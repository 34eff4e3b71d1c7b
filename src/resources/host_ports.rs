//! iSCSI IQNs and Fibre Channel PWWNs registered on hosts.

use crate::{
    DeleteResponse, FailurePolicy, HostIqn, HostPwwn, ObjectRef, ResourceKind, SdpClient,
    SdpError, SdpResult, SequentialExecutor,
    core::domain::model::host_port::{CreateHostIqnRequest, CreateHostPwwnRequest},
};

impl SdpClient {
    /// Registers an IQN on a host.
    pub async fn create_host_iqn(&self, host: &str, iqn: &str) -> SdpResult<HostIqn> {
        let host_id = self.host_id(host).await?;
        let body = CreateHostIqnRequest {
            iqn,
            host: ObjectRef::new(ResourceKind::Host, host_id),
        };
        self.api_client
            .post(&ResourceKind::HostIqn.endpoint(), &body)
            .await
    }

    /// The IQNs registered on a host. Empty when there are none.
    pub async fn host_iqns(&self, host: &str) -> SdpResult<Vec<HostIqn>> {
        let host_id = self.host_id(host).await?;
        let all: Vec<HostIqn> = self
            .api_client
            .list_all(&ResourceKind::HostIqn.endpoint())
            .await?;
        Ok(all
            .into_iter()
            .filter(|port| port.host.points_to(ResourceKind::Host, host_id))
            .collect())
    }

    /// Removes one IQN from a host.
    ///
    /// # Errors
    /// `SdpError::NotFound` when the host has no such IQN.
    pub async fn delete_host_iqn(&self, host: &str, iqn: &str) -> SdpResult<DeleteResponse> {
        let ids: Vec<i64> = self
            .host_iqns(host)
            .await?
            .into_iter()
            .filter(|port| port.iqn == iqn)
            .map(|port| port.id)
            .collect();
        if ids.is_empty() {
            return Err(SdpError::NotFound(format!(
                "No IQNs found on the host '{}'",
                host
            )));
        }
        self.delete_ports(
            format!("delete IQN '{}' of Host '{}'", iqn, host),
            ResourceKind::HostIqn,
            &ids,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    /// Removes every IQN from a host.
    ///
    /// A host without IQNs is not an error: the result carries status `404`.
    pub async fn delete_host_iqns(&self, host: &str) -> SdpResult<DeleteResponse> {
        let ids: Vec<i64> = self
            .host_iqns(host)
            .await?
            .into_iter()
            .map(|port| port.id)
            .collect();
        if ids.is_empty() {
            return Ok(DeleteResponse::nothing_found());
        }
        self.delete_ports(
            format!("delete IQNs of Host '{}'", host),
            ResourceKind::HostIqn,
            &ids,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    /// Registers a PWWN on a host.
    pub async fn create_host_pwwn(&self, host: &str, pwwn: &str) -> SdpResult<HostPwwn> {
        let host_id = self.host_id(host).await?;
        let body = CreateHostPwwnRequest {
            pwwn,
            host: ObjectRef::new(ResourceKind::Host, host_id),
        };
        self.api_client
            .post(&ResourceKind::HostPwwn.endpoint(), &body)
            .await
    }

    /// The PWWNs registered on a host. Empty when there are none.
    pub async fn host_pwwns(&self, host: &str) -> SdpResult<Vec<HostPwwn>> {
        let host_id = self.host_id(host).await?;
        let all: Vec<HostPwwn> = self
            .api_client
            .list_all(&ResourceKind::HostPwwn.endpoint())
            .await?;
        Ok(all
            .into_iter()
            .filter(|port| port.host.points_to(ResourceKind::Host, host_id))
            .collect())
    }

    /// Removes one PWWN from a host.
    ///
    /// # Errors
    /// `SdpError::NotFound` when the host has no such PWWN.
    pub async fn delete_host_pwwn(&self, host: &str, pwwn: &str) -> SdpResult<DeleteResponse> {
        let ids: Vec<i64> = self
            .host_pwwns(host)
            .await?
            .into_iter()
            .filter(|port| port.pwwn == pwwn)
            .map(|port| port.id)
            .collect();
        if ids.is_empty() {
            return Err(SdpError::NotFound(format!(
                "No PWWNs found on the host '{}'",
                host
            )));
        }
        self.delete_ports(
            format!("delete PWWN '{}' of Host '{}'", pwwn, host),
            ResourceKind::HostPwwn,
            &ids,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    /// Removes every PWWN from a host. Status `404` when there were none.
    pub async fn delete_host_pwwns(&self, host: &str) -> SdpResult<DeleteResponse> {
        let ids: Vec<i64> = self
            .host_pwwns(host)
            .await?
            .into_iter()
            .map(|port| port.id)
            .collect();
        if ids.is_empty() {
            return Ok(DeleteResponse::nothing_found());
        }
        self.delete_ports(
            format!("delete PWWNs of Host '{}'", host),
            ResourceKind::HostPwwn,
            &ids,
        )
        .await?;
        Ok(DeleteResponse::no_content())
    }

    async fn delete_ports(
        &self,
        operation: String,
        kind: ResourceKind,
        ids: &[i64],
    ) -> SdpResult<Vec<DeleteResponse>> {
        let mut executor = SequentialExecutor::new(operation, FailurePolicy::Abort);
        for &id in ids {
            let endpoint = kind.object_endpoint(id);
            executor.push(format!("delete {} {}", kind, id), async move {
                self.api_client.delete(&endpoint).await
            });
        }
        executor.run().await
    }
}
