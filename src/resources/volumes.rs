use crate::{
    CreateVolumeParams, DeleteResponse, FailurePolicy, Host, HostGroup, Mapping, ObjectRef,
    ResourceKind, SdpClient, SdpError, SdpResult, UpdateConfig, VOLUME_UPDATE_KEYS, Volume,
    VolumeGroup,
    core::{
        application::resolver::scan_for_name,
        domain::model::{
            update_config::validate_update_keys,
            volume::{CreateVolumeRequest, gib_to_kib},
        },
        infrastructure::api_client::filtered,
    },
};
use tracing::{info, warn};

impl SdpClient {
    /// Creates a volume inside an existing volume group.
    ///
    /// The size is given in GiB and sent in KiB.
    pub async fn create_volume(&self, params: CreateVolumeParams) -> SdpResult<Volume> {
        let size = gib_to_kib("size", params.size_gb)?;
        let volume_group_id = self.volume_group_id(&params.volume_group).await?;
        let body = CreateVolumeRequest {
            name: &params.name,
            size,
            volume_group: ObjectRef::new(ResourceKind::VolumeGroup, volume_group_id),
            vmware_support: params.vmware_support,
            description: &params.description,
            read_only: params.read_only,
        };
        self.api_client
            .post(&ResourceKind::Volume.endpoint(), &body)
            .await
    }

    pub async fn volumes(&self) -> SdpResult<Vec<Volume>> {
        self.list_named().await
    }

    /// Volumes whose name contains `fragment` (server-side `name__contains`).
    pub async fn volumes_by_name(&self, fragment: &str) -> SdpResult<Vec<Volume>> {
        self.api_client
            .list_all(&filtered(&ResourceKind::Volume.endpoint(), "name__contains", fragment))
            .await
    }

    /// Fetches a volume by id with the server's `id__in` filter.
    pub async fn volume_by_id(&self, id: i64) -> SdpResult<Volume> {
        let hits: Vec<Volume> = self
            .api_client
            .list_all(&filtered(
                &ResourceKind::Volume.endpoint(),
                "id__in",
                &id.to_string(),
            ))
            .await?;
        hits.into_iter()
            .find(|volume| volume.id == id)
            .ok_or(SdpError::IdNotFound {
                kind: ResourceKind::Volume,
                id,
            })
    }

    pub async fn volume_id(&self, name: &str) -> SdpResult<i64> {
        self.resolve_id::<Volume>(name).await
    }

    /// Updates a volume. Accepted keys are `name`, `size`, `description`,
    /// `volume_group` and `read_only`. `size` is in KiB; `volume_group` may
    /// be given by name.
    pub async fn update_volume(&self, name: &str, mut config: UpdateConfig) -> SdpResult<Volume> {
        validate_update_keys(ResourceKind::Volume, &config, VOLUME_UPDATE_KEYS)?;
        let id = self.volume_id(name).await?;
        self.resolve_ref_field::<VolumeGroup>(&mut config, "volume_group")
            .await?;
        self.api_client
            .patch(&ResourceKind::Volume.object_endpoint(id), &config)
            .await
    }

    /// Deletes a volume after removing every host and host group mapping
    /// that targets it.
    ///
    /// How a failed mapping removal is treated follows the client's
    /// `volume_cleanup` policy: with [`FailurePolicy::Continue`] (the
    /// default) it is logged and the volume is deleted anyway; with
    /// [`FailurePolicy::Abort`] the volume is left in place and the failure
    /// is returned.
    pub async fn delete_volume(&self, name: &str) -> SdpResult<DeleteResponse> {
        let volume_id = self.volume_id(name).await?;
        let policy = self.config.volume_cleanup;
        let operation = format!("delete Volume '{}'", name);
        info!(volume = name, volume_id, ?policy, "deleting volume");

        let attached: Vec<Mapping> = match self.mappings().await {
            Ok(all) => all
                .into_iter()
                .filter(|mapping| {
                    mapping.target_is(ResourceKind::Volume, volume_id)
                        && (mapping.host.is(ResourceKind::Host)
                            || mapping.host.is(ResourceKind::HostGroup))
                })
                .collect(),
            Err(err) if policy == FailurePolicy::Continue => {
                warn!(%operation, error = %err, "could not list mappings, deleting volume anyway");
                Vec::new()
            }
            Err(err) => {
                return Err(SdpError::StepFailed {
                    operation,
                    step: "list volume mappings".to_string(),
                    source: Box::new(err),
                });
            }
        };

        self.delete_mapping_records(operation, policy, &attached)
            .await?;
        self.api_client
            .delete(&ResourceKind::Volume.object_endpoint(volume_id))
            .await
    }

    /// Names of the hosts individually mapped to a volume.
    pub async fn volume_host_mappings(&self, volume: &str) -> SdpResult<Vec<String>> {
        let volume_id = self.volume_id(volume).await?;
        self.initiator_names::<Host>((ResourceKind::Volume, volume_id))
            .await
    }

    /// Names of the host groups mapped to a volume.
    pub async fn volume_host_group_mappings(&self, volume: &str) -> SdpResult<Vec<String>> {
        let volume_id = self.volume_id(volume).await?;
        self.initiator_names::<HostGroup>((ResourceKind::Volume, volume_id))
            .await
    }

    /// Names of the `T` initiators (hosts or host groups) mapped to `target`.
    ///
    /// One listing of `T` is taken per call and shared by every mapping.
    pub(crate) async fn initiator_names<T: crate::NamedResource>(
        &self,
        target: (ResourceKind, i64),
    ) -> SdpResult<Vec<String>> {
        let initiator_ids: Vec<i64> = self
            .mappings()
            .await?
            .iter()
            .filter(|mapping| mapping.target_is(target.0, target.1))
            .filter_map(|mapping| mapping.host.id_of(T::KIND))
            .collect();
        if initiator_ids.is_empty() {
            return Ok(Vec::new());
        }

        let initiators = self.list_named::<T>().await?;
        initiator_ids
            .into_iter()
            .map(|id| scan_for_name(&initiators, id))
            .collect()
    }
}
