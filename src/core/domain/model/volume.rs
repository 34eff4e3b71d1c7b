//! Volume records and creation parameters.

use crate::core::domain::{
    error::ValidationError,
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::{ObjectRef, serde_helpers::optional_ref},
};
use serde::{Deserialize, Serialize};

/// Keys accepted by `update_volume`.
pub const VOLUME_UPDATE_KEYS: &[&str] =
    &["name", "size", "description", "volume_group", "read_only"];

/// Converts whole GiB into the KiB unit the API uses for sizes and quotas.
///
/// `field` names the value in the error when the result does not fit in a `u64`.
pub(crate) fn gib_to_kib(field: &str, gib: u64) -> Result<u64, ValidationError> {
    gib.checked_mul(1024 * 1024).ok_or_else(|| {
        ValidationError::ConstraintViolation(format!(
            "{} of {} GiB is too large to express in KiB",
            field, gib
        ))
    })
}

/// A volume as returned by the `/volumes` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Volume {
    pub id: i64,
    pub name: String,
    /// Provisioned size in KiB.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub vmware_support: bool,
    #[serde(default)]
    pub is_dedup: bool,
    #[serde(default)]
    pub marked_for_deletion: bool,
    #[serde(
        default,
        deserialize_with = "optional_ref::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_group: Option<ObjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scsi_sn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
}

impl Volume {
    /// Whether this volume lives in the volume group with the given id.
    pub fn is_in_volume_group(&self, volume_group_id: i64) -> bool {
        self.volume_group
            .as_ref()
            .is_some_and(|r| r.points_to(ResourceKind::VolumeGroup, volume_group_id))
    }
}

impl NamedResource for Volume {
    const KIND: ResourceKind = ResourceKind::Volume;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parameters for [`SdpClient::create_volume`](crate::SdpClient::create_volume).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVolumeParams {
    pub name: String,
    /// Size in whole GiB.
    pub size_gb: u64,
    /// Name of the owning volume group.
    pub volume_group: String,
    pub vmware_support: bool,
    pub description: String,
    pub read_only: bool,
}

impl CreateVolumeParams {
    pub fn new(name: impl Into<String>, size_gb: u64, volume_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_gb,
            volume_group: volume_group.into(),
            vmware_support: false,
            description: String::new(),
            read_only: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn vmware_support(mut self, enabled: bool) -> Self {
        self.vmware_support = enabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateVolumeRequest<'a> {
    pub name: &'a str,
    pub size: u64,
    pub volume_group: ObjectRef,
    pub vmware_support: bool,
    pub description: &'a str,
    pub read_only: bool,
}
