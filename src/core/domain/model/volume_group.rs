use crate::core::domain::{
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::{ObjectRef, serde_helpers::{lenient_int, optional_ref}},
};
use serde::{Deserialize, Serialize};

/// Keys accepted by `update_volume_group`.
pub const VOLUME_GROUP_UPDATE_KEYS: &[&str] = &["name", "quota", "capacity_policy", "description"];

/// A volume group as returned by the `/volume_groups` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolumeGroup {
    pub id: i64,
    pub name: String,
    /// Quota in KiB; `None` when the group is unlimited.
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub quota: Option<i64>,
    #[serde(default)]
    pub is_dedup: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_ref::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity_policy: Option<ObjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_state: Option<String>,
    #[serde(default)]
    pub volumes_count: i64,
    #[serde(default)]
    pub mapped_hosts_count: i64,
    #[serde(default)]
    pub snapshots_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_capacity: Option<f64>,
}

impl NamedResource for VolumeGroup {
    const KIND: ResourceKind = ResourceKind::VolumeGroup;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parameters for [`SdpClient::create_volume_group`](crate::SdpClient::create_volume_group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVolumeGroupParams {
    pub name: String,
    /// Quota in whole GiB.
    pub quota_gb: u64,
    pub enable_dedup: bool,
    pub description: String,
    /// Name of a capacity policy to attach, resolved at creation time.
    pub capacity_policy: Option<String>,
}

impl CreateVolumeGroupParams {
    pub fn new(name: impl Into<String>, quota_gb: u64) -> Self {
        Self {
            name: name.into(),
            quota_gb,
            enable_dedup: false,
            description: String::new(),
            capacity_policy: None,
        }
    }

    pub fn dedup(mut self, enabled: bool) -> Self {
        self.enable_dedup = enabled;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn capacity_policy(mut self, policy: impl Into<String>) -> Self {
        self.capacity_policy = Some(policy.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateVolumeGroupRequest<'a> {
    pub name: &'a str,
    pub quota: u64,
    pub is_dedup: bool,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_policy: Option<ObjectRef>,
}
