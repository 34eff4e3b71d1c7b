use crate::core::domain::{
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::serde_helpers::lenient_int,
};
use serde::{Deserialize, Serialize};

/// Keys accepted by `update_capacity_policy`.
pub const CAPACITY_POLICY_UPDATE_KEYS: &[&str] = &[
    "name",
    "warning_threshold",
    "error_threshold",
    "critical_threshold",
    "full_threshold",
    "snapshot_overhead_threshold",
];

/// A volume group capacity policy (`/vg_capacity_policies`). Thresholds are
/// percentages of the group quota.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CapacityPolicy {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub warning_threshold: i64,
    #[serde(default)]
    pub error_threshold: i64,
    #[serde(default)]
    pub critical_threshold: i64,
    #[serde(default)]
    pub full_threshold: i64,
    #[serde(default)]
    pub snapshot_overhead_threshold: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub num_snapshots: Option<i64>,
}

impl NamedResource for CapacityPolicy {
    const KIND: ResourceKind = ResourceKind::CapacityPolicy;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parameters for [`SdpClient::create_capacity_policy`](crate::SdpClient::create_capacity_policy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCapacityPolicyParams {
    pub name: String,
    pub warning_threshold: u32,
    pub error_threshold: u32,
    pub critical_threshold: u32,
    pub full_threshold: u32,
    pub snapshot_overhead_threshold: u32,
}
