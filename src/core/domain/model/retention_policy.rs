use crate::core::domain::{
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::serde_helpers::lenient_int,
};
use serde::{Deserialize, Serialize};

/// Keys accepted by `update_retention_policy`.
pub const RETENTION_POLICY_UPDATE_KEYS: &[&str] = &["name", "num_snapshots", "weeks", "days", "hours"];

/// A snapshot retention policy (`/retention_policies`).
///
/// The server has reported the counters both as numbers and as strings, so
/// they are decoded leniently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetentionPolicy {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub num_snapshots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub weeks: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub days: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub hours: Option<i64>,
}

impl NamedResource for RetentionPolicy {
    const KIND: ResourceKind = ResourceKind::RetentionPolicy;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parameters for [`SdpClient::create_retention_policy`](crate::SdpClient::create_retention_policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRetentionPolicyParams {
    pub name: String,
    pub num_snapshots: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
}

/// The endpoint takes the counters as strings.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRetentionPolicyRequest<'a> {
    pub name: &'a str,
    pub num_snapshots: String,
    pub weeks: String,
    pub days: String,
    pub hours: String,
}

impl<'a> From<&'a CreateRetentionPolicyParams> for CreateRetentionPolicyRequest<'a> {
    fn from(params: &'a CreateRetentionPolicyParams) -> Self {
        Self {
            name: &params.name,
            num_snapshots: params.num_snapshots.to_string(),
            weeks: params.weeks.to_string(),
            days: params.days.to_string(),
            hours: params.hours.to_string(),
        }
    }
}
