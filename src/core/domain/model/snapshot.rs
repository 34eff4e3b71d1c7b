use crate::core::domain::{
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::{ObjectRef, serde_helpers::optional_ref},
};
use serde::{Deserialize, Serialize};

/// A volume group snapshot (`/snapshots`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot {
    pub id: i64,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "optional_ref::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_group: Option<ObjectRef>,
    #[serde(
        default,
        deserialize_with = "optional_ref::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub retention_policy: Option<ObjectRef>,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub exposable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
}

impl NamedResource for Snapshot {
    const KIND: ResourceKind = ResourceKind::Snapshot;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateSnapshotRequest<'a> {
    pub name: &'a str,
    pub volume_group: ObjectRef,
    pub retention_policy: ObjectRef,
    pub deletable: bool,
    pub exposable: bool,
}
