use crate::core::domain::{model::resource_kind::ResourceKind, value_object::ObjectRef};
use serde::{Deserialize, Serialize};

/// A link between an initiator (host or host group) and a target
/// (volume or volume group).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mapping {
    pub id: i64,
    /// Initiator side; points at `/hosts/..` or `/host_groups/..`.
    pub host: ObjectRef,
    /// Target side; points at `/volumes/..` or `/volume_groups/..`.
    pub volume: ObjectRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lun: Option<i64>,
}

impl Mapping {
    /// Whether the initiator side is exactly `kind`/`id`.
    pub fn initiator_is(&self, kind: ResourceKind, id: i64) -> bool {
        self.host.points_to(kind, id)
    }

    /// Whether the target side is exactly `kind`/`id`.
    pub fn target_is(&self, kind: ResourceKind, id: i64) -> bool {
        self.volume.points_to(kind, id)
    }

    /// Whether this mapping links exactly the given initiator and target.
    pub fn links(
        &self,
        initiator: (ResourceKind, i64),
        target: (ResourceKind, i64),
    ) -> bool {
        self.initiator_is(initiator.0, initiator.1) && self.target_is(target.0, target.1)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateMappingRequest {
    pub host: ObjectRef,
    pub volume: ObjectRef,
}
