//! The resource families exposed by the SDP REST API.

use std::fmt;

/// A server-side resource family and the collection it lives under.
///
/// The collection segment doubles as the discriminator of an
/// [`ObjectRef`](crate::ObjectRef) path (`/hosts/12`, `/host_groups/3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Host,
    HostGroup,
    Volume,
    VolumeGroup,
    Mapping,
    HostIqn,
    HostPwwn,
    CapacityPolicy,
    RetentionPolicy,
    Snapshot,
}

impl ResourceKind {
    const ALL: [ResourceKind; 10] = [
        ResourceKind::Host,
        ResourceKind::HostGroup,
        ResourceKind::Volume,
        ResourceKind::VolumeGroup,
        ResourceKind::Mapping,
        ResourceKind::HostIqn,
        ResourceKind::HostPwwn,
        ResourceKind::CapacityPolicy,
        ResourceKind::RetentionPolicy,
        ResourceKind::Snapshot,
    ];

    /// The collection path segment, without slashes.
    pub const fn collection(self) -> &'static str {
        match self {
            ResourceKind::Host => "hosts",
            ResourceKind::HostGroup => "host_groups",
            ResourceKind::Volume => "volumes",
            ResourceKind::VolumeGroup => "volume_groups",
            ResourceKind::Mapping => "mappings",
            ResourceKind::HostIqn => "host_iqns",
            ResourceKind::HostPwwn => "host_fc_ports",
            ResourceKind::CapacityPolicy => "vg_capacity_policies",
            ResourceKind::RetentionPolicy => "retention_policies",
            ResourceKind::Snapshot => "snapshots",
        }
    }

    /// The list/create endpoint, e.g. `/hosts`.
    pub fn endpoint(self) -> String {
        format!("/{}", self.collection())
    }

    /// The per-object endpoint, e.g. `/hosts/12`.
    pub fn object_endpoint(self, id: i64) -> String {
        format!("/{}/{}", self.collection(), id)
    }

    /// Looks a kind up by its exact collection segment.
    pub fn from_collection(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection() == segment)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Host => "Host",
            ResourceKind::HostGroup => "Host Group",
            ResourceKind::Volume => "Volume",
            ResourceKind::VolumeGroup => "Volume Group",
            ResourceKind::Mapping => "Mapping",
            ResourceKind::HostIqn => "Host IQN",
            ResourceKind::HostPwwn => "Host PWWN",
            ResourceKind::CapacityPolicy => "Capacity Policy",
            ResourceKind::RetentionPolicy => "Retention Policy",
            ResourceKind::Snapshot => "Volume Group Snapshot",
        };
        f.write_str(label)
    }
}
