use crate::core::domain::model::{named_resource::NamedResource, resource_kind::ResourceKind};
use serde::{Deserialize, Serialize};

/// Keys accepted by `update_host_group`.
pub const HOST_GROUP_UPDATE_KEYS: &[&str] = &["description", "allow_different_host_types"];

/// A host group as returned by the `/host_groups` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub allow_different_host_types: bool,
    #[serde(default)]
    pub hosts_count: i64,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub volumes_count: i64,
}

impl NamedResource for HostGroup {
    const KIND: ResourceKind = ResourceKind::HostGroup;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateHostGroupRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub allow_different_host_types: bool,
}
