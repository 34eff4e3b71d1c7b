//! Host records and the host type enumeration.

use crate::core::domain::{
    error::ValidationError,
    model::{named_resource::NamedResource, resource_kind::ResourceKind},
    value_object::{ObjectRef, serde_helpers::optional_ref},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Keys accepted by `update_host`.
pub const HOST_UPDATE_KEYS: &[&str] = &["name", "type", "host_group"];

/// The operating system family of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum HostType {
    Linux,
    Windows,
    #[serde(rename = "ESX")]
    Esx,
}

impl HostType {
    pub const fn as_str(self) -> &'static str {
        match self {
            HostType::Linux => "Linux",
            HostType::Windows => "Windows",
            HostType::Esx => "ESX",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linux" => Ok(HostType::Linux),
            "Windows" => Ok(HostType::Windows),
            "ESX" => Ok(HostType::Esx),
            other => Err(ValidationError::Field {
                field: "type".to_string(),
                message: format!(
                    "'{}' is not a valid hostType. Valid choices are 'Linux', 'Windows', and 'ESX'",
                    other
                ),
            }),
        }
    }
}

/// A host as returned by the `/hosts` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Host {
    pub id: i64,
    pub name: String,
    /// The type as the array reports it. Arrays may hold types this client
    /// cannot create, so records keep the raw string.
    #[serde(rename = "type", default)]
    pub host_type: String,
    /// The group this host belongs to, if any.
    #[serde(
        default,
        deserialize_with = "optional_ref::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub host_group: Option<ObjectRef>,
    #[serde(default)]
    pub is_part_of_group: bool,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub volumes_count: i64,
}

impl Host {
    /// The host type, when it is one of the types this client can create.
    pub fn known_type(&self) -> Option<HostType> {
        self.host_type.parse().ok()
    }

    /// The identifier of the owning host group, if the reference points at one.
    pub fn host_group_id(&self) -> Option<i64> {
        self.host_group
            .as_ref()
            .and_then(|r| r.id_of(ResourceKind::HostGroup))
    }
}

impl NamedResource for Host {
    const KIND: ResourceKind = ResourceKind::Host;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /hosts`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateHostRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub host_type: HostType,
}
