pub mod capacity_policy;
pub mod host;
pub mod host_group;
pub mod host_port;
pub mod list_response;
pub mod mapping;
pub mod named_resource;
pub mod resource_kind;
pub mod retention_policy;
pub mod sdp_config;
pub mod sdp_connection;
pub mod snapshot;
pub mod update_config;
pub mod volume;
pub mod volume_group;
