mod api_endpoint;
pub(crate) mod object_ref;
pub(crate) mod serde_helpers;
mod sdp_password;
mod sdp_server;
mod sdp_username;

pub use object_ref::ObjectRef;
pub use sdp_password::SdpPassword;
pub use sdp_server::SdpServer;
pub use sdp_username::SdpUsername;

// Re-export validation functions for internal use
pub(crate) use api_endpoint::validate_endpoint;
pub(crate) use sdp_password::validate_password;
pub(crate) use sdp_server::validate_server;
pub(crate) use sdp_username::validate_username;
