use crate::core::domain::model::resource_kind::ResourceKind;
use serde::de::DeserializeOwned;

/// A record that can be addressed by a user-assigned name.
///
/// Implemented by every record type the resolver can scan for.
pub trait NamedResource: DeserializeOwned + Send + Sync {
    /// The resource family this record belongs to.
    const KIND: ResourceKind;

    /// The server-assigned identifier.
    fn id(&self) -> i64;

    /// The user-assigned name.
    fn name(&self) -> &str;
}
