//! Name ⇄ identifier resolution.
//!
//! The API is identifier-addressed while callers address objects by name.
//! Every resolution lists the whole collection and scans it client-side;
//! nothing is cached, so each call sees the server's current state.

use crate::{
    SdpClient,
    core::domain::{
        error::{SdpError, SdpResult},
        model::named_resource::NamedResource,
    },
};

/// Returns the id of the record named exactly `name`.
///
/// When the server holds duplicates the last one scanned wins.
pub(crate) fn scan_for_id<'a, T>(records: impl IntoIterator<Item = &'a T>, name: &str) -> SdpResult<i64>
where
    T: NamedResource + 'a,
{
    records
        .into_iter()
        .filter(|record| record.name() == name)
        .map(NamedResource::id)
        .last()
        .ok_or_else(|| SdpError::NameNotFound {
            kind: T::KIND,
            name: name.to_string(),
        })
}

/// Returns the name of the record with identifier `id`. Last match wins.
pub(crate) fn scan_for_name<'a, T>(records: impl IntoIterator<Item = &'a T>, id: i64) -> SdpResult<String>
where
    T: NamedResource + 'a,
{
    records
        .into_iter()
        .filter(|record| record.id() == id)
        .map(|record| record.name().to_string())
        .last()
        .ok_or(SdpError::IdNotFound { kind: T::KIND, id })
}

impl SdpClient {
    /// Lists every record of `T`'s collection.
    pub(crate) async fn list_named<T: NamedResource>(&self) -> SdpResult<Vec<T>> {
        self.api_client.list_all(&T::KIND.endpoint()).await
    }

    /// Resolves `name` to an identifier with a fresh full listing.
    pub(crate) async fn resolve_id<T: NamedResource>(&self, name: &str) -> SdpResult<i64> {
        let records = self.list_named::<T>().await?;
        scan_for_id(&records, name)
    }

    /// Resolves `id` back to a name with a fresh full listing.
    pub(crate) async fn resolve_name<T: NamedResource>(&self, id: i64) -> SdpResult<String> {
        let records = self.list_named::<T>().await?;
        scan_for_name(&records, id)
    }
}
