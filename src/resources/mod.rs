//! Resource accessors and mapping orchestration, one file per resource family.

mod capacity_policies;
mod host_groups;
mod host_ports;
mod hosts;
mod mappings;
mod retention_policies;
mod snapshots;
mod volume_groups;
mod volumes;

use crate::{NamedResource, ObjectRef, SdpClient, SdpResult, UpdateConfig};
use serde_json::{Value, json};

impl SdpClient {
    /// Lets update configs name a related object instead of spelling out its
    /// reference: a string under `key` is resolved to `{"ref": "/<collection>/<id>"}`,
    /// and an empty string clears the reference with `{}`.
    pub(crate) async fn resolve_ref_field<T: NamedResource>(
        &self,
        config: &mut UpdateConfig,
        key: &str,
    ) -> SdpResult<()> {
        let Some(Value::String(name)) = config.get(key).cloned() else {
            return Ok(());
        };
        let replacement = if name.is_empty() {
            json!({})
        } else {
            let id = self.resolve_id::<T>(&name).await?;
            json!({ "ref": ObjectRef::new(T::KIND, id).path() })
        };
        config.insert(key.to_string(), replacement);
        Ok(())
    }
}
