use crate::core::domain::{error::ValidationError, model::resource_kind::ResourceKind};
use serde_json::{Map, Value};

/// A partial update, sent as the body of a `PATCH`.
pub type UpdateConfig = Map<String, Value>;

/// Rejects any key of `config` that is not in `allowed`.
///
/// Invalid keys are reported in the order they appear in `config`.
pub(crate) fn validate_update_keys(
    resource: ResourceKind,
    config: &UpdateConfig,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    let invalid: Vec<String> = config
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    Err(ValidationError::InvalidUpdateKeys {
        resource,
        invalid,
        allowed: allowed.iter().map(|k| k.to_string()).collect(),
    })
}
