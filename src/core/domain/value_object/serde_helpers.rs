//! Serde helpers for the loosely typed fields the SDP server returns.

use crate::core::domain::value_object::object_ref::ObjectRef;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialization for optional references.
///
/// The server reports "no reference" as `null`, `{}` or `{"ref": null}`
/// depending on the object and firmware; all of them decode to `None`.
pub mod optional_ref {
    use super::*;

    #[derive(Deserialize)]
    struct MaybeRef {
        #[serde(rename = "ref", default)]
        path: Option<String>,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ObjectRef>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let maybe = Option::<MaybeRef>::deserialize(deserializer)?;
        Ok(maybe
            .and_then(|m| m.path)
            .filter(|path| !path.trim().is_empty())
            .map(|path| ObjectRef::parse(&path)))
    }
}

/// Deserialization for integers that may arrive as numbers, numeric strings
/// or `null`.
pub mod lenient_int {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid integer {}", n))),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid integer '{}'", s))),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected an integer, got {}",
                other
            ))),
        }
    }
}
