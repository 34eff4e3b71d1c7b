//! Typed references between SDP objects.
//!
//! The server links objects with `{"ref": "/<collection>/<id>"}` values. They
//! are parsed once at decode time so callers never inspect path strings.

use crate::core::domain::model::resource_kind::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A link from one SDP object to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireRef", into = "WireRef")]
pub enum ObjectRef {
    /// A reference into a known collection.
    Resource { kind: ResourceKind, id: i64 },
    /// A reference the client does not model; the raw path is kept.
    Unrecognized(String),
}

impl ObjectRef {
    pub fn new(kind: ResourceKind, id: i64) -> Self {
        ObjectRef::Resource { kind, id }
    }

    /// Parses a `/<collection>/<id>` path. The collection is matched exactly,
    /// so `/host_groups/3` never reads as a host.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let mut segments = trimmed.trim_start_matches('/').split('/');
        let parsed = match (segments.next(), segments.next(), segments.next()) {
            (Some(collection), Some(id), None) => ResourceKind::from_collection(collection)
                .zip(id.parse::<i64>().ok())
                .map(|(kind, id)| ObjectRef::Resource { kind, id }),
            _ => None,
        };
        parsed.unwrap_or_else(|| ObjectRef::Unrecognized(trimmed.to_string()))
    }

    /// The referenced kind, when recognised.
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            ObjectRef::Resource { kind, .. } => Some(*kind),
            ObjectRef::Unrecognized(_) => None,
        }
    }

    /// The referenced identifier, when recognised.
    pub fn id(&self) -> Option<i64> {
        match self {
            ObjectRef::Resource { id, .. } => Some(*id),
            ObjectRef::Unrecognized(_) => None,
        }
    }

    /// The identifier, but only if the reference points into `kind`.
    pub fn id_of(&self, kind: ResourceKind) -> Option<i64> {
        match self {
            ObjectRef::Resource { kind: k, id } if *k == kind => Some(*id),
            _ => None,
        }
    }

    pub fn is(&self, kind: ResourceKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Whether this reference points at exactly `kind`/`id`.
    pub fn points_to(&self, kind: ResourceKind, id: i64) -> bool {
        self.id_of(kind) == Some(id)
    }

    /// The wire path, e.g. `/hosts/12`.
    pub fn path(&self) -> String {
        match self {
            ObjectRef::Resource { kind, id } => kind.object_endpoint(*id),
            ObjectRef::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Serialize, Deserialize)]
struct WireRef {
    #[serde(rename = "ref")]
    path: String,
}

impl From<WireRef> for ObjectRef {
    fn from(wire: WireRef) -> Self {
        ObjectRef::parse(&wire.path)
    }
}

impl From<ObjectRef> for WireRef {
    fn from(reference: ObjectRef) -> Self {
        WireRef {
            path: reference.path(),
        }
    }
}
