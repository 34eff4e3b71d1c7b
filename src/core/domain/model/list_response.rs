use serde::{Deserialize, Serialize};

/// The envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub hits: Vec<T>,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total: u64,
}

/// The uniform result of a delete.
///
/// Delete endpoints answer `204 No Content`; the client substitutes this
/// value. Bulk deletes that find nothing to remove report `404` here
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteResponse {
    #[serde(alias = "statusCode")]
    pub status_code: u16,
}

impl DeleteResponse {
    pub const fn no_content() -> Self {
        Self { status_code: 204 }
    }

    pub const fn nothing_found() -> Self {
        Self { status_code: 404 }
    }
}
