//! Comment record as served by the remote comments endpoint.

use serde::{Deserialize, Serialize};

/// A single comment record. Immutable once loaded.
///
/// Field names follow the endpoint's JSON schema (`postId` is camelCase on
/// the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Identifier of the post this comment belongs to.
    pub post_id: u64,
    /// Unique comment identifier.
    pub id: u64,
    /// Comment title.
    pub name: String,
    /// Author email.
    pub email: String,
    /// Comment text.
    pub body: String,
}

impl Comment {
    /// Construct a comment record.
    pub fn new(
        post_id: u64,
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}
