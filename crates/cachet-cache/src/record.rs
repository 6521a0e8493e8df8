//! The default cached record shape.

use serde::{Deserialize, Serialize};

/// A cached record.
///
/// Serialized with the field name `Content` so entries written by other
/// producers of the same shape decode unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Payload meaningful to the caller.
    #[serde(rename = "Content")]
    pub content: String,
}

impl Record {
    /// Creates a record with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
