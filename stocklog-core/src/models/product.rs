use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A registered product.
///
/// Products are created implicitly by the first purchase that references an
/// unknown id. They are never deleted, and no operation rewrites the name
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Caller-supplied external identifier
    pub product_id: String,
    /// Display name
    pub name: String,
    /// When the row was created
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the row was last written
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
