//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author model from database. Read-only at this layer; catalog
/// administration maintains the rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    /// URL slug, unique across authors
    pub slug: String,
    pub name: String,
    pub surname: String,
}
