//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Book model as presented by the catalog, joined with its author and
/// category. Read-only at this layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author_id: i32,
    pub author_name: String,
    pub author_surname: String,
    pub author_slug: String,
    pub category_id: i32,
    pub category_name: String,
    pub category_slug: String,
}

/// Pagination parameters for book listings
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Free-text search parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    pub q: Option<String>,
}
