//! Loan (borrow) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan model from database. Created by the borrow operation, closed
/// (returned = true) by the return operation, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i32,
    pub book_instance_id: i32,
    pub user_id: i32,
    /// Creation time of the loan
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned: bool,
}
