//! Book instance (physical copy) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

/// Availability status of a physical copy.
///
/// Transitions: available → borrowed on a successful borrow, borrowed →
/// available on a successful return. The loan workflow is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Available,
    Borrowed,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "available",
            InstanceStatus::Borrowed => "borrowed",
        }
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(InstanceStatus::Available),
            "borrowed" => Ok(InstanceStatus::Borrowed),
            _ => Err(format!("Invalid instance status: {}", s)),
        }
    }
}

// SQLx conversion: status is stored as text
impl sqlx::Type<Postgres> for InstanceStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for InstanceStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for InstanceStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Physical copy of a book, identified by a unique human-entered code
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    /// Code scanned or typed to locate this copy
    pub id_code: String,
    pub status: InstanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A copy currently held by a user, for the my-loans listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowedCopy {
    pub instance_id: i32,
    pub id_code: String,
    pub book_id: i32,
    pub book_title: String,
    pub borrowed_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub overdue: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!("available".parse::<InstanceStatus>().unwrap(), InstanceStatus::Available);
        assert_eq!("borrowed".parse::<InstanceStatus>().unwrap(), InstanceStatus::Borrowed);
        assert_eq!(InstanceStatus::Available.as_str(), "available");
        assert_eq!(InstanceStatus::Borrowed.to_string(), "borrowed");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("lost".parse::<InstanceStatus>().is_err());
        assert!("".parse::<InstanceStatus>().is_err());
    }
}
