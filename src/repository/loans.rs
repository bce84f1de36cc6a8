//! Loans repository: the stateful borrow/return workflow.
//!
//! Each mutation runs in a single transaction with the instance row locked,
//! so concurrent borrow attempts for the same copy serialize instead of both
//! observing an available status.

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{BookInstance, BorrowedCopy, InstanceStatus},
        loan::Loan,
    },
};

/// Display name shown to users in borrow/return messages
fn copy_display(title: &str, id_code: &str) -> String {
    format!("{} ({})", title, id_code)
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrow the copy with the given code for a user.
    ///
    /// Returns the created loan and the copy's display name. Fails with
    /// NotFound when no copy has the code and with Conflict when the copy is
    /// not available; neither failure creates a loan.
    pub async fn borrow(
        &self,
        id_code: &str,
        user_id: i32,
        period: Duration,
    ) -> AppResult<(Loan, String)> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let instance = Self::lock_instance(&mut tx, id_code).await?;

        let title: String = sqlx::query_scalar("SELECT title FROM books WHERE id = $1")
            .bind(instance.book_id)
            .fetch_one(&mut *tx)
            .await?;
        let display = copy_display(&title, &instance.id_code);

        if instance.status != InstanceStatus::Available {
            return Err(AppError::Conflict(format!(
                "Book copy {} is not available for borrowing",
                display
            )));
        }

        let due_date = now + period;

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_instance_id, user_id, date, due_date, returned)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING id, book_instance_id, user_id, date, due_date, returned
            "#,
        )
        .bind(instance.id)
        .bind(user_id)
        .bind(now)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE book_instances SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(InstanceStatus::Borrowed)
            .bind(now)
            .bind(instance.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((loan, display))
    }

    /// Fetch the instance row by code inside the transaction, locked for the
    /// rest of the transaction.
    async fn lock_instance(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id_code: &str,
    ) -> AppResult<BookInstance> {
        sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT id, book_id, id_code, status, created_at, updated_at
            FROM book_instances
            WHERE id_code = $1
            FOR UPDATE
            "#,
        )
        .bind(id_code)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book copy with code {}", id_code)))
    }

    /// Return the copy with the given code on behalf of a user.
    ///
    /// Only the borrower may return a copy: when the open loan belongs to
    /// someone else (or there is none), the caller gets the same NotFound
    /// without learning who holds it. Returns the copy's display name.
    pub async fn return_by_code(&self, id_code: &str, user_id: i32) -> AppResult<String> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let instance = Self::lock_instance(&mut tx, id_code).await?;

        let title: String = sqlx::query_scalar("SELECT title FROM books WHERE id = $1")
            .bind(instance.book_id)
            .fetch_one(&mut *tx)
            .await?;
        let display = copy_display(&title, &instance.id_code);

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, book_instance_id, user_id, date, due_date, returned
            FROM loans
            WHERE book_instance_id = $1 AND user_id = $2 AND NOT returned
            "#,
        )
        .bind(instance.id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Book copy {} is not currently borrowed by you",
                display
            ))
        })?;

        sqlx::query("UPDATE loans SET returned = TRUE WHERE id = $1")
            .bind(loan.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE book_instances SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(InstanceStatus::Available)
            .bind(now)
            .bind(instance.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(display)
    }

    /// The copies a user currently holds, ordered by due date
    pub async fn active_for_user(&self, user_id: i32) -> AppResult<Vec<BorrowedCopy>> {
        let rows = sqlx::query(
            r#"
            SELECT bi.id AS instance_id, bi.id_code, b.id AS book_id, b.title AS book_title,
                   l.date AS borrowed_date, l.due_date
            FROM loans l
            JOIN book_instances bi ON bi.id = l.book_instance_id
            JOIN books b ON b.id = bi.book_id
            WHERE l.user_id = $1 AND NOT l.returned
            ORDER BY l.due_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let now = Utc::now();

        Ok(rows
            .into_iter()
            .map(|row| {
                let due_date = row.get("due_date");
                BorrowedCopy {
                    instance_id: row.get("instance_id"),
                    id_code: row.get("id_code"),
                    book_id: row.get("book_id"),
                    book_title: row.get("book_title"),
                    borrowed_date: row.get("borrowed_date"),
                    due_date,
                    overdue: due_date < now,
                }
            })
            .collect())
    }

    /// Count open loans across all users (home page summary). Recomputed per
    /// request; never cached in process state.
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE NOT returned")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::copy_display;

    #[test]
    fn display_name_combines_title_and_code() {
        assert_eq!(copy_display("Dune", "ABC123"), "Dune (ABC123)");
    }
}
