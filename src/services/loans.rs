//! Loan workflow service

use chrono::Duration;

use crate::{
    config::LoansConfig,
    error::AppResult,
    models::{book_instance::BorrowedCopy, loan::Loan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    fn loan_period(&self) -> Duration {
        Duration::days(self.config.period_days)
    }

    /// Borrow a copy by its code. Returns the created loan and the copy's
    /// display name.
    pub async fn borrow(&self, user_id: i32, id_code: &str) -> AppResult<(Loan, String)> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;
        self.repository
            .loans
            .borrow(id_code, user_id, self.loan_period())
            .await
    }

    /// Return a copy by its code. Returns the copy's display name.
    pub async fn return_copy(&self, user_id: i32, id_code: &str) -> AppResult<String> {
        self.repository.users.get_by_id(user_id).await?;
        self.repository.loans.return_by_code(id_code, user_id).await
    }

    /// The copies the user currently holds
    pub async fn my_loans(&self, user_id: i32) -> AppResult<Vec<BorrowedCopy>> {
        self.repository.users.get_by_id(user_id).await?;
        self.repository.loans.active_for_user(user_id).await
    }
}
