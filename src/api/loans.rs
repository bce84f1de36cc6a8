//! Loan workflow endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::book_instance::BorrowedCopy};

use super::AuthenticatedUser;

/// Borrow request: the copy's code as scanned or typed
#[derive(Deserialize, Validate, ToSchema)]
pub struct BorrowRequest {
    #[validate(length(min = 1, message = "id_code must not be empty"))]
    pub id_code: String,
}

/// Return request: the copy's code as scanned or typed
#[derive(Deserialize, Validate, ToSchema)]
pub struct ReturnRequest {
    #[validate(length(min = 1, message = "id_code must not be empty"))]
    pub id_code: String,
}

/// Borrow response with the due date
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    pub status: String,
    /// Human-readable confirmation
    pub message: String,
    pub loan_id: i32,
    /// When the copy is due back
    pub due_date: DateTime<Utc>,
}

/// Return response
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub status: String,
    /// Human-readable confirmation
    pub message: String,
}

/// Borrow a book copy
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Copy borrowed", body = BorrowResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "No copy with this code"),
        (status = 409, description = "Copy is not available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    request.validate()?;

    let (loan, copy) = state
        .services
        .loans
        .borrow(claims.user_id, &request.id_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse {
            status: "success".to_string(),
            message: format!("Successfully borrowed {}", copy),
            loan_id: loan.id,
            due_date: loan.due_date,
        }),
    ))
}

/// Return a borrowed book copy
#[utoipa::path(
    post,
    path = "/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Copy returned", body = ReturnResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "No copy with this code, or not borrowed by the caller")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<ReturnResponse>> {
    request.validate()?;

    let copy = state
        .services
        .loans
        .return_copy(claims.user_id, &request.id_code)
        .await?;

    Ok(Json(ReturnResponse {
        status: "success".to_string(),
        message: format!("Successfully returned {}", copy),
    }))
}

/// List the copies the caller currently holds
#[utoipa::path(
    get,
    path = "/my-loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Currently borrowed copies", body = Vec<BorrowedCopy>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn my_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BorrowedCopy>>> {
    let copies = state.services.loans.my_loans(claims.user_id).await?;
    Ok(Json(copies))
}
