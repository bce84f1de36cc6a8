//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, catalog, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblio API",
        version = "0.1.0",
        description = "Library Catalog Server REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Catalog
        catalog::home,
        catalog::list_books,
        catalog::books_by_author,
        catalog::books_by_category,
        catalog::book_detail,
        catalog::search_books,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::my_loans,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::user::User,
            // Catalog
            crate::models::book::Book,
            crate::models::book::BookQuery,
            crate::models::book::SearchQuery,
            crate::models::author::Author,
            crate::models::category::Category,
            catalog::HomeResponse,
            catalog::BookDetailResponse,
            catalog::SearchResponse,
            // Loans
            crate::models::book_instance::BookInstance,
            crate::models::book_instance::InstanceStatus,
            crate::models::book_instance::BorrowedCopy,
            loans::BorrowRequest,
            loans::ReturnRequest,
            loans::BorrowResponse,
            loans::ReturnResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "catalog", description = "Catalog listing and search"),
        (name = "loans", description = "Borrow and return workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
