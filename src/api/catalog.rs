//! Catalog (books) endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, SearchQuery},
};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// Home page summary
#[derive(Serialize, ToSchema)]
pub struct HomeResponse {
    /// Every book in the catalog
    pub books: Vec<Book>,
    /// Number of copies currently out on loan, across all users
    pub borrowed_count: i64,
}

/// Book detail with availability
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub book: Book,
    /// Count of this book's copies currently available for borrowing
    pub available_copies: i64,
}

/// Search result with the echoed query
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    pub books: Vec<Book>,
    pub query: String,
}

/// Home page summary: all books plus the global borrowed count
#[utoipa::path(
    get,
    path = "/",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog summary", body = HomeResponse)
    )
)]
pub async fn home(State(state): State<crate::AppState>) -> AppResult<Json<HomeResponse>> {
    let (books, borrowed_count) = state.services.catalog.home_summary().await?;
    Ok(Json(HomeResponse {
        books,
        borrowed_count,
    }))
}

/// List books ordered by title, paginated
#[utoipa::path(
    get,
    path = "/books",
    tag = "catalog",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 4)")
    ),
    responses(
        (status = 200, description = "List of books", body = PaginatedResponse<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let (books, total, page, per_page) = state.services.catalog.list_books(&query).await?;

    Ok(Json(PaginatedResponse {
        items: books,
        total,
        page,
        per_page,
    }))
}

/// List an author's books
#[utoipa::path(
    get,
    path = "/author/{slug}",
    tag = "catalog",
    params(
        ("slug" = String, Path, description = "Author slug"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 4)")
    ),
    responses(
        (status = 200, description = "The author's books", body = PaginatedResponse<Book>),
        (status = 404, description = "Author not found")
    )
)]
pub async fn books_by_author(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let (books, total, page, per_page) = state
        .services
        .catalog
        .list_books_by_author(&slug, &query)
        .await?;

    Ok(Json(PaginatedResponse {
        items: books,
        total,
        page,
        per_page,
    }))
}

/// List a category's books
#[utoipa::path(
    get,
    path = "/category/{slug}",
    tag = "catalog",
    params(
        ("slug" = String, Path, description = "Category slug"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 4)")
    ),
    responses(
        (status = 200, description = "The category's books", body = PaginatedResponse<Book>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn books_by_category(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let (books, total, page, per_page) = state
        .services
        .catalog
        .list_books_by_category(&slug, &query)
        .await?;

    Ok(Json(PaginatedResponse {
        items: books,
        total,
        page,
        per_page,
    }))
}

/// Get a book with its availability
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn book_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetailResponse>> {
    let (book, available_copies) = state.services.catalog.book_detail(id).await?;
    Ok(Json(BookDetailResponse {
        book,
        available_copies,
    }))
}

/// Free-text search over titles, descriptions and author names
#[utoipa::path(
    get,
    path = "/search",
    tag = "catalog",
    params(
        ("q" = Option<String>, Query, description = "Search terms; blank matches nothing")
    ),
    responses(
        (status = 200, description = "Matching books", body = SearchResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let books = state
        .services
        .catalog
        .search_books(query.q.as_deref())
        .await?;

    Ok(Json(SearchResponse {
        books,
        query: query.q.unwrap_or_default(),
    }))
}
