//! Books repository for catalog read operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, book::Book, category::Category},
};

/// Shared SELECT for the joined book representation. Every book has exactly
/// one author and one category, so the joins never multiply rows.
const BOOK_SELECT: &str = r#"
    SELECT b.id, b.title, b.description,
           b.author_id, a.name AS author_name, a.surname AS author_surname, a.slug AS author_slug,
           b.category_id, c.name AS category_name, c.slug AS category_slug
    FROM books b
    JOIN authors a ON a.id = b.author_id
    JOIN categories c ON c.id = b.category_id
"#;

/// Escape LIKE metacharacters so user input only ever matches literally.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books ordered by title, paginated
    pub async fn list(&self, page: i64, per_page: i64) -> AppResult<(Vec<Book>, i64)> {
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>(&format!(
            "{} ORDER BY b.title LIMIT $1 OFFSET $2",
            BOOK_SELECT
        ))
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// List every book, ordered by title (home page summary)
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!("{} ORDER BY b.title", BOOK_SELECT))
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get a single book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!("{} WHERE b.id = $1", BOOK_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Get an author by slug
    pub async fn get_author_by_slug(&self, slug: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "SELECT id, slug, name, surname FROM authors WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with slug {} not found", slug)))
    }

    /// Get a category by slug
    pub async fn get_category_by_slug(&self, slug: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT id, slug, name FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with slug {} not found", slug)))
    }

    /// List an author's books ordered by title, paginated
    pub async fn list_by_author(
        &self,
        author_id: i32,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Book>, i64)> {
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>(&format!(
            "{} WHERE b.author_id = $1 ORDER BY b.title LIMIT $2 OFFSET $3",
            BOOK_SELECT
        ))
        .bind(author_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// List a category's books ordered by title, paginated
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Book>, i64)> {
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>(&format!(
            "{} WHERE b.category_id = $1 ORDER BY b.title LIMIT $2 OFFSET $3",
            BOOK_SELECT
        ))
        .bind(category_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// Free-text search over title, description, author name and surname.
    /// Case-insensitive substring match; one row per book regardless of how
    /// many fields match.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Book>> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

        let books = sqlx::query_as::<_, Book>(&format!(
            r#"{}
            WHERE LOWER(b.title) LIKE $1
               OR LOWER(b.description) LIKE $1
               OR LOWER(a.name) LIKE $1
               OR LOWER(a.surname) LIKE $1
            ORDER BY b.title
            "#,
            BOOK_SELECT
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Count a book's copies that are currently available
    pub async fn count_available_copies(&self, book_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM book_instances WHERE book_id = $1 AND status = 'available'",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
