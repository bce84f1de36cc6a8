//! Catalog query service: read-only listing, filtering and search

use crate::{
    config::CatalogConfig,
    error::AppResult,
    models::book::{Book, BookQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    fn page_params(&self, query: &BookQuery) -> (i64, i64) {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(self.config.page_size).max(1);
        (page, per_page)
    }

    /// List all books ordered by title, paginated
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64, i64, i64)> {
        let (page, per_page) = self.page_params(query);
        let (books, total) = self.repository.books.list(page, per_page).await?;
        Ok((books, total, page, per_page))
    }

    /// List an author's books. Fails with NotFound when no author has the slug.
    pub async fn list_books_by_author(
        &self,
        slug: &str,
        query: &BookQuery,
    ) -> AppResult<(Vec<Book>, i64, i64, i64)> {
        let author = self.repository.books.get_author_by_slug(slug).await?;
        let (page, per_page) = self.page_params(query);
        let (books, total) = self
            .repository
            .books
            .list_by_author(author.id, page, per_page)
            .await?;
        Ok((books, total, page, per_page))
    }

    /// List a category's books. Fails with NotFound when no category has the slug.
    pub async fn list_books_by_category(
        &self,
        slug: &str,
        query: &BookQuery,
    ) -> AppResult<(Vec<Book>, i64, i64, i64)> {
        let category = self.repository.books.get_category_by_slug(slug).await?;
        let (page, per_page) = self.page_params(query);
        let (books, total) = self
            .repository
            .books
            .list_by_category(category.id, page, per_page)
            .await?;
        Ok((books, total, page, per_page))
    }

    /// Get a book with the count of its currently available copies
    pub async fn book_detail(&self, id: i32) -> AppResult<(Book, i64)> {
        let book = self.repository.books.get_by_id(id).await?;
        let available = self.repository.books.count_available_copies(book.id).await?;
        Ok((book, available))
    }

    /// Free-text search. An absent or blank query matches nothing.
    pub async fn search_books(&self, query: Option<&str>) -> AppResult<Vec<Book>> {
        let term = query.unwrap_or("").trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.books.search(term).await
    }

    /// Home page summary: the full catalog plus the global open-loan count
    pub async fn home_summary(&self) -> AppResult<(Vec<Book>, i64)> {
        let books = self.repository.books.list_all().await?;
        let borrowed_count = self.repository.loans.count_open().await?;
        Ok((books, borrowed_count))
    }
}
