pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::catalog::CatalogResult;

// CatalogService owns the in-memory record sequence for the process lifetime
// and keeps it synchronized with durable storage on every mutation.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // validates the isbn, appends the record and persists the full sequence;
    // a persist failure is degraded, not surfaced
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;

    // case-insensitive substring scan across all five fields, catalog order
    async fn search_books(&self, term: &str) -> CatalogResult<Vec<BookDto>>;

    // full sequence in catalog order
    async fn list_books(&self) -> CatalogResult<Vec<BookDto>>;

    // rewrites durable storage with the full in-memory sequence
    async fn persist(&self) -> CatalogResult<usize>;

    // replaces the in-memory sequence from durable storage, falling back to
    // empty when the file is absent or malformed; used at startup
    async fn reload(&self) -> CatalogResult<usize>;
}
