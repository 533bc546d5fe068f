use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::books::domain::{is_valid_isbn, Book};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Configuration;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    books: RwLock<Vec<BookEntity>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        if !is_valid_isbn(book.isbn.as_str()) {
            return Err(CatalogError::validation(
                format!("invalid isbn {}", book.isbn).as_str(), None));
        }
        {
            let mut books = self.books.write().await;
            books.push(BookEntity::from(book));
        }
        // the record stays authoritative in memory even when the write fails;
        // the next successful persist carries it
        if let Err(err) = self.persist().await {
            warn!("failed to save catalog to {:?}: {}",
                self.book_repository.catalog_path(), err);
        }
        Ok(book.clone())
    }

    async fn search_books(&self, term: &str) -> CatalogResult<Vec<BookDto>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.matches(term)).map(BookDto::from).collect())
    }

    async fn list_books(&self) -> CatalogResult<Vec<BookDto>> {
        let books = self.books.read().await;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn persist(&self) -> CatalogResult<usize> {
        let snapshot = {
            let books = self.books.read().await;
            books.clone()
        };
        self.book_repository.save_all(&snapshot).await
    }

    async fn reload(&self) -> CatalogResult<usize> {
        let loaded = match self.book_repository.load_all().await {
            Ok(records) => {
                info!("loaded {} records from {:?}", records.len(),
                    self.book_repository.catalog_path());
                records
            }
            Err(err) => {
                warn!("failed to load catalog from {:?}, starting empty: {}",
                    self.book_repository.catalog_path(), err);
                Vec::new()
            }
        };
        let size = loaded.len();
        let mut books = self.books.write().await;
        *books = loaded;
        Ok(size)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            sector: other.sector.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            sector: other.sector.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;

    async fn create_test_service(path: &Path) -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new(path)).await
    }

    fn dune() -> BookDto {
        BookDto::new("Dune", "Herbert", "9780441013593", "SciFi", "Fiction")
    }

    fn nineteen_eighty_four() -> BookDto {
        BookDto::new("1984", "Orwell", "9780451524935", "Dystopia", "Fiction")
    }

    #[tokio::test]
    async fn test_should_add_and_list_books_in_order() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let catalog_svc = create_test_service(dir.path().join("books.json").as_path()).await;

        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let _ = catalog_svc.add_book(&nineteen_eighty_four()).await.expect("should add book");

        let books = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(2, books.len());
        assert_eq!("Dune", books[0].title.as_str());
        assert_eq!("1984", books[1].title.as_str());
    }

    #[tokio::test]
    async fn test_should_allow_duplicate_isbn() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let catalog_svc = create_test_service(dir.path().join("books.json").as_path()).await;

        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");

        let books = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(2, books.len());
    }

    #[tokio::test]
    async fn test_should_search_any_field_case_insensitive() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let catalog_svc = create_test_service(dir.path().join("books.json").as_path()).await;

        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let _ = catalog_svc.add_book(&nineteen_eighty_four()).await.expect("should add book");

        let both = catalog_svc.search_books("fiction").await.expect("should search books");
        assert_eq!(2, both.len());
        assert_eq!("Dune", both[0].title.as_str());

        let orwell = catalog_svc.search_books("ORWELL").await.expect("should search books");
        assert_eq!(1, orwell.len());
        assert_eq!("1984", orwell[0].title.as_str());

        let none = catalog_svc.search_books("zzz").await.expect("should search books");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_should_return_every_book_for_empty_term() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let catalog_svc = create_test_service(dir.path().join("books.json").as_path()).await;

        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let _ = catalog_svc.add_book(&nineteen_eighty_four()).await.expect("should add book");

        let all = catalog_svc.search_books("").await.expect("should search books");
        assert_eq!(2, all.len());
        assert_eq!("Dune", all[0].title.as_str());
        assert_eq!("1984", all[1].title.as_str());
    }

    #[tokio::test]
    async fn test_should_round_trip_through_storage() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("books.json");

        let catalog_svc = create_test_service(path.as_path()).await;
        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let _ = catalog_svc.add_book(&nineteen_eighty_four()).await.expect("should add book");

        let reloaded_svc = create_test_service(path.as_path()).await;
        let books = reloaded_svc.list_books().await.expect("should list books");
        assert_eq!(vec![dune(), nineteen_eighty_four()], books);
    }

    #[tokio::test]
    async fn test_should_start_empty_when_file_missing() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let catalog_svc = create_test_service(dir.path().join("missing.json").as_path()).await;
        let books = catalog_svc.list_books().await.expect("should list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_start_empty_when_file_malformed() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("books.json");
        tokio::fs::write(path.as_path(), "{ not an array").await.expect("should write file");

        let catalog_svc = create_test_service(path.as_path()).await;
        let books = catalog_svc.list_books().await.expect("should list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_book_in_memory_when_save_fails() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("no-such-dir").join("books.json");

        let catalog_svc = create_test_service(path.as_path()).await;
        let _ = catalog_svc.add_book(&dune()).await.expect("should add book despite save failure");

        let books = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(1, books.len());
        assert!(catalog_svc.persist().await.is_err());
    }

    #[tokio::test]
    async fn test_should_persist_and_reload_explicitly() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("books.json");

        let catalog_svc = create_test_service(path.as_path()).await;
        let _ = catalog_svc.add_book(&dune()).await.expect("should add book");
        let size = catalog_svc.persist().await.expect("should persist books");
        assert_eq!(1, size);

        let size = catalog_svc.reload().await.expect("should reload books");
        assert_eq!(1, size);
    }
}
