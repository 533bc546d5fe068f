use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

// JsonFileBookRepository stores the full record sequence as one pretty-printed
// JSON array; every save truncates and rewrites the file.
#[derive(Debug)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonFileBookRepository {
    async fn load_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let body = tokio::fs::read_to_string(self.path.as_path()).await
            .map_err(CatalogError::from)?;
        serde_json::from_str(body.as_str()).map_err(CatalogError::from)
    }

    async fn save_all(&self, records: &[BookEntity]) -> CatalogResult<usize> {
        let body = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(self.path.as_path(), body).await
            .map_err(CatalogError::from).map(|_| records.len())
    }
}

impl BookRepository for JsonFileBookRepository {
    fn catalog_path(&self) -> &Path {
        self.path.as_path()
    }
}
