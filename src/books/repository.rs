pub mod json_file_repository;

use std::path::Path;
use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<BookEntity> {
    // backing file location, used for diagnostics
    fn catalog_path(&self) -> &Path;
}
