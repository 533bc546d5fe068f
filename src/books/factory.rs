use crate::books::repository::BookRepository;
use crate::books::repository::json_file_repository::JsonFileBookRepository;
use crate::core::domain::Configuration;

pub(crate) fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    Box::new(JsonFileBookRepository::new(config.catalog_path.as_path()))
}
