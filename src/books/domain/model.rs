use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

// BookEntity is the persistent representation of one catalog record; the five
// fields are free-form text and isbn is not enforced to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub sector: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, category: &str, sector: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            sector: sector.to_string(),
        }
    }
}

impl Book for BookEntity {
    fn field_values(&self) -> [&str; 5] {
        [self.title.as_str(), self.author.as_str(), self.isbn.as_str(),
            self.category.as_str(), self.sector.as_str()]
    }
}
