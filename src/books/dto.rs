use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

// BookDto is a data transfer object for the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub sector: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, category: &str, sector: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            sector: sector.to_string(),
        }
    }
}

impl Book for BookDto {
    fn field_values(&self) -> [&str; 5] {
        [self.title.as_str(), self.author.as_str(), self.isbn.as_str(),
            self.category.as_str(), self.sector.as_str()]
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, ISBN: {}, Category: {}, Sector: {}",
               self.title, self.author, self.isbn, self.category, self.sector)
    }
}
