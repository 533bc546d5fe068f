use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

// Configuration abstracts config options for the catalog utility
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_path: PathBuf,
}

impl Configuration {
    pub fn new(catalog_path: &Path) -> Self {
        Configuration {
            catalog_path: catalog_path.to_path_buf(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            catalog_path: PathBuf::from("books.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new(Path::new("test.json"));
        assert_eq!(Path::new("test.json"), config.catalog_path.as_path());
    }

    #[tokio::test]
    async fn test_should_default_config() {
        let config = Configuration::default();
        assert_eq!(Path::new("books.json"), config.catalog_path.as_path());
    }
}
