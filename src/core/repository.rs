use async_trait::async_trait;
use crate::core::catalog::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads the full stored sequence in insertion order
    async fn load_all(&self) -> CatalogResult<Vec<Entity>>;

    // replaces the stored sequence with the given records
    async fn save_all(&self, records: &[Entity]) -> CatalogResult<usize>;
}
