use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) async fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    let service: Arc<dyn CatalogService> = Arc::new(CatalogServiceImpl::new(config, book_repo));
    // load failures degrade to an empty catalog inside reload
    let _ = service.reload().await;
    service
}
