include!("../../lib.rs");
use crate::catalog::shell::Shell;
use crate::core::domain::Configuration;
use crate::utils::term::setup_tracing;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::default();
    let catalog_service = catalog::factory::create_catalog_service(&config).await;
    let mut shell = Shell::new(catalog_service);
    shell.run().await;
}
