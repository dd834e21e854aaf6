use tracing::warn;
use crate::books::factory::create_book_repository_for;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

// Builds the session catalog, preloading the data file when asked to. A
// missing or unreadable data file leaves the catalog empty.
pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let mut svc = CatalogServiceImpl::new();
    if config.autoload && config.data_file.exists() {
        let repository = create_book_repository_for(config.data_file.as_path());
        if let Err(err) = svc.load(repository.as_ref()) {
            warn!("could not preload {}: {}", config.data_file.display(), err);
        }
    }
    Box::new(svc)
}
