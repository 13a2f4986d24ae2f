use std::sync::Arc;

use config::core_config::CoreConfig;
use repository::DataRepository;
use service::trust_bundle::TrustBundleService;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;

/// Entry point wiring the services on top of a data layer.
#[derive(Clone)]
pub struct ConfigCore {
    pub trust_bundle_service: TrustBundleService,
}

impl ConfigCore {
    pub fn new(data_provider: Arc<dyn DataRepository>, config: CoreConfig) -> Self {
        Self {
            trust_bundle_service: TrustBundleService::new(
                data_provider.get_domain_repository(),
                data_provider.get_trust_bundle_repository(),
                data_provider.get_trust_bundle_domain_reltn_repository(),
                Arc::new(config),
            ),
        }
    }
}
