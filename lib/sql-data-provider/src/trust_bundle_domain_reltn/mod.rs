use std::sync::Arc;

use config_core::repository::domain_repository::DomainRepository;
use config_core::repository::trust_bundle_repository::TrustBundleRepository;
use sea_orm::DatabaseConnection;

pub mod mapper;
pub mod repository;

pub(crate) struct TrustBundleDomainReltnProvider {
    pub db: DatabaseConnection,
    pub domain_repository: Arc<dyn DomainRepository>,
    pub trust_bundle_repository: Arc<dyn TrustBundleRepository>,
}
