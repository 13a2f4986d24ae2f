use std::sync::Arc;

use domain_repository::DomainRepository;
use trust_bundle_domain_reltn_repository::TrustBundleDomainReltnRepository;
use trust_bundle_repository::TrustBundleRepository;

pub mod domain_repository;
pub mod error;
pub mod trust_bundle_domain_reltn_repository;
pub mod trust_bundle_repository;

pub trait DataRepository: Send + Sync {
    fn get_domain_repository(&self) -> Arc<dyn DomainRepository>;
    fn get_trust_bundle_repository(&self) -> Arc<dyn TrustBundleRepository>;
    fn get_trust_bundle_domain_reltn_repository(
        &self,
    ) -> Arc<dyn TrustBundleDomainReltnRepository>;
}
