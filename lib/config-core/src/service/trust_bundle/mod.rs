use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::domain_repository::DomainRepository;
use crate::repository::trust_bundle_domain_reltn_repository::TrustBundleDomainReltnRepository;
use crate::repository::trust_bundle_repository::TrustBundleRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct TrustBundleService {
    domain_repository: Arc<dyn DomainRepository>,
    trust_bundle_repository: Arc<dyn TrustBundleRepository>,
    trust_bundle_domain_reltn_repository: Arc<dyn TrustBundleDomainReltnRepository>,
    config: Arc<CoreConfig>,
}

impl TrustBundleService {
    pub fn new(
        domain_repository: Arc<dyn DomainRepository>,
        trust_bundle_repository: Arc<dyn TrustBundleRepository>,
        trust_bundle_domain_reltn_repository: Arc<dyn TrustBundleDomainReltnRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            domain_repository,
            trust_bundle_repository,
            trust_bundle_domain_reltn_repository,
            config,
        }
    }
}
