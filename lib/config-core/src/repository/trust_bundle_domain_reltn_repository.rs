use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};

use super::error::DataLayerError;
use crate::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;

/// Storage of domain to trust bundle associations.
///
/// All read operations return records with both the domain and the trust bundle loaded.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TrustBundleDomainReltnRepository: Send + Sync {
    /// Fails with [`DataLayerError::ConstraintViolation`] when an endpoint is missing
    /// and with [`DataLayerError::IncorrectParameters`] when it does not exist.
    async fn create(
        &self,
        request: TrustBundleDomainReltn,
    ) -> Result<TrustBundleDomainReltnId, DataLayerError>;

    async fn get(
        &self,
        id: TrustBundleDomainReltnId,
    ) -> Result<Option<TrustBundleDomainReltn>, DataLayerError>;

    async fn get_by_domain(
        &self,
        domain_id: DomainId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError>;

    async fn get_by_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError>;

    async fn get_by_domain_and_trust_bundle(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError>;

    async fn delete(&self, id: TrustBundleDomainReltnId) -> Result<(), DataLayerError>;

    /// Returns the number of removed associations
    async fn delete_by_domain(&self, domain_id: DomainId) -> Result<u64, DataLayerError>;

    async fn delete_by_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<u64, DataLayerError>;

    async fn delete_by_domain_and_trust_bundle(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<u64, DataLayerError>;
}
