use shared_types::DomainId;

use super::error::DataLayerError;
use crate::model::domain::Domain;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait DomainRepository: Send + Sync {
    /// Inserts the domain, a default `id` lets the database assign one
    async fn create(&self, request: Domain) -> Result<DomainId, DataLayerError>;

    async fn get(&self, id: DomainId) -> Result<Option<Domain>, DataLayerError>;

    async fn delete(&self, id: DomainId) -> Result<(), DataLayerError>;
}
