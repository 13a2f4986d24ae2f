use shared_types::TrustBundleId;

use super::error::DataLayerError;
use crate::model::trust_bundle::TrustBundle;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TrustBundleRepository: Send + Sync {
    async fn create(&self, request: TrustBundle) -> Result<TrustBundleId, DataLayerError>;

    async fn get(&self, id: TrustBundleId) -> Result<Option<TrustBundle>, DataLayerError>;

    async fn delete(&self, id: TrustBundleId) -> Result<(), DataLayerError>;
}
