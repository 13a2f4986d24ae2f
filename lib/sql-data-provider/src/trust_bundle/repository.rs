use autometrics::autometrics;
use config_core::model::trust_bundle::TrustBundle;
use config_core::repository::error::DataLayerError;
use config_core::repository::trust_bundle_repository::TrustBundleRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ActiveModelTrait, EntityTrait};
use shared_types::TrustBundleId;

use super::TrustBundleProvider;
use crate::entity::trust_bundle;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl TrustBundleRepository for TrustBundleProvider {
    async fn create(&self, request: TrustBundle) -> Result<TrustBundleId, DataLayerError> {
        let trust_bundle = trust_bundle::ActiveModel::try_from(request)?
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(trust_bundle.id)
    }

    async fn get(&self, id: TrustBundleId) -> Result<Option<TrustBundle>, DataLayerError> {
        let trust_bundle = trust_bundle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(trust_bundle))
    }

    async fn delete(&self, id: TrustBundleId) -> Result<(), DataLayerError> {
        let result = trust_bundle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
