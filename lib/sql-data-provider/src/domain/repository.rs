use autometrics::autometrics;
use config_core::model::domain::Domain;
use config_core::repository::domain_repository::DomainRepository;
use config_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{ActiveModelTrait, EntityTrait};
use shared_types::DomainId;

use super::DomainProvider;
use crate::entity::domain;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl DomainRepository for DomainProvider {
    async fn create(&self, request: Domain) -> Result<DomainId, DataLayerError> {
        let domain = domain::ActiveModel::try_from(request)?
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(domain.id)
    }

    async fn get(&self, id: DomainId) -> Result<Option<Domain>, DataLayerError> {
        let domain = domain::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(domain))
    }

    async fn delete(&self, id: DomainId) -> Result<(), DataLayerError> {
        let result = domain::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
