use autometrics::autometrics;
use config_core::model::domain::Domain;
use config_core::model::trust_bundle::TrustBundle;
use config_core::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;
use config_core::repository::error::DataLayerError;
use config_core::repository::trust_bundle_domain_reltn_repository::TrustBundleDomainReltnRepository;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};

use super::TrustBundleDomainReltnProvider;
use crate::entity::{domain, trust_bundle, trust_bundle_domain_reltn};
use crate::mapper::to_data_layer_error;

impl TrustBundleDomainReltnProvider {
    async fn load_domain(
        &self,
        domain_id: DomainId,
        reltn_id: TrustBundleDomainReltnId,
    ) -> Result<Domain, DataLayerError> {
        self.domain_repository
            .get(domain_id)
            .await?
            .ok_or(DataLayerError::MissingRequiredRelation {
                relation: "trust_bundle_domain_reltn-domain",
                id: reltn_id.to_string(),
            })
    }

    async fn load_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
        reltn_id: TrustBundleDomainReltnId,
    ) -> Result<TrustBundle, DataLayerError> {
        self.trust_bundle_repository
            .get(trust_bundle_id)
            .await?
            .ok_or(DataLayerError::MissingRequiredRelation {
                relation: "trust_bundle_domain_reltn-trust_bundle",
                id: reltn_id.to_string(),
            })
    }
}

#[autometrics]
#[async_trait::async_trait]
impl TrustBundleDomainReltnRepository for TrustBundleDomainReltnProvider {
    async fn create(
        &self,
        request: TrustBundleDomainReltn,
    ) -> Result<TrustBundleDomainReltnId, DataLayerError> {
        let reltn = trust_bundle_domain_reltn::ActiveModel::try_from(request)?
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(reltn.id)
    }

    async fn get(
        &self,
        id: TrustBundleDomainReltnId,
    ) -> Result<Option<TrustBundleDomainReltn>, DataLayerError> {
        let Some(model) = trust_bundle_domain_reltn::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        let domain = self.load_domain(model.domain_id, model.id).await?;
        let trust_bundle = self
            .load_trust_bundle(model.trust_bundle_id, model.id)
            .await?;

        Ok(Some(TrustBundleDomainReltn {
            id: model.id,
            domain: Some(domain),
            trust_bundle: Some(trust_bundle),
        }))
    }

    async fn get_by_domain(
        &self,
        domain_id: DomainId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError> {
        let models: Vec<(trust_bundle_domain_reltn::Model, Option<trust_bundle::Model>)> =
            trust_bundle_domain_reltn::Entity::find()
                .filter(trust_bundle_domain_reltn::Column::DomainId.eq(domain_id))
                .find_also_related(trust_bundle::Entity)
                .order_by_asc(trust_bundle_domain_reltn::Column::Id)
                .all(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        let Some((first, _)) = models.first() else {
            return Ok(vec![]);
        };
        let domain = self.load_domain(domain_id, first.id).await?;

        models
            .into_iter()
            .map(|(model, trust_bundle)| -> Result<_, DataLayerError> {
                let trust_bundle =
                    trust_bundle.ok_or(DataLayerError::MissingRequiredRelation {
                        relation: "trust_bundle_domain_reltn-trust_bundle",
                        id: model.id.to_string(),
                    })?;

                Ok(TrustBundleDomainReltn {
                    id: model.id,
                    domain: Some(domain.clone()),
                    trust_bundle: Some(trust_bundle.into()),
                })
            })
            .collect()
    }

    async fn get_by_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError> {
        let models: Vec<(trust_bundle_domain_reltn::Model, Option<domain::Model>)> =
            trust_bundle_domain_reltn::Entity::find()
                .filter(trust_bundle_domain_reltn::Column::TrustBundleId.eq(trust_bundle_id))
                .find_also_related(domain::Entity)
                .order_by_asc(trust_bundle_domain_reltn::Column::Id)
                .all(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        let Some((first, _)) = models.first() else {
            return Ok(vec![]);
        };
        let trust_bundle = self.load_trust_bundle(trust_bundle_id, first.id).await?;

        models
            .into_iter()
            .map(|(model, domain)| -> Result<_, DataLayerError> {
                let domain = domain.ok_or(DataLayerError::MissingRequiredRelation {
                    relation: "trust_bundle_domain_reltn-domain",
                    id: model.id.to_string(),
                })?;

                Ok(TrustBundleDomainReltn {
                    id: model.id,
                    domain: Some(domain.into()),
                    trust_bundle: Some(trust_bundle.clone()),
                })
            })
            .collect()
    }

    async fn get_by_domain_and_trust_bundle(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<Vec<TrustBundleDomainReltn>, DataLayerError> {
        let models = trust_bundle_domain_reltn::Entity::find()
            .filter(trust_bundle_domain_reltn::Column::DomainId.eq(domain_id))
            .filter(trust_bundle_domain_reltn::Column::TrustBundleId.eq(trust_bundle_id))
            .order_by_asc(trust_bundle_domain_reltn::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let Some(first) = models.first() else {
            return Ok(vec![]);
        };
        let domain = self.load_domain(domain_id, first.id).await?;
        let trust_bundle = self.load_trust_bundle(trust_bundle_id, first.id).await?;

        Ok(models
            .into_iter()
            .map(|model| TrustBundleDomainReltn {
                id: model.id,
                domain: Some(domain.clone()),
                trust_bundle: Some(trust_bundle.clone()),
            })
            .collect())
    }

    async fn delete(&self, id: TrustBundleDomainReltnId) -> Result<(), DataLayerError> {
        let result = trust_bundle_domain_reltn::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn delete_by_domain(&self, domain_id: DomainId) -> Result<u64, DataLayerError> {
        let result = trust_bundle_domain_reltn::Entity::delete_many()
            .filter(trust_bundle_domain_reltn::Column::DomainId.eq(domain_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<u64, DataLayerError> {
        let result = trust_bundle_domain_reltn::Entity::delete_many()
            .filter(trust_bundle_domain_reltn::Column::TrustBundleId.eq(trust_bundle_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_domain_and_trust_bundle(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<u64, DataLayerError> {
        let result = trust_bundle_domain_reltn::Entity::delete_many()
            .filter(trust_bundle_domain_reltn::Column::DomainId.eq(domain_id))
            .filter(trust_bundle_domain_reltn::Column::TrustBundleId.eq(trust_bundle_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }
}
