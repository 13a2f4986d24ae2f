use config_core::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;
use config_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::trust_bundle_domain_reltn;
use crate::mapper::to_active_id;

impl TryFrom<TrustBundleDomainReltn> for trust_bundle_domain_reltn::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: TrustBundleDomainReltn) -> Result<Self, Self::Error> {
        let domain = value
            .domain
            .ok_or(DataLayerError::ConstraintViolation("domain"))?;
        let trust_bundle = value
            .trust_bundle
            .ok_or(DataLayerError::ConstraintViolation("trust_bundle"))?;

        Ok(Self {
            id: to_active_id(value.id)?,
            trust_bundle_id: Set(trust_bundle.id),
            domain_id: Set(domain.id),
        })
    }
}
