use super::dto::{DomainAssociationDTO, TrustBundleAssociationDTO};
use crate::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;
use crate::service::error::ServiceError;

impl TryFrom<TrustBundleDomainReltn> for TrustBundleAssociationDTO {
    type Error = ServiceError;

    fn try_from(value: TrustBundleDomainReltn) -> Result<Self, Self::Error> {
        let trust_bundle = value.trust_bundle.ok_or(ServiceError::MappingError(format!(
            "trust bundle is None for association {}",
            value.id
        )))?;

        Ok(Self {
            id: value.id,
            trust_bundle_id: trust_bundle.id,
            bundle_name: trust_bundle.bundle_name,
            bundle_url: trust_bundle.bundle_url,
            refresh_interval: trust_bundle.refresh_interval,
        })
    }
}

impl TryFrom<TrustBundleDomainReltn> for DomainAssociationDTO {
    type Error = ServiceError;

    fn try_from(value: TrustBundleDomainReltn) -> Result<Self, Self::Error> {
        let domain = value.domain.ok_or(ServiceError::MappingError(format!(
            "domain is None for association {}",
            value.id
        )))?;

        Ok(Self {
            id: value.id,
            domain_id: domain.id,
            domain_name: domain.domain_name,
        })
    }
}
