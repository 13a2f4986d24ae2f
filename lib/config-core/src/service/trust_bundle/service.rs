use one_dto_mapper::try_convert_inner;
use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};

use super::TrustBundleService;
use super::dto::{DomainAssociationDTO, TrustBundleAssociationDTO};
use crate::model::domain::Domain;
use crate::model::trust_bundle::TrustBundle;
use crate::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl TrustBundleService {
    /// Associates an existing trust bundle with an existing domain
    ///
    /// # Arguments
    ///
    /// * `domain_id` - Id of an existing domain
    /// * `trust_bundle_id` - Id of an existing trust bundle
    pub async fn associate_trust_bundle_to_domain(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<TrustBundleDomainReltnId, ServiceError> {
        let domain = self.get_domain(domain_id).await?;
        let trust_bundle = self.get_trust_bundle(trust_bundle_id).await?;

        if !self.config.association.allow_duplicates {
            let existing = self
                .trust_bundle_domain_reltn_repository
                .get_by_domain_and_trust_bundle(domain_id, trust_bundle_id)
                .await?;

            if !existing.is_empty() {
                return Err(BusinessLogicError::TrustBundleAlreadyAssociated {
                    domain_id,
                    trust_bundle_id,
                }
                .into());
            }
        }

        let id = self
            .trust_bundle_domain_reltn_repository
            .create(TrustBundleDomainReltn::new(domain, trust_bundle))
            .await?;

        // a concurrent call may have inserted the same pair in between, the oldest row wins
        if !self.config.association.allow_duplicates {
            let associations = self
                .trust_bundle_domain_reltn_repository
                .get_by_domain_and_trust_bundle(domain_id, trust_bundle_id)
                .await?;

            if associations.iter().any(|association| association.id < id) {
                self.trust_bundle_domain_reltn_repository.delete(id).await?;

                return Err(BusinessLogicError::TrustBundleAlreadyAssociated {
                    domain_id,
                    trust_bundle_id,
                }
                .into());
            }
        }

        tracing::info!(%id, %domain_id, %trust_bundle_id, "Associated trust bundle to domain");

        Ok(id)
    }

    /// Removes the association between a trust bundle and a domain
    pub async fn disassociate_trust_bundle_from_domain(
        &self,
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    ) -> Result<(), ServiceError> {
        self.get_domain(domain_id).await?;
        self.get_trust_bundle(trust_bundle_id).await?;

        let removed = self
            .trust_bundle_domain_reltn_repository
            .delete_by_domain_and_trust_bundle(domain_id, trust_bundle_id)
            .await?;

        if removed == 0 {
            return Err(BusinessLogicError::TrustBundleNotAssociated {
                domain_id,
                trust_bundle_id,
            }
            .into());
        }

        tracing::info!(%domain_id, %trust_bundle_id, "Disassociated trust bundle from domain");

        Ok(())
    }

    /// Removes all trust bundle associations of a domain, returns how many were removed
    pub async fn disassociate_trust_bundles_from_domain(
        &self,
        domain_id: DomainId,
    ) -> Result<u64, ServiceError> {
        self.get_domain(domain_id).await?;

        let removed = self
            .trust_bundle_domain_reltn_repository
            .delete_by_domain(domain_id)
            .await?;

        tracing::info!(%domain_id, removed, "Disassociated all trust bundles from domain");

        Ok(removed)
    }

    /// Removes all domain associations of a trust bundle, returns how many were removed
    pub async fn disassociate_trust_bundle_from_domains(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<u64, ServiceError> {
        self.get_trust_bundle(trust_bundle_id).await?;

        let removed = self
            .trust_bundle_domain_reltn_repository
            .delete_by_trust_bundle(trust_bundle_id)
            .await?;

        tracing::info!(%trust_bundle_id, removed, "Disassociated trust bundle from all domains");

        Ok(removed)
    }

    pub async fn get_trust_bundles_by_domain(
        &self,
        domain_id: DomainId,
    ) -> Result<Vec<TrustBundleAssociationDTO>, ServiceError> {
        self.get_domain(domain_id).await?;

        let associations = self
            .trust_bundle_domain_reltn_repository
            .get_by_domain(domain_id)
            .await?;

        try_convert_inner(associations)
    }

    pub async fn get_domains_by_trust_bundle(
        &self,
        trust_bundle_id: TrustBundleId,
    ) -> Result<Vec<DomainAssociationDTO>, ServiceError> {
        self.get_trust_bundle(trust_bundle_id).await?;

        let associations = self
            .trust_bundle_domain_reltn_repository
            .get_by_trust_bundle(trust_bundle_id)
            .await?;

        try_convert_inner(associations)
    }

    async fn get_domain(&self, id: DomainId) -> Result<Domain, ServiceError> {
        self.domain_repository
            .get(id)
            .await?
            .ok_or(EntityNotFoundError::Domain(id).into())
    }

    async fn get_trust_bundle(&self, id: TrustBundleId) -> Result<TrustBundle, ServiceError> {
        self.trust_bundle_repository
            .get(id)
            .await?
            .ok_or(EntityNotFoundError::TrustBundle(id).into())
    }
}
