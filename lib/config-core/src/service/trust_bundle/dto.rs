use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};

/// A trust bundle as seen from one of its domains
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrustBundleAssociationDTO {
    pub id: TrustBundleDomainReltnId,
    pub trust_bundle_id: TrustBundleId,
    pub bundle_name: String,
    pub bundle_url: String,
    pub refresh_interval: u32,
}

/// A domain as seen from one of its trust bundles
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainAssociationDTO {
    pub id: TrustBundleDomainReltnId,
    pub domain_id: DomainId,
    pub domain_name: String,
}
