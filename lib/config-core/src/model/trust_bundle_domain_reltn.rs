use shared_types::TrustBundleDomainReltnId;

use super::domain::Domain;
use super::trust_bundle::TrustBundle;

/// One edge of the many-to-many association between domains and trust bundles.
///
/// Both endpoints must be set before the record can be persisted. Records read
/// back from storage always carry both endpoints fully loaded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TrustBundleDomainReltn {
    pub id: TrustBundleDomainReltnId,

    // Relations
    pub domain: Option<Domain>,
    pub trust_bundle: Option<TrustBundle>,
}

impl TrustBundleDomainReltn {
    /// Unsaved association, the id gets assigned on insert
    pub fn new(domain: Domain, trust_bundle: TrustBundle) -> Self {
        Self {
            id: Default::default(),
            domain: Some(domain),
            trust_bundle: Some(trust_bundle),
        }
    }

    pub fn id(&self) -> TrustBundleDomainReltnId {
        self.id
    }

    pub fn set_id(&mut self, id: TrustBundleDomainReltnId) {
        self.id = id;
    }

    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = Some(domain);
    }

    pub fn trust_bundle(&self) -> Option<&TrustBundle> {
        self.trust_bundle.as_ref()
    }

    pub fn set_trust_bundle(&mut self, trust_bundle: TrustBundle) {
        self.trust_bundle = Some(trust_bundle);
    }
}
