use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::model::domain::{Domain, DomainStatus};
use crate::model::trust_bundle::TrustBundle;
use crate::model::trust_bundle_domain_reltn::TrustBundleDomainReltn;

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub fn dummy_domain(id: i64) -> Domain {
    Domain {
        id: DomainId::from(id),
        domain_name: "example.com".to_string(),
        postmaster_address: Some("postmaster@example.com".to_string()),
        status: DomainStatus::Enabled,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
    }
}

pub fn dummy_trust_bundle(id: i64) -> TrustBundle {
    TrustBundle {
        id: TrustBundleId::from(id),
        bundle_name: "AcmeBundle".to_string(),
        bundle_url: "https://acme.example.com/bundle.p7b".to_string(),
        refresh_interval: 24,
        checksum: "".to_string(),
        created_date: get_dummy_date(),
        last_refresh_attempt: None,
        last_successful_refresh: None,
    }
}

pub fn dummy_reltn(id: i64, domain: Domain, trust_bundle: TrustBundle) -> TrustBundleDomainReltn {
    TrustBundleDomainReltn {
        id: TrustBundleDomainReltnId::from(id),
        domain: Some(domain),
        trust_bundle: Some(trust_bundle),
    }
}
