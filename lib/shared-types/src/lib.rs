mod domain_id;
mod macros;
mod trust_bundle_domain_reltn_id;
mod trust_bundle_id;

pub use domain_id::DomainId;
pub use trust_bundle_domain_reltn_id::TrustBundleDomainReltnId;
pub use trust_bundle_id::TrustBundleId;
