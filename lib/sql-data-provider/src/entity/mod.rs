pub mod domain;
pub mod trust_bundle;
pub mod trust_bundle_domain_reltn;
