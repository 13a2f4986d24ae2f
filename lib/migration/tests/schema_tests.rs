#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

mod fixtures;

#[path = "test/domain.rs"]
mod domain_tests;
#[path = "test/trust_bundle.rs"]
mod trust_bundle_tests;
#[path = "test/trust_bundle_domain_reltn.rs"]
mod trust_bundle_domain_reltn_tests;
