pub mod error;
pub mod trust_bundle;

#[cfg(test)]
pub(crate) mod test_utilities;
