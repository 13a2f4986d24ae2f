use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;

/// Surrogate key of a trust bundle to domain association.
///
/// Generated by the database on insert. The default value (`0`) marks a record
/// that has not been persisted yet.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TrustBundleDomainReltnId(i64);

impls_for_integer_newtype!(TrustBundleDomainReltnId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_integer_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_integer_newtype!(TrustBundleDomainReltnId);
