use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;

/// Surrogate key of a domain row.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DomainId(i64);

impls_for_integer_newtype!(DomainId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_integer_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_integer_newtype!(DomainId);
