/// Implements necessary traits for using integer *newtypes* in sea-orm
///
/// # Examples
/// ```
///   struct MyNewtype(i64);
///   // stored in the database as a BIGINT, usable as an auto-increment primary key
///   impls_for_seaorm_integer_newtype!(MyNewtype);
/// ```
#[cfg(feature = "sea-orm")]
macro_rules! impls_for_seaorm_integer_newtype {
    ($newtype: ty) => {
        impl std::convert::From<$newtype> for sea_orm::Value {
            fn from(source: $newtype) -> Self {
                source.0.into()
            }
        }
        // needed for sea-orm `eq` to work
        impl std::convert::From<&$newtype> for sea_orm::Value {
            fn from(source: &$newtype) -> Self {
                source.0.into()
            }
        }

        impl sea_orm::TryGetable for $newtype {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                idx: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                <i64 as sea_orm::TryGetable>::try_get_by(res, idx).map(Self)
            }
        }

        impl sea_orm::sea_query::ValueType for $newtype {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                <i64 as sea_orm::sea_query::ValueType>::try_from(v).map(Self)
            }

            fn type_name() -> String {
                stringify!($newtype).to_owned()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::BigInt
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::BigInteger
            }
        }

        // needed for sea-orm `find_by_id` to work with references
        impl std::convert::From<&$newtype> for $newtype {
            fn from(source: &$newtype) -> Self {
                *source
            }
        }

        // needed if we want to put the type inside and Option
        impl sea_orm::sea_query::value::Nullable for $newtype {
            fn null() -> sea_orm::Value {
                sea_orm::Value::BigInt(None)
            }
        }

        // needed to read back auto-increment primary keys
        impl sea_orm::TryFromU64 for $newtype {
            fn try_from_u64(n: u64) -> Result<Self, sea_orm::DbErr> {
                <i64 as sea_orm::TryFromU64>::try_from_u64(n).map(Self)
            }
        }
    };
}
#[cfg(feature = "sea-orm")]
pub(crate) use impls_for_seaorm_integer_newtype;

/// Implements [`std::str::FromStr`], [`std::fmt::Display`], [`std::convert::From`] and [`std::convert::Into`] for a newtype that wraps an i64,
/// plus `is_unassigned`
macro_rules! impls_for_integer_newtype {
    ($newtype: ty) => {
        impl std::str::FromStr for $newtype {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.parse()?;

                Ok(Self(s))
            }
        }

        impl $newtype {
            /// `0` marks a row that has not been persisted yet
            pub fn is_unassigned(&self) -> bool {
                self.0 == 0
            }
        }

        impl std::cmp::PartialEq<i64> for $newtype {
            fn eq(&self, other: &i64) -> bool {
                self.0.eq(other)
            }
        }

        $crate::macros::impl_display!($newtype);
        $crate::macros::impl_from!($newtype; i64);
        $crate::macros::impl_into!($newtype; i64);
    };
}
pub(crate) use impls_for_integer_newtype;

/// Implements [`std::fmt::Display`] for a newtype, assuming that the inner type implements Display.
macro_rules! impl_display {
    ($newtype: ty) => {
        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
pub(crate) use impl_display;

/// Implements [`std::convert::From`]
macro_rules! impl_from {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$inner> for $newtype {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}
pub(crate) use impl_from;

/// Implements [`std::convert::Into`]
macro_rules! impl_into {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$newtype> for $inner {
            fn from(value: $newtype) -> Self {
                value.0
            }
        }
    };
}
pub(crate) use impl_into;
