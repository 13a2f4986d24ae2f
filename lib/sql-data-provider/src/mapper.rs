use config_core::repository::error::DataLayerError;
use sea_orm::ActiveValue::{self, NotSet, Set};
use sea_orm::{DbErr, SqlErr, Value};

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DataLayerError::AlreadyExists,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DataLayerError::IncorrectParameters,
        Some(_) | None => DataLayerError::Db(e.into()),
    }
}

/// Unassigned (`0`) ids are left to the database, negative ids are rejected
pub(crate) fn to_active_id<Id>(id: Id) -> Result<ActiveValue<Id>, DataLayerError>
where
    Id: Copy + Into<i64> + Into<Value>,
{
    let raw: i64 = id.into();
    match raw {
        0 => Ok(NotSet),
        1.. => Ok(Set(id)),
        _ => Err(DataLayerError::IncorrectParameters),
    }
}
