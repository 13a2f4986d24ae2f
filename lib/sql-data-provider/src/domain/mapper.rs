use config_core::model::domain::Domain;
use config_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::domain;
use crate::mapper::to_active_id;

impl TryFrom<Domain> for domain::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: Domain) -> Result<Self, Self::Error> {
        Ok(Self {
            id: to_active_id(value.id)?,
            domain_name: Set(value.domain_name),
            postmaster_address: Set(value.postmaster_address),
            status: Set(value.status.into()),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        })
    }
}
