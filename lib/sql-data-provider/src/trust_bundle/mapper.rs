use config_core::model::trust_bundle::TrustBundle;
use config_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::trust_bundle;
use crate::mapper::to_active_id;

impl TryFrom<TrustBundle> for trust_bundle::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: TrustBundle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: to_active_id(value.id)?,
            bundle_name: Set(value.bundle_name),
            bundle_url: Set(value.bundle_url),
            refresh_interval: Set(value.refresh_interval),
            checksum: Set(value.checksum),
            created_date: Set(value.created_date),
            last_refresh_attempt: Set(value.last_refresh_attempt),
            last_successful_refresh: Set(value.last_successful_refresh),
        })
    }
}
