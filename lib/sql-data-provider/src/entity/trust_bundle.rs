use config_core::model::trust_bundle::TrustBundle;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::TrustBundleId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(TrustBundle)]
#[sea_orm(table_name = "trust_bundle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: TrustBundleId,
    pub bundle_name: String,
    #[sea_orm(column_type = "Text")]
    pub bundle_url: String,
    pub refresh_interval: u32,
    pub checksum: String,
    pub created_date: OffsetDateTime,
    pub last_refresh_attempt: Option<OffsetDateTime>,
    pub last_successful_refresh: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trust_bundle_domain_reltn::Entity")]
    TrustBundleDomainReltn,
}

impl Related<super::trust_bundle_domain_reltn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrustBundleDomainReltn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
