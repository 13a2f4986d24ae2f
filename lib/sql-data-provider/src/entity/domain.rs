use config_core::model::domain::Domain;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::DomainId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(Domain)]
#[sea_orm(table_name = "domain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: DomainId,
    pub domain_name: String,
    pub postmaster_address: Option<String>,
    pub status: DomainStatus,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(config_core::model::domain::DomainStatus)]
#[into(config_core::model::domain::DomainStatus)]
pub enum DomainStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "ENABLED")]
    Enabled,
    #[sea_orm(string_value = "DISABLED")]
    Disabled,
}
