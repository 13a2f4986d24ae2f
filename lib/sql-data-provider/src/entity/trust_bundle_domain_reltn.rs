use sea_orm::entity::prelude::*;
use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trustbundledomainreltn")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: TrustBundleDomainReltnId,
    pub trust_bundle_id: TrustBundleId,
    pub domain_id: DomainId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trust_bundle::Entity",
        from = "Column::TrustBundleId",
        to = "super::trust_bundle::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    TrustBundle,
    #[sea_orm(
        belongs_to = "super::domain::Entity",
        from = "Column::DomainId",
        to = "super::domain::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Domain,
}

impl Related<super::trust_bundle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrustBundle.def()
    }
}

impl Related<super::domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
