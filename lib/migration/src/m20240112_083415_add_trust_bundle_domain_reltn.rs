use sea_orm_migration::prelude::*;

use crate::m20240110_000001_initial::{Domain, TrustBundle};

const TRUST_BUNDLE_DOMAIN_RELTN_DOMAIN_INDEX: &str = "index-TrustBundleDomainReltn-DomainId";
const TRUST_BUNDLE_DOMAIN_RELTN_TRUST_BUNDLE_INDEX: &str =
    "index-TrustBundleDomainReltn-TrustBundleId";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // (domain_id, trust_bundle_id) is intentionally not unique
        manager
            .create_table(
                Table::create()
                    .table(TrustBundleDomainReltn::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrustBundleDomainReltn::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrustBundleDomainReltn::TrustBundleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrustBundleDomainReltn::DomainId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TrustBundleDomainReltn-TrustBundleId")
                            .from_tbl(TrustBundleDomainReltn::Table)
                            .from_col(TrustBundleDomainReltn::TrustBundleId)
                            .to_tbl(TrustBundle::Table)
                            .to_col(TrustBundle::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TrustBundleDomainReltn-DomainId")
                            .from_tbl(TrustBundleDomainReltn::Table)
                            .from_col(TrustBundleDomainReltn::DomainId)
                            .to_tbl(Domain::Table)
                            .to_col(Domain::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(TRUST_BUNDLE_DOMAIN_RELTN_DOMAIN_INDEX)
                    .table(TrustBundleDomainReltn::Table)
                    .col(TrustBundleDomainReltn::DomainId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(TRUST_BUNDLE_DOMAIN_RELTN_TRUST_BUNDLE_INDEX)
                    .table(TrustBundleDomainReltn::Table)
                    .col(TrustBundleDomainReltn::TrustBundleId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum TrustBundleDomainReltn {
    #[sea_orm(iden = "trustbundledomainreltn")]
    Table,
    Id,
    TrustBundleId,
    DomainId,
}
