use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

const UNIQUE_DOMAIN_NAME_INDEX: &str = "index-Domain-DomainName-Unique";
const UNIQUE_TRUST_BUNDLE_NAME_INDEX: &str = "index-TrustBundle-BundleName-Unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domain::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Domain::DomainName).string().not_null())
                    .col(ColumnDef::new(Domain::PostmasterAddress).string())
                    .col(ColumnDef::new(Domain::Status).string().not_null())
                    .col(
                        ColumnDef::new(Domain::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Domain::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_DOMAIN_NAME_INDEX)
                    .table(Domain::Table)
                    .col(Domain::DomainName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrustBundle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrustBundle::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrustBundle::BundleName).string().not_null())
                    .col(ColumnDef::new(TrustBundle::BundleUrl).text().not_null())
                    .col(
                        ColumnDef::new(TrustBundle::RefreshInterval)
                            .unsigned()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TrustBundle::Checksum).string().not_null())
                    .col(
                        ColumnDef::new(TrustBundle::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrustBundle::LastRefreshAttempt)
                            .datetime_millisecond_precision(manager),
                    )
                    .col(
                        ColumnDef::new(TrustBundle::LastSuccessfulRefresh)
                            .datetime_millisecond_precision(manager),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_TRUST_BUNDLE_NAME_INDEX)
                    .table(TrustBundle::Table)
                    .col(TrustBundle::BundleName)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum Domain {
    Table,
    Id,
    DomainName,
    PostmasterAddress,
    Status,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub enum TrustBundle {
    Table,
    Id,
    BundleName,
    BundleUrl,
    RefreshInterval,
    Checksum,
    CreatedDate,
    LastRefreshAttempt,
    LastSuccessfulRefresh,
}
