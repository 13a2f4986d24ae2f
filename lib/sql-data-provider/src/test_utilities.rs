use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{DomainId, TrustBundleDomainReltnId, TrustBundleId};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::domain::DomainStatus;
use crate::entity::{domain, trust_bundle, trust_bundle_domain_reltn};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    let db = db_conn("sqlite::memory:").await.unwrap();
    DataLayer::build(db).await.unwrap()
}

pub async fn insert_domain_to_database(
    database: &DatabaseConnection,
    domain_name: &str,
) -> Result<DomainId, DbErr> {
    let domain = domain::ActiveModel {
        domain_name: Set(domain_name.to_owned()),
        postmaster_address: Set(Some(format!("postmaster@{domain_name}"))),
        status: Set(DomainStatus::Enabled),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        ..Default::default()
    }
    .insert(database)
    .await?;

    Ok(domain.id)
}

pub async fn insert_trust_bundle_to_database(
    database: &DatabaseConnection,
    bundle_name: &str,
) -> Result<TrustBundleId, DbErr> {
    let trust_bundle = trust_bundle::ActiveModel {
        bundle_name: Set(bundle_name.to_owned()),
        bundle_url: Set(format!("https://bundles.example.com/{bundle_name}.p7b")),
        refresh_interval: Set(24),
        checksum: Set("".to_owned()),
        created_date: Set(get_dummy_date()),
        last_refresh_attempt: Set(None),
        last_successful_refresh: Set(None),
        ..Default::default()
    }
    .insert(database)
    .await?;

    Ok(trust_bundle.id)
}

pub async fn insert_trust_bundle_domain_reltn_to_database(
    database: &DatabaseConnection,
    domain_id: DomainId,
    trust_bundle_id: TrustBundleId,
) -> Result<TrustBundleDomainReltnId, DbErr> {
    let reltn = trust_bundle_domain_reltn::ActiveModel {
        domain_id: Set(domain_id),
        trust_bundle_id: Set(trust_bundle_id),
        ..Default::default()
    }
    .insert(database)
    .await?;

    Ok(reltn.id)
}
