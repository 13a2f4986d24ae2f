use std::sync::Arc;

use config_core::repository::DataRepository;
use config_core::repository::domain_repository::DomainRepository;
use config_core::repository::error::DataLayerError;
use config_core::repository::trust_bundle_domain_reltn_repository::TrustBundleDomainReltnRepository;
use config_core::repository::trust_bundle_repository::TrustBundleRepository;
use domain::DomainProvider;
use migration::runner::run_migrations;
use sea_orm::{ConnectOptions, DatabaseConnection};
use trust_bundle::TrustBundleProvider;
use trust_bundle_domain_reltn::TrustBundleDomainReltnProvider;

mod entity;
mod mapper;

pub mod domain;
pub mod trust_bundle;
pub mod trust_bundle_domain_reltn;

#[cfg(test)]
mod test_utilities;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    domain_repository: Arc<dyn DomainRepository>,
    trust_bundle_repository: Arc<dyn TrustBundleRepository>,
    trust_bundle_domain_reltn_repository: Arc<dyn TrustBundleDomainReltnRepository>,
}

impl DataLayer {
    /// Connects to `database_url` and brings the schema up to date
    pub async fn create(database_url: &str) -> Result<Self, DataLayerError> {
        let db = db_conn(database_url).await?;
        Self::build(db).await
    }

    pub async fn build(db: DatabaseConnection) -> Result<Self, DataLayerError> {
        run_migrations(&db)
            .await
            .map_err(|e| DataLayerError::Db(e.into()))?;

        let domain_repository = Arc::new(DomainProvider { db: db.clone() });
        let trust_bundle_repository = Arc::new(TrustBundleProvider { db: db.clone() });
        let trust_bundle_domain_reltn_repository = Arc::new(TrustBundleDomainReltnProvider {
            db: db.clone(),
            domain_repository: domain_repository.clone(),
            trust_bundle_repository: trust_bundle_repository.clone(),
        });

        Ok(Self {
            db,
            domain_repository,
            trust_bundle_repository,
            trust_bundle_domain_reltn_repository,
        })
    }
}

pub async fn db_conn(database_url: &str) -> Result<DatabaseConnection, DataLayerError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    tracing::debug!("Connecting to database");
    sea_orm::Database::connect(options)
        .await
        .map_err(|e| DataLayerError::Db(e.into()))
}

impl DataRepository for DataLayer {
    fn get_domain_repository(&self) -> Arc<dyn DomainRepository> {
        self.domain_repository.clone()
    }

    fn get_trust_bundle_repository(&self) -> Arc<dyn TrustBundleRepository> {
        self.trust_bundle_repository.clone()
    }

    fn get_trust_bundle_domain_reltn_repository(
        &self,
    ) -> Arc<dyn TrustBundleDomainReltnRepository> {
        self.trust_bundle_domain_reltn_repository.clone()
    }
}
