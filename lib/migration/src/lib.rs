use sea_orm_migration::migrator::MigratorTrait;
use sea_orm_migration::prelude::*;

pub(crate) mod datatype;
pub mod runner;

mod m20240110_000001_initial;
mod m20240112_083415_add_trust_bundle_domain_reltn;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240110_000001_initial::Migration),
            Box::new(m20240112_083415_add_trust_bundle_domain_reltn::Migration),
        ]
    }
}
