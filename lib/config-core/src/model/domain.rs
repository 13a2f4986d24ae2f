use shared_types::DomainId;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain {
    pub id: DomainId,
    pub domain_name: String,
    pub postmaster_address: Option<String>,
    pub status: DomainStatus,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DomainStatus {
    #[default]
    New,
    Enabled,
    Disabled,
}
