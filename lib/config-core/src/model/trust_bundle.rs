use shared_types::TrustBundleId;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrustBundle {
    pub id: TrustBundleId,
    pub bundle_name: String,
    pub bundle_url: String,
    /// Hours between refreshes, `0` disables refreshing
    pub refresh_interval: u32,
    pub checksum: String,
    pub created_date: OffsetDateTime,
    pub last_refresh_attempt: Option<OffsetDateTime>,
    pub last_successful_refresh: Option<OffsetDateTime>,
}
