use crate::fixtures::{ColumnType, fetch_schema};

#[tokio::test]
async fn test_db_schema_trust_bundle() {
    let schema = fetch_schema().await;

    let trust_bundle = schema
        .table("trust_bundle")
        .columns(&[
            "id",
            "bundle_name",
            "bundle_url",
            "refresh_interval",
            "checksum",
            "created_date",
            "last_refresh_attempt",
            "last_successful_refresh",
        ])
        .index(
            "index-TrustBundle-BundleName-Unique",
            true,
            &["bundle_name"],
        );
    trust_bundle
        .column("id")
        .r#type(ColumnType::BigInt)
        .primary_key();
    trust_bundle
        .column("bundle_name")
        .r#type(ColumnType::String)
        .nullable(false);
    trust_bundle
        .column("bundle_url")
        .r#type(ColumnType::Text)
        .nullable(false);
    trust_bundle
        .column("refresh_interval")
        .r#type(ColumnType::Unsigned)
        .nullable(false);
    trust_bundle
        .column("checksum")
        .r#type(ColumnType::String)
        .nullable(false);
    trust_bundle
        .column("created_date")
        .r#type(ColumnType::TimestampMilliseconds)
        .nullable(false);
    trust_bundle
        .column("last_refresh_attempt")
        .r#type(ColumnType::TimestampMilliseconds)
        .nullable(true);
    trust_bundle
        .column("last_successful_refresh")
        .r#type(ColumnType::TimestampMilliseconds)
        .nullable(true);
}
