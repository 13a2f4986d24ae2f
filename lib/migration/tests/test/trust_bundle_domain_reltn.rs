use crate::fixtures::{ColumnType, fetch_schema};

#[tokio::test]
async fn test_db_schema_trust_bundle_domain_reltn() {
    let schema = fetch_schema().await;

    let reltn = schema
        .table("trustbundledomainreltn")
        .columns(&["id", "trust_bundle_id", "domain_id"])
        .index(
            "index-TrustBundleDomainReltn-DomainId",
            false,
            &["domain_id"],
        )
        .index(
            "index-TrustBundleDomainReltn-TrustBundleId",
            false,
            &["trust_bundle_id"],
        );
    reltn
        .column("id")
        .r#type(ColumnType::BigInt)
        .primary_key();
    reltn
        .column("trust_bundle_id")
        .r#type(ColumnType::BigInt)
        .nullable(false)
        .foreign_key("trust_bundle", "id", "CASCADE");
    reltn
        .column("domain_id")
        .r#type(ColumnType::BigInt)
        .nullable(false)
        .foreign_key("domain", "id", "CASCADE");
}
