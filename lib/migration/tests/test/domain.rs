use crate::fixtures::{ColumnType, fetch_schema};

#[tokio::test]
async fn test_db_schema_domain() {
    let schema = fetch_schema().await;

    let domain = schema
        .table("domain")
        .columns(&[
            "id",
            "domain_name",
            "postmaster_address",
            "status",
            "created_date",
            "last_modified",
        ])
        .index("index-Domain-DomainName-Unique", true, &["domain_name"]);
    domain
        .column("id")
        .r#type(ColumnType::BigInt)
        .primary_key();
    domain
        .column("domain_name")
        .r#type(ColumnType::String)
        .nullable(false);
    domain
        .column("postmaster_address")
        .r#type(ColumnType::String)
        .nullable(true);
    domain
        .column("status")
        .r#type(ColumnType::String)
        .nullable(false);
    domain
        .column("created_date")
        .r#type(ColumnType::TimestampMilliseconds)
        .nullable(false);
    domain
        .column("last_modified")
        .r#type(ColumnType::TimestampMilliseconds)
        .nullable(false);
}
