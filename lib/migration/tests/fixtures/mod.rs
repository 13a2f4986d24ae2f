use std::fmt::Debug;

mod sqlite;

pub(super) async fn fetch_schema() -> Box<dyn Schema> {
    sqlite::get_sqlite_schema("sqlite::memory:").await
}

pub(super) trait Schema: Debug + Send + Sync {
    fn table(&self, name: &str) -> Box<dyn Table>;
}

pub(super) trait Table: Debug {
    fn column(&self, name: &str) -> Box<dyn Column>;

    fn columns(&self, columns: &[&str]) -> Box<dyn Table>;
    fn index(&self, name: &str, unique: bool, columns: &[&str]) -> Box<dyn Table>;
}

pub(super) trait Column: Debug {
    fn r#type(&self, r#type: ColumnType) -> Box<dyn Column>;
    fn nullable(&self, nullable: bool) -> Box<dyn Column>;
    fn primary_key(&self) -> Box<dyn Column>;
    fn foreign_key(&self, into_table: &str, column: &str, on_delete: &str) -> Box<dyn Column>;
}

#[derive(Debug)]
pub(super) enum ColumnType {
    String,
    Text,
    TimestampMilliseconds,
    Unsigned,
    BigInt,
}
