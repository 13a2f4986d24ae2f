use migration::runner::run_migrations;
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult, Statement};
use similar_asserts::assert_eq;

use super::{Column, ColumnType, Schema, Table};

pub(super) async fn get_sqlite_schema(url: &str) -> Box<dyn Schema> {
    let db = sea_orm::Database::connect(url).await.unwrap();
    run_migrations(&db).await.unwrap();

    let mut tables = vec![];
    for row in query(&db, "SELECT name FROM sqlite_master WHERE type = 'table'").await {
        let name: String = row.try_get("", "name").unwrap();
        tables.push(load_table(&db, name).await);
    }

    Box::new(SqliteSchema { tables })
}

async fn query(db: &DatabaseConnection, sql: &str) -> Vec<QueryResult> {
    db.query_all(Statement::from_string(db.get_database_backend(), sql))
        .await
        .unwrap()
}

async fn load_table(db: &DatabaseConnection, name: String) -> TableDef {
    let columns = query(db, &format!("PRAGMA table_info('{name}')"))
        .await
        .into_iter()
        .map(|row| ColumnDef {
            name: row.try_get("", "name").unwrap(),
            r#type: row.try_get("", "type").unwrap(),
            not_null: row.try_get::<i32>("", "notnull").unwrap() != 0,
            primary_key: row.try_get::<i32>("", "pk").unwrap() != 0,
        })
        .collect();

    let foreign_keys = query(db, &format!("PRAGMA foreign_key_list('{name}')"))
        .await
        .into_iter()
        .map(|row| ForeignKeyDef {
            from: row.try_get("", "from").unwrap(),
            table: row.try_get("", "table").unwrap(),
            to: row.try_get("", "to").unwrap(),
            on_delete: row.try_get("", "on_delete").unwrap(),
        })
        .collect();

    let mut indexes = vec![];
    for row in query(db, &format!("PRAGMA index_list('{name}')")).await {
        let index_name: String = row.try_get("", "name").unwrap();
        let unique = row.try_get::<i32>("", "unique").unwrap() != 0;
        let columns = query(db, &format!("PRAGMA index_info('{index_name}')"))
            .await
            .into_iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();

        indexes.push(IndexDef {
            name: index_name,
            unique,
            columns,
        });
    }

    TableDef {
        name,
        columns,
        foreign_keys,
        indexes,
    }
}

#[derive(Debug)]
struct SqliteSchema {
    tables: Vec<TableDef>,
}

#[derive(Clone, Debug)]
struct TableDef {
    name: String,
    columns: Vec<ColumnDef>,
    foreign_keys: Vec<ForeignKeyDef>,
    indexes: Vec<IndexDef>,
}

#[derive(Clone, Debug)]
struct ColumnDef {
    name: String,
    r#type: String,
    not_null: bool,
    primary_key: bool,
}

#[derive(Clone, Debug)]
struct ForeignKeyDef {
    from: String,
    table: String,
    to: String,
    on_delete: String,
}

#[derive(Clone, Debug)]
struct IndexDef {
    name: String,
    unique: bool,
    columns: Vec<String>,
}

impl Schema for SqliteSchema {
    fn table(&self, name: &str) -> Box<dyn Table> {
        let table = self.tables.iter().find(|t| t.name == name);
        assert!(table.is_some(), "Table {name} does not exist");
        Box::new(table.unwrap().to_owned())
    }
}

impl Table for TableDef {
    fn column(&self, name: &str) -> Box<dyn Column> {
        let column = self.columns.iter().find(|column| column.name == name);
        assert!(
            column.is_some(),
            "Column {name} does not exist in table {}",
            self.name
        );
        Box::new(ColumnWrapper {
            info: column.unwrap().to_owned(),
            table: self.to_owned(),
        })
    }

    fn columns(&self, columns: &[&str]) -> Box<dyn Table> {
        for column in columns {
            self.column(column);
        }
        for column in &self.columns {
            assert!(
                columns.contains(&column.name.as_str()),
                "Unknown column {} exists in table {}",
                column.name,
                self.name
            );
        }
        Box::new(self.clone())
    }

    fn index(&self, name: &str, unique: bool, columns: &[&str]) -> Box<dyn Table> {
        let index = self.indexes.iter().find(|index| index.name == name);
        assert!(
            index.is_some(),
            "No index with name {name} exists in table {}",
            self.name
        );
        let index = index.unwrap();

        assert_eq!(
            index.unique, unique,
            "Index name {name} in table {}: wrong uniqueness",
            self.name
        );
        let expected: Vec<String> = columns.iter().map(ToString::to_string).collect();
        assert_eq!(
            index.columns, expected,
            "Index name {name} in table {}: wrong column/order",
            self.name
        );

        Box::new(self.clone())
    }
}

#[derive(Debug, Clone)]
struct ColumnWrapper {
    info: ColumnDef,
    table: TableDef,
}

impl Column for ColumnWrapper {
    fn r#type(&self, r#type: ColumnType) -> Box<dyn Column> {
        // sqlite keeps declared types, only the affinity matters
        let declared = self.info.r#type.to_lowercase();
        let matches = match r#type {
            ColumnType::BigInt | ColumnType::Unsigned => declared.contains("int"),
            ColumnType::String => declared.contains("char") || declared.contains("text"),
            ColumnType::Text => declared.contains("text"),
            ColumnType::TimestampMilliseconds => declared == "datetime",
        };
        assert!(
            matches,
            "Column {} in table {}: invalid type {declared}, expected {type:?}",
            self.info.name, self.table.name
        );
        Box::new(self.clone())
    }

    fn nullable(&self, nullable: bool) -> Box<dyn Column> {
        assert_eq!(
            !self.info.not_null,
            nullable,
            "Column {} in table {}: invalid nullability",
            self.info.name,
            self.table.name
        );
        Box::new(self.clone())
    }

    fn primary_key(&self) -> Box<dyn Column> {
        assert!(
            self.info.primary_key,
            "Column {} in table {} not a primary key",
            self.info.name, self.table.name
        );
        Box::new(self.clone())
    }

    fn foreign_key(&self, into_table: &str, column: &str, on_delete: &str) -> Box<dyn Column> {
        let foreign_key = self
            .table
            .foreign_keys
            .iter()
            .find(|foreign_key| foreign_key.from == self.info.name);
        assert!(
            foreign_key.is_some(),
            "No foreign key for column {} in table {}",
            self.info.name,
            self.table.name
        );
        let foreign_key = foreign_key.unwrap();
        assert_eq!(
            foreign_key.table, into_table,
            "Column {} in table {} not a foreign key referencing table {into_table}",
            self.info.name, self.table.name
        );
        assert_eq!(
            foreign_key.to, column,
            "Column {} in table {} not a foreign key referencing column {column} in {into_table}",
            self.info.name, self.table.name
        );
        assert_eq!(
            foreign_key.on_delete, on_delete,
            "Column {} in table {}: invalid on delete action",
            self.info.name, self.table.name
        );
        Box::new(self.clone())
    }
}
