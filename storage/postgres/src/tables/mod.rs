//! Benchmark tables, one per primary key strategy.
//!
//! Both tables carry the same `text` payload so that index footprints differ only by
//! the key column.

mod auto_increment;
mod uuid;

pub use auto_increment::PostgresAutoIncrementTable;
pub use self::uuid::PostgresUuidTable;

use keybench_core::{Database, TableError};
use tracing::info;

use crate::PostgresDatabase;

/// Table names are spliced into statements unquoted, including the `regclass` literal of
/// the index size measurement, so only names that PostgreSQL leaves untouched are accepted.
pub fn sane_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return false,
    }

    // identifiers longer than NAMEDATALEN - 1 bytes are truncated by the server
    name.len() <= 63 && chars.all(|char| char.is_ascii_lowercase() || char.is_ascii_digit() || char == '_')
}

pub(crate) fn validate_name(name: String) -> Result<String, TableError> {
    if sane_name(&name) {
        Ok(name)
    } else {
        Err(TableError::InvalidName(name))
    }
}

pub(crate) async fn recreate(database: &PostgresDatabase, table: &str, columns: &str) -> Result<(), TableError> {
    info!("PostgresDatabase({}): creating table {}", database.target(), table);
    database.execute(&format!("drop table if exists {table}; create table {table} ({columns})")).await?;
    Ok(())
}

pub(crate) async fn drop_table(database: &PostgresDatabase, table: &str) -> Result<(), TableError> {
    info!("PostgresDatabase({}): dropping table {}", database.target(), table);
    database.execute(&format!("drop table if exists {table}")).await?;
    Ok(())
}

/// Inserts generated rows; `key` is the select expression for the key column, if any.
pub(crate) async fn seed(database: &PostgresDatabase, table: &str, key: Option<&str>, rows: u64) -> Result<(), TableError> {
    let (columns, values) = match key {
        Some(key) => ("id, payload".to_owned(), format!("{key}, md5(i::text)")),
        None => ("payload".to_owned(), "md5(i::text)".to_owned()),
    };

    let result = database
        .execute(&format!("insert into {table} ({columns}) select {values} from generate_series(1, {rows}) as i; analyze {table}"))
        .await?;
    info!("PostgresDatabase({}): seeded {} with {} rows", database.target(), table, result.rows_affected());
    Ok(())
}

/// The key in the middle of the key order, so lookups don't favour either end of the index.
pub(crate) async fn middle_key(database: &PostgresDatabase, table: &str) -> Result<String, TableError> {
    let result =
        database.execute(&format!("select id::text from {table} order by id limit 1 offset (select count(*) / 2 from {table})")).await?;

    result.scalar(0, 0).map(str::to_owned).ok_or_else(|| TableError::Empty(table.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sane_name() {
        assert!(sane_name(super::auto_increment::DEFAULT_NAME));
        assert!(sane_name(super::uuid::DEFAULT_NAME));
        assert!(sane_name("_bench_2"));
        assert!(sane_name(&"a".repeat(63)));

        assert!(!sane_name(""));
        assert!(!sane_name("UuidBench"));
        assert!(!sane_name("2fast"));
        assert!(!sane_name("it's"));
        assert!(!sane_name("odd\"name"));
        assert!(!sane_name("public.bench"));
        assert!(!sane_name("bench table"));
        assert!(!sane_name(&"a".repeat(64)));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("uuid_bench_2".to_owned()).unwrap(), "uuid_bench_2");
        assert!(matches!(validate_name("UuidBench".to_owned()), Err(TableError::InvalidName(name)) if name == "UuidBench"));
    }
}
