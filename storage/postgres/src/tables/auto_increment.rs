use async_trait::async_trait;
use keybench_core::{Table, TableError, TableKind};

use crate::PostgresDatabase;

pub const DEFAULT_NAME: &str = "auto_increment_benchmark";

const COLUMNS: &str = "id bigint generated always as identity primary key, payload text not null";

/// Surrogate `bigint` identity key.
pub struct PostgresAutoIncrementTable<'a> {
    database: &'a PostgresDatabase,
    name: String,
}

impl<'a> PostgresAutoIncrementTable<'a> {
    pub fn new(database: &'a PostgresDatabase) -> Self { Self { database, name: DEFAULT_NAME.to_owned() } }

    /// Fails with [`TableError::InvalidName`] unless [`super::sane_name`] accepts the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, TableError> {
        self.name = super::validate_name(name.into())?;
        Ok(self)
    }
}

#[async_trait]
impl<'a> Table for PostgresAutoIncrementTable<'a> {
    fn kind(&self) -> TableKind { TableKind::AutoIncrement }

    fn name(&self) -> &str { &self.name }

    async fn create(&self) -> Result<(), TableError> { super::recreate(self.database, &self.name, COLUMNS).await }

    async fn seed(&self, rows: u64) -> Result<(), TableError> { super::seed(self.database, &self.name, None, rows).await }

    async fn drop_table(&self) -> Result<(), TableError> { super::drop_table(self.database, &self.name).await }

    async fn lookup_query(&self) -> Result<String, TableError> {
        let key = super::middle_key(self.database, &self.name).await?;
        let id: i64 = key.parse().map_err(|_| TableError::Malformed { table: self.name.clone(), value: key.clone() })?;
        Ok(format!("select id, payload from {} where id = {}", self.name, id))
    }
}
