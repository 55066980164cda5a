//! PostgreSQL measurement backend.
//!
//! [`PostgresDatabase`] owns one session with the server. Index footprints come from
//! `pg_indexes_size`, execution times from the plain-text output of
//! `explain (analyze true, timing false)`.
//!
//! ```rust,ignore
//! use keybench_core::{Database, TableKind};
//! use keybench_storage_postgres::{PostgresConfig, PostgresDatabase};
//!
//! let database = PostgresDatabase::connect(&PostgresConfig::default()).await?;
//! let table = database.create_table(TableKind::Uuid).expect("postgres supports uuid keys");
//! table.create().await?;
//! table.seed(100_000).await?;
//!
//! let size = database.measure_indexes_size(table.name()).await?;
//! let time = database.measure_execution_time(&table.lookup_query().await?).await?;
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod result;
pub mod tables;

pub use config::{PostgresConfig, PostgresConfigBuilder};
pub use result::QueryResult;
pub use tables::{PostgresAutoIncrementTable, PostgresUuidTable};

use async_trait::async_trait;
use keybench_core::{ConnectionError, Database, MeasurementError, Memory, QueryError, Table, TableKind, TimePeriod};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error, info, warn};

use crate::error::{error_kind, ErrorKind};

/// A single PostgreSQL session.
///
/// The session is released when this value is dropped, or explicitly with
/// [`PostgresDatabase::close`].
pub struct PostgresDatabase {
    client: Client,
    connection: JoinHandle<()>,
    target: String,
}

impl PostgresDatabase {
    /// Opens the session. There is no retry: a failure here is meant to end the run.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, ConnectionError> {
        let target = config.target();
        let (client, connection) =
            tokio_postgres::connect(&config.connection_string(), NoTls).await.map_err(|err| ConnectionError::connect(&target, err))?;

        let task_target = target.clone();
        let connection = tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!("PostgresDatabase({}): connection error: {}", task_target, err);
            }
        });

        info!("PostgresDatabase({}): connected", target);
        Ok(Self { client, connection, target })
    }

    pub fn target(&self) -> &str { &self.target }

    /// Terminates the session and waits for the connection task to finish.
    pub async fn close(self) {
        let Self { client, connection, target } = self;
        drop(client);
        if let Err(err) = connection.await {
            warn!("PostgresDatabase({}).close: connection task failed: {}", target, err);
        }
        info!("PostgresDatabase({}): closed", target);
    }

    async fn simple_query(&self, query: &str) -> Result<QueryResult, tokio_postgres::Error> {
        debug!("PostgresDatabase({}).execute: {}", self.target, query);
        let messages = self.client.simple_query(query).await?;
        Ok(QueryResult::from_messages(messages))
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    type Rows = QueryResult;

    fn create_table(&self, kind: TableKind) -> Option<Box<dyn Table + '_>> {
        match kind {
            TableKind::AutoIncrement => Some(Box::new(PostgresAutoIncrementTable::new(self))),
            TableKind::Uuid => Some(Box::new(PostgresUuidTable::new(self))),
        }
    }

    async fn execute(&self, query: &str) -> Result<QueryResult, QueryError> {
        self.simple_query(query).await.map_err(|err| {
            debug!("PostgresDatabase({}).execute: Error: {}", self.target, err);
            QueryError::engine(query, err)
        })
    }

    async fn measure_indexes_size(&self, table: &str) -> Result<Memory, MeasurementError> {
        let query = format!("select pg_indexes_size('{table}'::regclass)");
        let result = match self.simple_query(&query).await {
            Ok(result) => result,
            Err(err) => {
                match error_kind(&err) {
                    ErrorKind::UndefinedTable { table: relation } => {
                        warn!("PostgresDatabase({}).measure_indexes_size: relation {} does not exist", self.target, relation)
                    }
                    ErrorKind::Unknown => warn!("PostgresDatabase({}).measure_indexes_size: {}", self.target, err),
                }
                return Err(MeasurementError::indexes_size(table).with_source(err));
            }
        };

        // zero is a real size, an absent or garbled scalar is not
        let bytes = result.scalar(0, 0).and_then(|bytes| bytes.trim().parse::<u64>().ok()).ok_or_else(|| {
            warn!("PostgresDatabase({}).measure_indexes_size: no size in {:?}", self.target, result.rows());
            MeasurementError::indexes_size(table)
        })?;

        debug!("PostgresDatabase({}).measure_indexes_size: {} = {} bytes", self.target, table, bytes);
        Ok(Memory::new(bytes))
    }

    async fn measure_execution_time(&self, query: &str) -> Result<TimePeriod, MeasurementError> {
        let explain = format!("explain (analyze true, timing false) {query}");
        let result = self.simple_query(&explain).await.map_err(|err| {
            warn!("PostgresDatabase({}).measure_execution_time: {}", self.target, err);
            MeasurementError::execution_time(query).with_source(err)
        })?;

        let milliseconds = explain::execution_time_millis(&result).ok_or_else(|| {
            warn!("PostgresDatabase({}).measure_execution_time: no execution time in plan: {:?}", self.target, result.rows());
            MeasurementError::execution_time(query)
        })?;

        debug!("PostgresDatabase({}).measure_execution_time: {} ms", self.target, milliseconds);
        Ok(TimePeriod::from_milliseconds(milliseconds))
    }
}
