use async_trait::async_trait;

use crate::{
    error::{MeasurementError, QueryError},
    table::{Table, TableKind},
    units::{Memory, TimePeriod},
};

/// A single exclusive session with a database engine.
///
/// Operations are issued one at a time by the owner of the session; each call is
/// awaited to completion before the next one starts.
#[async_trait]
pub trait Database: Send + Sync {
    /// The engine's native result of a raw query.
    type Rows: Send;

    /// Constructs a fresh table of the given kind bound to this session, or `None`
    /// when the engine has no table for that kind. Does not touch the database.
    fn create_table(&self, kind: TableKind) -> Option<Box<dyn Table + '_>>;

    /// Same as [`Database::create_table`] for a textual kind identifier. Unknown
    /// identifiers yield `None`.
    fn table(&self, identifier: &str) -> Option<Box<dyn Table + '_>> { TableKind::parse(identifier).and_then(|kind| self.create_table(kind)) }

    /// Sends an already formatted query. No escaping or parameter binding is performed.
    async fn execute(&self, query: &str) -> Result<Self::Rows, QueryError>;

    /// Total on-disk size of every index attached to `table`.
    async fn measure_indexes_size(&self, table: &str) -> Result<Memory, MeasurementError>;

    /// Runs `query` under the engine's profiler and reports its execution time.
    async fn measure_execution_time(&self, query: &str) -> Result<TimePeriod, MeasurementError>;
}
