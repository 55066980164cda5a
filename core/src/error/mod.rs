//! Error taxonomy shared by every database implementation.
//!
//! Measurement failures never degrade into zero values: a missing size or timing is
//! reported as a [`MeasurementError`] naming the table or query involved.

use thiserror::Error;

/// Boxed engine error carried as the source of the variants below.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The session could not be established. Callers treat this as fatal.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to connect to {target}: {source}")]
    Connect { target: String, source: BoxError },
}

impl ConnectionError {
    pub fn connect(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ConnectionError::Connect { target: target.into(), source: source.into() }
    }
}

/// The engine rejected a raw query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query failed: {source} (query: {query})")]
    Engine { query: String, source: BoxError },
}

impl QueryError {
    pub fn engine(query: impl Into<String>, source: impl Into<BoxError>) -> Self {
        QueryError::Engine { query: query.into(), source: source.into() }
    }

    pub fn query(&self) -> &str {
        match self {
            QueryError::Engine { query, .. } => query,
        }
    }
}

#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("failed to get indexes size of \"{table}\"")]
    IndexesSize {
        table: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("failed to get execution time of query: {query}")]
    ExecutionTime {
        query: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl MeasurementError {
    pub fn indexes_size(table: impl Into<String>) -> Self { MeasurementError::IndexesSize { table: table.into(), source: None } }

    pub fn execution_time(query: impl Into<String>) -> Self { MeasurementError::ExecutionTime { query: query.into(), source: None } }

    /// Attach the underlying cause, replacing any previous one.
    pub fn with_source(self, cause: impl Into<BoxError>) -> Self {
        match self {
            MeasurementError::IndexesSize { table, .. } => MeasurementError::IndexesSize { table, source: Some(cause.into()) },
            MeasurementError::ExecutionTime { query, .. } => MeasurementError::ExecutionTime { query, source: Some(cause.into()) },
        }
    }
}

/// Failures raised by table collaborators while preparing a benchmark table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("table \"{0}\" has no rows")]
    Empty(String),

    #[error("invalid table name {0:?}: expected lower-case letters, digits and underscores")]
    InvalidName(String),

    #[error("unexpected value {value:?} in table \"{table}\"")]
    Malformed { table: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table kind: {0}")]
pub struct UnknownTableKind(pub String);
