//! Engine-agnostic building blocks for comparing primary key strategies.
//!
//! A [`Database`] owns one session with an engine. It hands out [`Table`]s of a given
//! [`TableKind`] and measures index footprints ([`Memory`]) and query latencies
//! ([`TimePeriod`]) on behalf of the benchmark driver.

pub mod database;
pub mod error;
pub mod table;
pub mod units;

pub use database::Database;
pub use error::{ConnectionError, MeasurementError, QueryError, TableError, UnknownTableKind};
pub use table::{Table, TableKind};
pub use units::{Memory, TimePeriod};
