use std::{fmt, str::FromStr};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, UnknownTableKind};

/// The primary key strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// Engine-managed monotonically increasing integer key.
    AutoIncrement,
    /// Random 128-bit key, independent of insertion order.
    Uuid,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::AutoIncrement, TableKind::Uuid];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::AutoIncrement => "auto-increment",
            TableKind::Uuid => "uuid",
        }
    }

    /// Returns `None` for identifiers outside the known set; callers decide how to react.
    pub fn parse(identifier: &str) -> Option<TableKind> {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "auto-increment" | "autoincrement" | "auto_increment" | "serial" => Some(TableKind::AutoIncrement),
            "uuid" => Some(TableKind::Uuid),
            _ => None,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for TableKind {
    type Err = UnknownTableKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> { TableKind::parse(s).ok_or_else(|| UnknownTableKind(s.to_owned())) }
}

/// A benchmark table bound to a database connection it does not own.
#[async_trait]
pub trait Table: Send + Sync {
    fn kind(&self) -> TableKind;

    fn name(&self) -> &str;

    /// Drops any previous table with the same name and creates it empty.
    async fn create(&self) -> Result<(), TableError>;

    /// Inserts `rows` generated rows and refreshes planner statistics.
    async fn seed(&self, rows: u64) -> Result<(), TableError>;

    async fn drop_table(&self) -> Result<(), TableError>;

    /// A point lookup by an existing key, suitable for execution time measurement.
    async fn lookup_query(&self) -> Result<String, TableError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        for kind in TableKind::ALL {
            assert_eq!(TableKind::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string().parse::<TableKind>(), Ok(kind));
        }
        assert_eq!(TableKind::parse("Auto_Increment"), Some(TableKind::AutoIncrement));
        assert_eq!(TableKind::parse(" UUID "), Some(TableKind::Uuid));
        assert_eq!(TableKind::parse("serial"), Some(TableKind::AutoIncrement));
    }

    #[test]
    fn test_parse_unknown_kind_is_absent() {
        assert_eq!(TableKind::parse("ulid"), None);
        assert_eq!(TableKind::parse(""), None);
        assert_eq!("snowflake".parse::<TableKind>(), Err(UnknownTableKind("snowflake".to_string())));
    }
}
