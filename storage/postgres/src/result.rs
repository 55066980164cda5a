use tokio_postgres::SimpleQueryMessage;

/// Text rows returned by the simple query protocol, in the order the engine sent them.
///
/// When a query string holds several statements, the rows of all of them are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    rows_affected: u64,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let rows_affected = rows.len() as u64;
        Self { columns, rows, rows_affected }
    }

    pub(crate) fn from_messages(messages: Vec<SimpleQueryMessage>) -> Self {
        let mut result = QueryResult::default();
        for message in messages {
            match message {
                SimpleQueryMessage::Row(row) => {
                    if result.columns.is_empty() {
                        result.columns = row.columns().iter().map(|column| column.name().to_owned()).collect();
                    }
                    result.rows.push((0..row.len()).map(|index| row.get(index).map(str::to_owned)).collect());
                }
                SimpleQueryMessage::CommandComplete(count) => result.rows_affected += count,
                _ => {}
            }
        }
        result
    }

    /// Column names of the first returned row.
    pub fn columns(&self) -> &[String] { &self.columns }

    pub fn rows(&self) -> &[Vec<Option<String>>] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Sum of the row counts reported on command completion.
    pub fn rows_affected(&self) -> u64 { self.rows_affected }

    /// `None` for a missing row or column and for SQL `NULL`.
    pub fn scalar(&self, row: usize, column: usize) -> Option<&str> { self.rows.get(row)?.get(column)?.as_deref() }

    /// Every non-null value of one column.
    pub fn column(&self, column: usize) -> Vec<&str> { self.rows.iter().filter_map(|row| row.get(column)?.as_deref()).collect() }
}
