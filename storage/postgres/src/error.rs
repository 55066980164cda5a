use tokio_postgres::error::SqlState;

// rust-postgres doesn't expose the failing relation, so it is recovered from the message
// TODO: switch to structured fields when https://github.com/sfackler/rust-postgres/pull/1185
//       gets merged
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    UndefinedTable { table: String },
    Unknown,
}

pub fn error_kind(err: &tokio_postgres::Error) -> ErrorKind {
    let Some(db_error) = err.as_db_error() else {
        return ErrorKind::Unknown;
    };

    match db_error.code().clone() {
        SqlState::UNDEFINED_TABLE => match first_quoted(db_error.message()) {
            // relation "album" does not exist
            Some(table) => ErrorKind::UndefinedTable { table: table.to_owned() },
            None => ErrorKind::Unknown,
        },
        _ => ErrorKind::Unknown,
    }
}

fn first_quoted(message: &str) -> Option<&str> {
    let start = message.find('"')? + 1;
    let end = start + message[start..].find('"')?;
    Some(&message[start..end])
}
