//! Extraction of timings from the plain-text `EXPLAIN ANALYZE` dialect.
//!
//! PostgreSQL ends every analyzed plan with a line such as `Execution Time: 5.234 ms`.
//! This is the only place that depends on that phrase.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::QueryResult;

static EXECUTION_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Execution Time: ([0-9.]+)").unwrap());

/// Returns the milliseconds reported by the first `Execution Time: <number>` marker.
///
/// The number is the leading decimal of the digit/dot run that follows the marker
/// (`1.2` out of `1.2.3`). A run without any digit counts as no marker.
pub fn parse_execution_time_millis(text: &str) -> Option<f64> {
    let token = EXECUTION_TIME.captures(text)?.get(1)?.as_str();
    leading_decimal(token)?.parse().ok()
}

/// Joins the `QUERY PLAN` rows of an explain result, without separators, and parses them.
pub fn execution_time_millis(plan: &QueryResult) -> Option<f64> { parse_execution_time_millis(&plan.column(0).concat()) }

fn leading_decimal(token: &str) -> Option<&str> {
    let mut seen_dot = false;
    let mut end = 0;
    for (index, char) in token.char_indices() {
        match char {
            '.' if seen_dot => break,
            '.' => seen_dot = true,
            _ => {}
        }
        end = index + char.len_utf8();
    }

    let decimal = &token[..end];
    if decimal.bytes().any(|b| b.is_ascii_digit()) {
        Some(decimal)
    } else {
        None
    }
}
