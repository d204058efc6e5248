//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Trim an ISO-8601 timestamp down to its date part for list views.
/// Returns the input unchanged when it carries no time component.
pub fn short_date(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

/// One decimal place, the precision used for averaged AI scores.
pub fn score(value: f64) -> String {
    format!("{value:.1}")
}
