//! Common utilities shared across the OpenSky tools.
//!
//! Result construction and the number formatting used by every report.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result: a single `Error: <message>` text block.
pub fn error_result(error: &impl Display) -> CallToolResult {
    let message = format!("Error: {}", error);
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Round to a whole number and group thousands with commas (`10,500`).
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" is not a useful reading
    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}

/// Group thousands of a count.
pub fn format_count(count: usize) -> String {
    group_thousands(count as f64)
}
