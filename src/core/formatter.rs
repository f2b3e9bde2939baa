//! Message and display-line formatting for the legacy surface

use super::log_level::LogLevel;
use std::fmt::{Display, Write};

/// Decorative glyph between the timestamp and the level label.
pub const MARKER: &str = "◉";

/// Join the display form of each item with `separator`.
///
/// # Examples
///
/// ```
/// use pretty_logger::core::formatter::join_items;
///
/// assert_eq!(join_items(&[&"2", &3], " ❎ "), "2 ❎ 3");
/// assert_eq!(join_items(&[], ","), "");
/// ```
pub fn join_items(items: &[&dyn Display], separator: &str) -> String {
    let mut message = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            message.push_str(separator);
        }
        // Writing into a String cannot fail.
        let _ = write!(message, "{}", item);
    }
    message
}

/// Build `"<timestamp> ◉ <label> <message> [<basename>:L<line>]"`.
pub fn render_line(
    level: LogLevel,
    message: &str,
    timestamp: &str,
    source_file: &str,
    line: u32,
) -> String {
    format!(
        "{} {} {} {} [{}:L{}]",
        timestamp,
        MARKER,
        level.label(),
        message,
        basename(source_file),
        line
    )
}

/// Final component of a path, accepting both `/` and `\` separators.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
