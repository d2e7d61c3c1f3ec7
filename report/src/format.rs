//! Text helpers shared by the report renderers.

use std::fmt::{
    Display,
    Write as _,
};

/// Spaces per indentation level of the summary block.
pub const INDENT_SIZE: usize = 4;

const SIZE_UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Format a byte count as human readable size.
///
/// A unit is kept until the value exceeds five of the next unit, so `5120` is
/// still `"5120B"` while `5121` becomes `"5.00KB"`. Negative counts are printed
/// as plain bytes.
pub fn format_size(bytes: i64) -> String {
    let mut value = bytes as f64;
    if value <= 1024.0 * 5.0 {
        return format!("{bytes}B");
    }
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        value /= 1024.0;
        if value <= 1024.0 * 5.0 {
            return format!("{value:.2}{unit}");
        }
    }
    value /= 1024.0;
    format!("{value:.2}{}", SIZE_UNITS[SIZE_UNITS.len() - 1])
}

/// Appends `text` as one line indented by `depth` levels.
pub fn push_indented(out: &mut String, depth: usize, text: impl Display) {
    let _ = writeln!(out, "{:width$}{text}", "", width = depth * INDENT_SIZE);
}
