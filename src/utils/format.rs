//! Formatting utilities for display values.

/// Units used by [`format_file_size`], each 1024 times the previous.
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display (e.g. "0 Bytes", "1.5 KB", "1 MB").
///
/// Uses base-1024 units, at most two decimals, trailing zeros trimmed.
/// Sizes beyond the largest unit stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    format!("{} {}", trim_decimals(&fixed), SIZE_UNITS[unit])
}

/// Strip trailing zeros (and a dangling point) from a fixed-point string.
fn trim_decimals(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}
