// =============================================================================
// TTM Painting Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Format Utilities
// =============================================================================

use chrono::Datelike;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the current URL pathname.
pub fn get_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

/// Format a file size in bytes to human-readable string.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Current calendar year in the visitor's timezone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
