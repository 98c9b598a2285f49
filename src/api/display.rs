//! Display formatting for response fields.

use chrono::{DateTime, Utc};

/// Timestamp as an epoch-milliseconds string, the form timestamps take on
/// the wire.
pub fn millis(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Byte count as a human-readable size. Negative counts clamp to zero.
pub fn human_size(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = KB * 1024;
    const GB: i64 = MB * 1024;

    let bytes = bytes.max(0);
    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(millis(at), "1700000000123");
    }

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(2048), "2.00 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_human_size_negative_clamps() {
        assert_eq!(human_size(-1), "0 B");
    }
}
