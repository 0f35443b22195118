// src/domain/format.rs

use chrono::DateTime;

/// "Mar 4, 2025" for list columns.
pub fn format_date(unix: i64) -> String {
    match DateTime::from_timestamp(unix, 0) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "-".to_string(),
    }
}

/// "Mar 4, 2025 09:30" for detail views where the time of day matters.
pub fn format_datetime(unix: i64) -> String {
    match DateTime::from_timestamp(unix, 0) {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}
