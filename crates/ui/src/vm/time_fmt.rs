use chrono::{DateTime, Utc};

#[must_use]
pub fn format_time_of_day(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S UTC").to_string()
}
