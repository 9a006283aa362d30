//! Due date parsing and display helpers
//!
//! Due dates cross the persistence boundary as ISO-8601 strings. The board
//! accepts either a bare date (`2024-06-05`) or an RFC 3339 date-time
//! (`2024-06-05T00:00:00.000Z`), which are read as the same calendar date.
//! A value that cannot be read is treated as "no due date" rather than
//! failing the record that carries it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

/// Parse an ISO-8601 date or date-time string into a calendar date.
///
/// Date-time input is converted to UTC first, so `2024-06-05` and
/// `2024-06-05T00:00:00.000Z` name the same date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc).date_naive());
    }
    Err(Error::MalformedDate(value.to_string()))
}

/// Human label for a due date: "Today", "Tomorrow", or e.g. "Jun 5".
pub fn format_due_date(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        "Today".to_string()
    } else if Some(due) == today.succ_opt() {
        "Tomorrow".to_string()
    } else {
        due.format("%b %-d").to_string()
    }
}

/// Whether a due date has passed. A task due today is not overdue.
pub fn is_overdue(due: NaiveDate, today: NaiveDate) -> bool {
    due < today
}

/// Serde adapter for optional due date fields.
///
/// Writing emits the date-only form. Reading is lenient: empty and
/// malformed strings deserialize as `None`.
pub mod serde_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| super::parse_due_date(&s).ok()))
    }
}
