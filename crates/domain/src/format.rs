// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting for punch timestamps and decimal hours.
//!
//! Feed timestamps are ISO-8601 strings; operators read them as short
//! day/month hour:minute pairs in the portal's display timezone.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

/// Placeholder shown for absent values.
const EMPTY: &str = "-";

/// Formats an ISO-8601 timestamp as `dd/mm HH:MM` in the given timezone.
///
/// Absent or unparseable values render as `-`; formatting never fails.
#[must_use]
pub fn format_datetime(value: Option<&str>, tz: Tz) -> String {
    let Some(raw) = value else {
        return EMPTY.to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&tz).format("%d/%m %H:%M").to_string();
    }

    // Some feed columns omit the offset; treat those as already local.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return naive.format("%d/%m %H:%M").to_string();
    }

    EMPTY.to_string()
}

/// Formats a start/end timestamp pair with a divider.
#[must_use]
pub fn format_pair(start: Option<&str>, end: Option<&str>, divider: &str, tz: Tz) -> String {
    format!(
        "{}{divider}{}",
        format_datetime(start, tz),
        format_datetime(end, tz)
    )
}

/// Formats decimal hours as `H:MM`.
///
/// `None` renders as `-`. Minutes are truncated, not rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_hours_to_hhmm(value: Option<f64>) -> String {
    let Some(hours) = value else {
        return EMPTY.to_string();
    };

    let total_minutes: i64 = (hours * 60.0).floor() as i64;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}
