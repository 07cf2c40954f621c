// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Parses a user-supplied date-time.
///
/// Accepts RFC 3339 (`2026-10-05T10:00:00Z`) and the friendlier
/// `2026-10-05 10:00[:00]` form, which is taken as UTC.
///
/// # Errors
///
/// Returns an error if the input matches none of the accepted forms.
pub fn parse_datetime(value: &str) -> Result<Timestamp, Box<dyn Error>> {
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = DateTime::strptime(format, value) {
            return Ok(dt.to_zoned(TimeZone::UTC)?.timestamp());
        }
    }

    Err(format!(
        "Unrecognized date-time '{value}', expected e.g. \"2026-10-05 10:00\" or RFC 3339"
    )
    .into())
}
