//! Time related utils.
//!
//! All helpers work in UTC. The credential scope of a TC3 signature is a
//! calendar date, so using the local time zone here would sign requests for
//! the wrong day around midnight.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Build a DateTime from unix seconds.
pub fn from_timestamp(secs: i64) -> Result<DateTime> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        Error::request_invalid(format!("timestamp {secs} is out of the supported range"))
    })
}

/// Format time into date: `2022-03-13`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y-%m-%d").to_string()
}
