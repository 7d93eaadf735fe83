//! Date header parsing: RFC 1123, RFC 850, and asctime formats.

use std::time::SystemTime;

use chrono::{DateTime, Datelike, Timelike, Utc};
use httpdate::parse_http_date;
use siplex_types::{ParseError, SipDateTime};

use crate::text::trim_lws;

/// Parses any RFC 2616 date string into a UTC calendar decomposition.
pub fn parse_date(value: &[u8]) -> Result<SipDateTime, ParseError> {
    let trimmed = trim_lws(value);
    if trimmed.is_empty() {
        return Err(ParseError::EmptyDate);
    }
    let text = std::str::from_utf8(trimmed).map_err(|_| ParseError::InvalidDate)?;
    let time = parse_http_date(text).map_err(|_| ParseError::InvalidDate)?;
    Ok(explode(time))
}

/// Decomposes a timestamp into UTC calendar fields.
fn explode(time: SystemTime) -> SipDateTime {
    let utc: DateTime<Utc> = time.into();
    let usec = utc.timestamp_subsec_micros();
    SipDateTime {
        year: utc.year(),
        month: utc.month() as u8,
        day: utc.day() as u8,
        hour: utc.hour() as u8,
        minute: utc.minute() as u8,
        second: utc.second() as u8,
        // The precision digit count rides along as a display hint.
        microsecond: if usec == 0 { (0, 0) } else { (usec, 5) },
        utc_offset: 0,
        std_offset: 0,
    }
}
