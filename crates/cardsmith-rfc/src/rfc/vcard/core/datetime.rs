//! vCard date values (RFC 6350 §4.3) and ISO 8601 input normalization.
//!
//! Generated records carry either a full calendar date or a recurring
//! month-day (the year-less `--MM-DD` form only vCard 4.0 allows).

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::error::{RfcError, RfcResult};

/// A vCard date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VCardDate {
    /// Full date (YYYY-MM-DD).
    Full(NaiveDate),
    /// Month and day, no year (--MM-DD).
    MonthDay { month: u32, day: u32 },
}

impl VCardDate {
    /// Creates a full date.
    #[must_use]
    pub fn full(date: NaiveDate) -> Self {
        Self::Full(date)
    }

    /// Creates a month-day date (anniversary pattern).
    #[must_use]
    pub fn month_day(month: u32, day: u32) -> Self {
        Self::MonthDay { month, day }
    }
}

/// Parses an ISO 8601 date or date-time and keeps its calendar date.
///
/// Accepts calendar dates `YYYY-MM-DD` / `YYYYMMDD` and week dates
/// `YYYY-Www[-D]` / `YYYYWww[D]` (day defaults to Monday), each optionally
/// followed by `T` (or a space)
/// and a time of day `HH[:MM[:SS[.fff]]]` / `HHMM[SS]`, with an optional
/// `±HH[:MM]` offset. A trailing `Z` is stripped first. The date is taken as
/// written; offsets are validated but never applied.
///
/// ## Errors
/// Returns [`RfcError::DateFormat`] if the input is not one of those shapes or
/// names a date or time that does not exist.
pub fn parse_iso_date(input: &str) -> RfcResult<NaiveDate> {
    let invalid = || RfcError::DateFormat(input.to_string());

    if !input.is_ascii() {
        return Err(invalid());
    }

    let value = input.strip_suffix('Z').unwrap_or(input);
    let (date_part, time_part) = match value.find(['T', ' ']) {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    };

    let date = parse_date_part(date_part).ok_or_else(invalid)?;

    if let Some(time) = time_part {
        let (clock, offset) = split_offset(time);
        if !valid_clock(clock) || !offset.is_none_or(valid_offset) {
            return Err(invalid());
        }
    }

    Ok(date)
}

/// Validates a `MM-DD` month-day against `year` and returns the recurring date.
///
/// Validation builds the full date in `year`, so `02-29` only passes in leap
/// years.
///
/// ## Errors
/// Returns [`RfcError::DateFormat`] if the input is not `MM-DD` or the day
/// does not exist in `year`.
pub fn parse_month_day(input: &str, year: i32) -> RfcResult<VCardDate> {
    let invalid = || RfcError::DateFormat(input.to_string());

    let (month, day) = input.split_once('-').ok_or_else(invalid)?;
    let month = two_digits(month).ok_or_else(invalid)?;
    let day = two_digits(day).ok_or_else(invalid)?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    Ok(VCardDate::month_day(date.month(), date.day()))
}

fn parse_date_part(s: &str) -> Option<NaiveDate> {
    parse_calendar_date(s).or_else(|| parse_week_date(s))
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let (year, month, day) = match s.len() {
        10 if s.as_bytes()[4] == b'-' && s.as_bytes()[7] == b'-' => {
            (&s[0..4], &s[5..7], &s[8..10])
        }
        8 => (&s[0..4], &s[4..6], &s[6..8]),
        _ => return None,
    };

    let year = digits(year)?;
    let month = two_digits(month)?;
    let day = two_digits(day)?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// `2005-W28-2`, `2005W282`, `2005-W28` or `2005W28`.
fn parse_week_date(s: &str) -> Option<NaiveDate> {
    let year = i32::try_from(digits(s.get(..4)?)?).ok()?;

    let rest = s.get(4..)?;
    let (extended, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let rest = rest.strip_prefix('W')?;
    let week = two_digits(rest.get(..2)?)?;

    let day = match rest.get(2..)? {
        "" => "1",
        day if extended => day.strip_prefix('-')?,
        day => day,
    };
    let weekday = match day {
        "1" => Weekday::Mon,
        "2" => Weekday::Tue,
        "3" => Weekday::Wed,
        "4" => Weekday::Thu,
        "5" => Weekday::Fri,
        "6" => Weekday::Sat,
        "7" => Weekday::Sun,
        _ => return None,
    };

    NaiveDate::from_isoywd_opt(year, week, weekday)
}

/// Splits `HH:MM:SS+01:00` into the clock and the offset (sign included).
fn split_offset(time: &str) -> (&str, Option<&str>) {
    match time.find(['+', '-']) {
        Some(idx) => (&time[..idx], Some(&time[idx..])),
        None => (time, None),
    }
}

fn valid_clock(clock: &str) -> bool {
    let (main, fraction) = match clock.split_once(['.', ',']) {
        Some((main, fraction)) => (main, Some(fraction)),
        None => (clock, None),
    };

    if fraction.is_some_and(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit())) {
        return false;
    }

    let parts: Vec<&str> = if main.contains(':') {
        main.split(':').collect()
    } else {
        main.as_bytes()
            .chunks(2)
            .filter_map(|c| std::str::from_utf8(c).ok())
            .collect()
    };

    // Fractions are only meaningful after a seconds field.
    if fraction.is_some() && parts.len() != 3 {
        return false;
    }

    let mut fields = [0_u32; 3];
    if parts.is_empty() || parts.len() > 3 {
        return false;
    }
    for (slot, part) in fields.iter_mut().zip(&parts) {
        match two_digits(part) {
            Some(v) => *slot = v,
            None => return false,
        }
    }

    NaiveTime::from_hms_opt(fields[0], fields[1], fields[2]).is_some()
}

fn valid_offset(offset: &str) -> bool {
    let body = &offset[1..];
    let (hours, minutes) = match body.len() {
        2 => (body, "00"),
        4 => (&body[..2], &body[2..]),
        5 if body.as_bytes()[2] == b':' => (&body[..2], &body[3..]),
        _ => return false,
    };

    matches!((two_digits(hours), two_digits(minutes)), (Some(h), Some(m)) if h < 24 && m < 60)
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 { digits(s) } else { None }
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
