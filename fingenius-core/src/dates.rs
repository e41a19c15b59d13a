//! Date helpers: interpreting notification date strings and timezone-aware "today".

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::OnceLock;

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4}|\d{2})$")
            .expect("invalid numeric date regex")
    })
}

fn month_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z]{3})\s+(\d{1,2}),?\s+(\d{4}|\d{2})$")
            .expect("invalid month-name date regex")
    })
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    let m = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(m)
}

fn expand_year(s: &str) -> Option<i32> {
    let y: i32 = s.parse().ok()?;
    Some(if s.len() == 2 { 2000 + y } else { y })
}

/// Interpret a date string captured from a notification.
///
/// Numeric dates are day-first (`20/07/2023`, `5-8-23`); month-name dates look like
/// `Aug 5, 2023`. Two-digit years land in 20YY. Returns `None` for "Unknown" and for
/// anything that is not a real calendar date.
pub fn parse_notification_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(caps) = numeric_re().captures(s) {
        let d: u32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        let y = expand_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    if let Some(caps) = month_name_re().captures(s) {
        let m = month_from_abbrev(&caps[1])?;
        let d: u32 = caps[2].parse().ok()?;
        let y = expand_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    None
}

/// Current calendar date in an IANA timezone like "Asia/Kolkata".
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}
