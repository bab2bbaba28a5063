//! GS1 `YYMMDD` date fields (AI 11 production date, AI 17 expiration date)

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::ParsedField;

/// AI codes whose values are `YYMMDD` dates
pub const DATE_AIS: &[&str] = &["11", "17"];

/// Check if the AI carries a `YYMMDD` date
pub fn is_date_ai(code: &str) -> bool {
    DATE_AIS.contains(&code)
}

/// Resolve a two-digit year with the GS1 sliding window around `current_year`.
///
/// 51 to 99 years ahead maps to the previous century, 50 or more years behind
/// maps to the next one.
fn resolve_year(yy: i32, current_year: i32) -> i32 {
    let century = current_year - current_year.rem_euclid(100);
    let diff = yy - current_year.rem_euclid(100);
    if diff >= 51 {
        century - 100 + yy
    } else if diff <= -50 {
        century + 100 + yy
    } else {
        century + yy
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?;
    next?.pred_opt()
}

/// Parse a `YYMMDD` value relative to `current_year`.
///
/// Day `00` stands for the last day of the month. Returns `None` for anything
/// that is not six ASCII digits or not a real calendar date.
pub fn parse_gs1_date(value: &str, current_year: i32) -> Option<NaiveDate> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: i32 = value[0..2].parse().ok()?;
    let month: u32 = value[2..4].parse().ok()?;
    let day: u32 = value[4..6].parse().ok()?;
    let year = resolve_year(yy, current_year);

    if day == 0 {
        last_day_of_month(year, month)
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Parse a `YYMMDD` value relative to today's year (UTC)
pub fn parse_gs1_date_today(value: &str) -> Option<NaiveDate> {
    parse_gs1_date(value, Utc::now().year())
}

/// Date interpretation for decoded fields
pub trait Gs1Date {
    /// Interpret the value as a GS1 `YYMMDD` date.
    ///
    /// Only production (11) and expiration (17) dates are interpreted; every
    /// other AI returns `None`, as do malformed or impossible dates.
    fn date(&self) -> Option<NaiveDate>;
}

impl Gs1Date for ParsedField {
    fn date(&self) -> Option<NaiveDate> {
        if !is_date_ai(&self.code) {
            return None;
        }
        parse_gs1_date_today(&self.value)
    }
}
