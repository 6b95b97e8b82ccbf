use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current instant as epoch milliseconds.
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Strict `YYYY-MM-DD`: four-digit year, no sign.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    if b.len() != 10 || !b[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Calendar day (local timezone) of an epoch-millis instant.
pub fn local_date_of_millis(millis: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt: DateTime<Local>| dt.date_naive())
}

/// "YYYY-MM-DD HH:MM" (local) for display.
pub fn format_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{millis}"),
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Monday and Sunday of the week containing `d`, clamped to the calendar range.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = u64::from(d.weekday().num_days_from_monday());
    let monday = d.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN);
    let sunday = d
        .checked_add_days(Days::new(6 - back))
        .unwrap_or(NaiveDate::MAX);
    (monday, sunday)
}

/// Resolve a period expression into inclusive (start, end) dates.
///
/// Accepted forms:
///   - `YYYY`
///   - `YYYY-MM`
///   - `YYYY-MM-DD`
///   - `<form>:<form>` with both sides of the same form
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.is_empty() || end.is_empty() || start.len() != end.len() {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }

        let (s, _) = single_period_bounds(start)?;
        let (_, e) = single_period_bounds(end)?;

        if e < s {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (end before start)"
            )));
        }
        return Ok((s, e));
    }

    single_period_bounds(p.trim())
}

fn single_period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), DATE_FMT)
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let days = all_days_of_month(first.year(), first.month());
            match (days.first(), days.last()) {
                (Some(s), Some(e)) => Ok((*s, *e)),
                _ => Err(AppError::InvalidPeriod(p.to_string())),
            }
        }
        4 => {
            let year: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let s = NaiveDate::from_ymd_opt(year, 1, 1);
            let e = NaiveDate::from_ymd_opt(year, 12, 31);
            match (s, e) {
                (Some(s), Some(e)) => Ok((s, e)),
                _ => Err(AppError::InvalidPeriod(p.to_string())),
            }
        }
        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}
