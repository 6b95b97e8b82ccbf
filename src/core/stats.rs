//! Aggregation engine: weekly / monthly buckets and lifetime figures.
//!
//! Everything here is pure: the reference day is passed in, never read from
//! the clock.

use crate::models::record::Record;
use crate::utils::date::{all_days_of_month, format_date, local_date_of_millis, parse_date};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::iter::successors;
use std::collections::{BTreeMap, BTreeSet};

pub use crate::utils::date::week_bounds;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Monday..Sunday of the reference week.
    pub week: Vec<(Weekday, u32)>,
    /// Every day of the reference month.
    pub month: BTreeMap<NaiveDate, u32>,
    pub total: usize,
    pub longest_streak: u32,
    pub average_weekly: f64,
}

/// Every day of the month containing `reference`.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    all_days_of_month(reference.year(), reference.month())
}

fn count_on(records: &[Record], day: NaiveDate) -> u32 {
    let key = format_date(day);
    records.iter().filter(|r| r.date == key).count() as u32
}

/// Monday..Sunday of the reference week. Days outside the calendar range
/// count as zero.
pub fn week_buckets(records: &[Record], reference: NaiveDate) -> Vec<(Weekday, u32)> {
    let offset = i64::from(reference.weekday().num_days_from_monday());
    successors(Some(Weekday::Mon), |w| Some(w.succ()))
        .take(7)
        .zip(0i64..)
        .map(|(weekday, i)| {
            let count = reference
                .checked_add_signed(Duration::days(i - offset))
                .map_or(0, |day| count_on(records, day));
            (weekday, count)
        })
        .collect()
}

pub fn month_buckets(records: &[Record], reference: NaiveDate) -> BTreeMap<NaiveDate, u32> {
    month_days(reference)
        .into_iter()
        .map(|day| (day, count_on(records, day)))
        .collect()
}

/// Longest run of consecutive calendar days having at least one record.
/// Records whose `date` does not parse are left out.
pub fn longest_streak(records: &[Record]) -> u32 {
    let days: BTreeSet<NaiveDate> = records.iter().filter_map(|r| parse_date(&r.date)).collect();

    let mut best = 0;
    let mut current = 0;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        current = match prev {
            Some(p) if p.succ_opt() == Some(day) => current + 1,
            _ => 1,
        };
        best = best.max(current);
        prev = Some(day);
    }

    best
}

/// Records per week since the first record, counting partial weeks as whole.
pub fn average_weekly(records: &[Record], reference: NaiveDate) -> f64 {
    let Some(first) = records.iter().min_by_key(|r| r.timestamp) else {
        return 0.0;
    };

    let Some(first_day) =
        parse_date(&first.date).or_else(|| local_date_of_millis(first.timestamp))
    else {
        return 0.0;
    };

    let span = (reference - first_day).num_days() + 1;
    let weeks = ((span as f64) / 7.0).ceil().max(1.0);

    records.len() as f64 / weeks
}

pub fn compute_statistics(records: &[Record], reference: NaiveDate) -> Statistics {
    Statistics {
        week: week_buckets(records, reference),
        month: month_buckets(records, reference),
        total: records.len(),
        longest_streak: longest_streak(records),
        average_weekly: average_weekly(records, reference),
    }
}
