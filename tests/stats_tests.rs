use chrono::{NaiveDate, Weekday};
use rhabitlog::core::stats::{compute_statistics, longest_streak, month_days, week_bounds};
use rhabitlog::models::record::Record;
use rhabitlog::utils::date::parse_date;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rec(ts: i64, date: &str) -> Record {
    Record {
        id: ts,
        timestamp: ts,
        date: date.to_string(),
        note: None,
    }
}

#[test]
fn empty_input_is_zero_filled() {
    let s = compute_statistics(&[], d("2024-02-14"));

    assert_eq!(s.week.len(), 7);
    assert!(s.week.iter().all(|(_, c)| *c == 0));
    assert_eq!(s.week[0].0, Weekday::Mon);
    assert_eq!(s.week[6].0, Weekday::Sun);

    // 2024 is a leap year
    assert_eq!(s.month.len(), 29);
    assert!(s.month.values().all(|c| *c == 0));

    assert_eq!(s.total, 0);
    assert_eq!(s.longest_streak, 0);
    assert_eq!(s.average_weekly, 0.0);
}

#[test]
fn streak_counts_consecutive_days_with_records() {
    let records = vec![
        rec(1, "2024-01-01"),
        rec(2, "2024-01-02"),
        rec(3, "2024-01-03"),
        rec(4, "2024-01-05"),
    ];
    assert_eq!(longest_streak(&records), 3);
}

#[test]
fn streak_ignores_duplicates_order_and_bad_dates() {
    let records = vec![
        rec(5, "2024-03-02"),
        rec(1, "2024-03-01"),
        rec(2, "2024-03-01"),
        rec(3, "garbage"),
        rec(4, "2024-03-10"),
    ];
    assert_eq!(longest_streak(&records), 2);

    let isolated = vec![rec(1, "2024-03-01"), rec(2, "2024-03-03")];
    assert_eq!(longest_streak(&isolated), 1);
}

#[test]
fn streak_crosses_month_and_year_boundaries() {
    let records = vec![
        rec(1, "2023-12-30"),
        rec(2, "2023-12-31"),
        rec(3, "2024-01-01"),
        rec(4, "2024-01-02"),
    ];
    assert_eq!(longest_streak(&records), 4);
}

#[test]
fn average_uses_whole_weeks_since_first_record() {
    // earliest record 20 days before the reference → 21 days → 3 weeks
    let reference = d("2024-01-21");
    let mut records = vec![rec(1_000, "2024-01-01")];
    for i in 1..10 {
        records.push(rec(1_000 + i, "2024-01-15"));
    }

    let s = compute_statistics(&records, reference);
    assert_eq!(s.total, 10);
    assert!((s.average_weekly - 10.0 / 3.0).abs() < 1e-9);
}

#[test]
fn first_date_comes_from_earliest_timestamp() {
    // The later-dated record has the smaller timestamp: it decides the span.
    let reference = d("2024-01-14");
    let records = vec![rec(10, "2024-01-08"), rec(20, "2024-01-01")];

    let s = compute_statistics(&records, reference);
    // 2024-01-08..=2024-01-14 → 7 days → 1 week
    assert!((s.average_weekly - 2.0).abs() < 1e-9);
}

#[test]
fn future_records_do_not_divide_by_zero() {
    let s = compute_statistics(&[rec(1, "2024-05-01")], d("2024-04-01"));
    assert!((s.average_weekly - 1.0).abs() < 1e-9);
}

#[test]
fn buckets_count_duplicates_on_the_reference_week_and_month() {
    // 2024-05-15 is a Wednesday
    let reference = d("2024-05-15");
    let records = vec![
        rec(1, "2024-05-13"),
        rec(2, "2024-05-15"),
        rec(3, "2024-05-15"),
        rec(4, "2024-05-19"),
        rec(5, "2024-05-20"),
        rec(6, "2024-04-30"),
    ];

    let s = compute_statistics(&records, reference);
    let week: Vec<u32> = s.week.iter().map(|(_, c)| *c).collect();
    assert_eq!(week, vec![1, 0, 2, 0, 0, 0, 1]);

    assert_eq!(s.month.len(), 31);
    assert_eq!(s.month[&d("2024-05-15")], 2);
    assert_eq!(s.month[&d("2024-05-20")], 1);
    assert_eq!(s.month.values().sum::<u32>(), 5);
    assert_eq!(s.total, 6);
}

#[test]
fn week_and_month_helpers() {
    let (mon, sun) = week_bounds(d("2024-01-07"));
    assert_eq!(mon, d("2024-01-01"));
    assert_eq!(sun, d("2024-01-07"));

    let days = month_days(d("2023-02-10"));
    assert_eq!(days.len(), 28);
    assert_eq!(days[0], d("2023-02-01"));
    assert_eq!(days[27], d("2023-02-28"));
}

#[test]
fn dates_at_the_calendar_edges_do_not_overflow() {
    assert_eq!(parse_date("+262142-12-31"), None);
    assert_eq!(parse_date("-262143-01-01"), None);
    assert_eq!(parse_date("2024-02-30"), None);
    assert_eq!(parse_date("2024-02-29"), Some(d("2024-02-29")));

    for reference in [NaiveDate::MAX, NaiveDate::MIN] {
        let s = compute_statistics(&[], reference);
        assert_eq!(s.week.len(), 7);
        assert_eq!(s.week[0].0, Weekday::Mon);
        assert!(s.week.iter().all(|(_, c)| *c == 0));

        let (mon, sun) = week_bounds(reference);
        assert!(mon <= reference && reference <= sun);
    }
}
