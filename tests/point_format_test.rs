use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use timegrid::format::point::{
    dates_equal, day_in_month, format_date_time, format_iso_date, format_iso_time, format_time_elapsed_at,
    format_year_month,
};

fn tz(name: &str) -> Tz {
    name.parse().unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn test_format_year_month() {
    assert_eq!(format_year_month(tz("UTC"), utc(2024, 2, 15, 12, 0)), "February 2024");
}

#[test]
fn test_format_year_month_respects_timezone() {
    // 02:00 UTC on Mar 1 is still Feb 29 in New York
    let instant = utc(2024, 3, 1, 2, 0);
    assert_eq!(format_year_month(tz("America/New_York"), instant), "February 2024");
    assert_eq!(format_year_month(tz("UTC"), instant), "March 2024");
}

#[test]
fn test_format_date_time_full_pattern() {
    let instant = utc(2024, 2, 3, 19, 30);
    assert_eq!(format_date_time(tz("America/New_York"), instant), "Feb 3, 2024 2:30 pm");
}

#[test]
fn test_iso_formats_follow_the_local_day() {
    // 03:00 UTC on Feb 4 is 22:00 on Feb 3 in New York
    let instant = utc(2024, 2, 4, 3, 0);
    assert_eq!(format_iso_date(tz("America/New_York"), instant), "2024-02-03");
    assert_eq!(format_iso_time(tz("America/New_York"), instant), "22:00");
    assert_eq!(format_iso_date(tz("UTC"), instant), "2024-02-04");
    assert_eq!(format_iso_time(tz("UTC"), instant), "03:00");
}

#[test]
fn test_day_in_month() {
    assert_eq!(day_in_month(tz("America/New_York"), utc(2024, 2, 4, 3, 0)), 3);
    assert_eq!(day_in_month(tz("UTC"), utc(2024, 2, 4, 3, 0)), 4);
}

#[test]
fn test_dates_equal_is_null_safe() {
    let a = utc(2024, 2, 3, 19, 30);
    // same instant constructed from its epoch value
    let b = Utc.timestamp_opt(1_706_988_600, 0).unwrap();

    assert!(dates_equal(None, None));
    assert!(!dates_equal(None, Some(a)));
    assert!(!dates_equal(Some(a), None));
    assert!(dates_equal(Some(a), Some(a)));
    assert!(dates_equal(Some(a), Some(b)));
    assert!(!dates_equal(Some(a), Some(utc(2024, 2, 3, 19, 31))));
}

#[test]
fn test_elapsed_seconds_and_minutes() {
    let now = utc(2024, 6, 15, 12, 0);
    let at = |d: Duration| format_time_elapsed_at(now - d, now);

    assert_eq!(at(Duration::seconds(0)), "a few seconds");
    assert_eq!(at(Duration::seconds(44)), "a few seconds");
    assert_eq!(at(Duration::seconds(45)), "a minute");
    assert_eq!(at(Duration::seconds(89)), "a minute");
    assert_eq!(at(Duration::seconds(90)), "2 minutes");
    assert_eq!(at(Duration::minutes(5)), "5 minutes");
    assert_eq!(at(Duration::minutes(44)), "44 minutes");
}

#[test]
fn test_elapsed_hours_and_days() {
    let now = utc(2024, 6, 15, 12, 0);
    let at = |d: Duration| format_time_elapsed_at(now - d, now);

    assert_eq!(at(Duration::minutes(45)), "an hour");
    assert_eq!(at(Duration::minutes(89)), "an hour");
    assert_eq!(at(Duration::minutes(90)), "2 hours");
    assert_eq!(at(Duration::hours(21)), "21 hours");
    assert_eq!(at(Duration::hours(22)), "a day");
    assert_eq!(at(Duration::hours(35)), "a day");
    assert_eq!(at(Duration::hours(36)), "2 days");
    assert_eq!(at(Duration::days(25)), "25 days");
}

#[test]
fn test_elapsed_months_and_years() {
    let now = utc(2024, 6, 15, 12, 0);
    let at = |d: Duration| format_time_elapsed_at(now - d, now);

    assert_eq!(at(Duration::days(26)), "a month");
    assert_eq!(at(Duration::days(45)), "a month");
    assert_eq!(at(Duration::days(46)), "2 months");
    assert_eq!(at(Duration::days(100)), "3 months");
    assert_eq!(at(Duration::days(319)), "10 months");
    assert_eq!(at(Duration::days(320)), "a year");
    assert_eq!(at(Duration::days(547)), "a year");
    assert_eq!(at(Duration::days(548)), "2 years");
    assert_eq!(at(Duration::days(1095)), "3 years");
}

#[test]
fn test_elapsed_is_direction_free() {
    let now = utc(2024, 6, 15, 12, 0);
    let future = format_time_elapsed_at(now + Duration::minutes(5), now);
    let past = format_time_elapsed_at(now - Duration::minutes(5), now);
    assert_eq!(future, "5 minutes");
    assert_eq!(future, past);
}
