//! Month-granular calendar arithmetic and store date parsing.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Day 1 of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `date` moved forward by `months` calendar months. Saturates at the
/// latest representable date.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Signed number of month boundaries from `start`'s month to `end`'s month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
pub fn whole_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(86_400)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a date cell from the entity store.
///
/// Accepts RFC 3339 timestamps, naive timestamps with `T` or a space,
/// offset timestamps with a space, and bare dates. As a last resort the
/// first ten characters are read as `YYYY-MM-DD`. Offsets are dropped, the
/// wall-clock date is kept.
pub fn parse_store_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in OFFSET_TIMESTAMP_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.naive_local());
        }
    }

    let midnight = |d: NaiveDate| d.and_hms_opt(0, 0, 0);
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return midnight(date);
    }
    text.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        .and_then(midnight)
}

/// Iterator over first-of-month dates from `start`'s month through `end`'s
/// month inclusive. Empty when `end`'s month precedes `start`'s.
pub fn month_steps(start: NaiveDate, end: NaiveDate) -> MonthSteps {
    MonthSteps {
        next: Some(first_of_month(start)),
        last: first_of_month(end),
    }
}

#[derive(Debug, Clone)]
pub struct MonthSteps {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for MonthSteps {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.last)?;
        self.next = current.checked_add_months(Months::new(1));
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_of_month_normalizes_day() {
        assert_eq!(first_of_month(ymd(2024, 2, 29)), ymd(2024, 2, 1));
        assert_eq!(first_of_month(ymd(2024, 2, 1)), ymd(2024, 2, 1));
    }

    #[test]
    fn add_months_crosses_year() {
        assert_eq!(add_months(ymd(2024, 11, 1), 3), ymd(2025, 2, 1));
        assert_eq!(add_months(ymd(2024, 1, 1), 0), ymd(2024, 1, 1));
    }

    #[test]
    fn months_between_counts_boundaries() {
        assert_eq!(months_between(ymd(2020, 1, 1), ymd(2025, 1, 1)), 60);
        assert_eq!(months_between(ymd(2024, 3, 31), ymd(2024, 4, 1)), 1);
        assert_eq!(months_between(ymd(2024, 4, 1), ymd(2024, 3, 1)), -1);
    }

    #[test]
    fn whole_days_floors_partial_days() {
        let a = ymd(2024, 1, 15).and_hms_opt(10, 0, 0).unwrap();
        let b = ymd(2024, 3, 10).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(whole_days(a, b), 54);
        assert_eq!(whole_days(b, a), -55);
    }

    #[test]
    fn round2_rounds_half_away() {
        assert_eq!(round2(30.909090), 30.91);
        assert_eq!(round2(83.636363), 83.64);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn parses_date_only_and_timestamps() {
        let day = ymd(2024, 1, 15);
        assert_eq!(parse_store_timestamp("2024-01-15").unwrap().date(), day);
        assert_eq!(
            parse_store_timestamp("2024-01-15 13:45:00").unwrap(),
            day.and_hms_opt(13, 45, 0).unwrap()
        );
        assert_eq!(
            parse_store_timestamp("2024-01-15T13:45:00.123456").unwrap().date(),
            day
        );
        assert_eq!(
            parse_store_timestamp("2024-01-15T23:30:00Z").unwrap(),
            day.and_hms_opt(23, 30, 0).unwrap()
        );
        assert_eq!(
            parse_store_timestamp("2024-01-15T23:30:00+05:00").unwrap().date(),
            day
        );
        assert_eq!(
            parse_store_timestamp("2024-01-15 08:00:00+0200").unwrap().date(),
            day
        );
    }

    #[test]
    fn parses_prefix_as_last_resort() {
        assert_eq!(
            parse_store_timestamp("2024-01-15 (approx)").unwrap().date(),
            ymd(2024, 1, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_store_timestamp("").is_none());
        assert!(parse_store_timestamp("   ").is_none());
        assert!(parse_store_timestamp("next tuesday").is_none());
        assert!(parse_store_timestamp("20240115").is_none());
        assert!(parse_store_timestamp("2024-13-01").is_none());
    }

    #[test]
    fn month_steps_inclusive() {
        let steps: Vec<_> = month_steps(ymd(2024, 1, 15), ymd(2024, 3, 10)).collect();
        assert_eq!(steps, vec![ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 3, 1)]);
    }

    #[test]
    fn month_steps_single_and_empty() {
        assert_eq!(month_steps(ymd(2024, 5, 2), ymd(2024, 5, 30)).count(), 1);
        assert_eq!(month_steps(ymd(2024, 6, 1), ymd(2024, 5, 30)).count(), 0);
    }
}
