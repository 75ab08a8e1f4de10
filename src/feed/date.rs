//! Calendar-day window for the date search.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// An inclusive `created_at` window covering one calendar day in local time,
/// `[00:00:00.000, 23:59:59.999]`.
///
/// An unparseable date yields the *empty* window (admits nothing) rather
/// than an error; the feed then shows its filtered empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Parse a calendar date in ISO form (`2024-03-15`). A datetime input is
    /// accepted by taking its date part.
    pub fn parse(input: &str) -> Self {
        let date_part = input.trim().split('T').next().unwrap_or("");
        match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            Ok(date) => Self::for_date(date),
            Err(_) => Self::empty(),
        }
    }

    /// The window for one local calendar day.
    pub fn for_date(date: NaiveDate) -> Self {
        let start_naive = date.and_time(NaiveTime::MIN);
        let end_naive = date.and_time(
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN),
        );

        let start = match Local.from_local_datetime(&start_naive) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
            // DST gap at midnight: slide forward to the first valid instant.
            LocalResult::None => match Local.from_local_datetime(&(start_naive + Duration::hours(1)))
            {
                LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
                LocalResult::None => return Self::empty(),
            },
        };
        let end = match Local.from_local_datetime(&end_naive) {
            LocalResult::Single(t) | LocalResult::Ambiguous(_, t) => t,
            LocalResult::None => match Local.from_local_datetime(&(end_naive - Duration::hours(1)))
            {
                LocalResult::Single(t) | LocalResult::Ambiguous(_, t) => t,
                LocalResult::None => return Self::empty(),
            },
        };

        Self {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        }
    }

    /// The window that admits nothing.
    pub fn empty() -> Self {
        Self {
            start: DateTime::UNIX_EPOCH,
            end: DateTime::UNIX_EPOCH - Duration::milliseconds(1),
        }
    }

    /// Whether this window can admit any timestamp at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Inclusive upper bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether a timestamp falls inside the window (both bounds inclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn local_instant(s: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap();
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.with_timezone(&Utc),
            LocalResult::None => panic!("instant falls in a DST gap: {}", s),
        }
    }

    #[test]
    fn test_window_admits_end_of_day() {
        let window = DayWindow::parse("2024-03-15");
        assert!(window.contains(local_instant("2024-03-15T23:59:59")));
    }

    #[test]
    fn test_window_excludes_next_day() {
        let window = DayWindow::parse("2024-03-15");
        assert!(!window.contains(local_instant("2024-03-16T00:00:01")));
    }

    #[test]
    fn test_window_admits_start_of_day() {
        let window = DayWindow::parse("2024-03-15");
        assert!(window.contains(local_instant("2024-03-15T00:00:00")));
        assert!(!window.contains(local_instant("2024-03-14T23:59:59")));
    }

    #[test]
    fn test_datetime_input_uses_date_part() {
        let from_date = DayWindow::parse("2024-03-15");
        let from_datetime = DayWindow::parse("2024-03-15T14:30:00");
        assert_eq!(from_date, from_datetime);
    }

    #[test]
    fn test_invalid_input_yields_empty_window() {
        let window = DayWindow::parse("not-a-date");
        assert!(window.is_empty());
        assert!(!window.contains(Utc::now()));

        assert!(DayWindow::parse("").is_empty());
        assert!(DayWindow::parse("2024-13-40").is_empty());
    }

    #[test]
    fn test_empty_window_admits_nothing() {
        let window = DayWindow::empty();
        assert!(!window.contains(DateTime::UNIX_EPOCH));
        assert!(!window.contains(Utc::now()));
    }
}
