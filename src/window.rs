use chrono::{Datelike, Duration, NaiveDate};

/// The 7-day span currently on display, identified by its start date. The
/// start is always the Monday of its week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The window containing `today`.
    pub fn current(today: NaiveDate) -> Self {
        Self {
            start: week_start(today),
        }
    }

    /// The window containing an arbitrary date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
        }
    }

    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Exclusive end of the window, i.e. the start of the following week.
    pub fn end_exclusive(self) -> NaiveDate {
        self.start + Duration::days(7)
    }

    /// Last calendar day inside the window.
    pub fn last_day(self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// The 7 dates of the window in chronological order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        (0..7i64).map(move |offset| self.start + Duration::days(offset))
    }

    /// Navigation backwards is never restricted.
    pub fn previous(self) -> Self {
        Self {
            start: self.start - Duration::days(7),
        }
    }

    /// Navigation forwards. Returns `None` when the resulting window would
    /// start on or after the current calendar day, so the window can never
    /// advance past the week containing `today`.
    pub fn next(self, today: NaiveDate) -> Option<Self> {
        let candidate = self.start + Duration::days(7);
        if candidate >= today {
            None
        } else {
            Some(Self { start: candidate })
        }
    }

    pub fn next_disabled(self, today: NaiveDate) -> bool {
        self.next(today).is_none()
    }
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
