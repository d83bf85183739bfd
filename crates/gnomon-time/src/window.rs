// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Time Windows
//!
//! A closed interval over two date+time instants, not truncated to day
//! granularity. A `TimeWindow` stores its start and end as date/time
//! pairs and caches the derived instants and duration at construction,
//! since equality and hashing are defined over the derived instants and
//! must stay stable and cheap.
//!
//! Windows encode to a canonical `'|'`-separated string with a fixed,
//! locale-invariant instant format; the parse path signals malformed
//! input by returning `None` rather than an error, so callers attempting
//! speculative parses need no error-based control flow.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The fixed instant format used by [`TimeWindow::encode`] and
/// [`TimeWindow::parse`]. The fractional part is omitted for whole-second
/// instants and round-trips sub-second precision otherwise.
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The error type for time window construction and derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindowError {
    /// The requested end instant lies before the start instant.
    EndBeforeStart {
        /// The start instant of the rejected window.
        start: NaiveDateTime,
        /// The offending end instant.
        end: NaiveDateTime,
    },
    /// A negative length or adjustment was requested.
    NegativeDuration {
        /// The offending amount.
        requested: TimeDelta,
    },
    /// A shorten request exceeded the window's current duration.
    ShortenTooLong {
        /// The offending amount.
        requested: TimeDelta,
        /// The window's current duration.
        available: TimeDelta,
    },
    /// Instant arithmetic left the representable range.
    InstantOutOfRange,
}

impl fmt::Display for TimeWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => {
                write!(f, "End instant {} lies before start instant {}", end, start)
            }
            Self::NegativeDuration { requested } => {
                write!(f, "Requested duration {} is negative", requested)
            }
            Self::ShortenTooLong {
                requested,
                available,
            } => write!(
                f,
                "Cannot shorten by {} a window lasting only {}",
                requested, available
            ),
            Self::InstantOutOfRange => {
                write!(f, "Instant arithmetic left the representable range")
            }
        }
    }
}

impl std::error::Error for TimeWindowError {}

/// A closed interval between two date+time instants.
///
/// # Invariants
/// `end >= start`, equivalently: the end date is not before the start
/// date, and on a shared date the end time is not before the start time.
///
/// # Examples
///
/// ```rust
/// # use chrono::{NaiveDate, NaiveTime};
/// # use gnomon_time::window::TimeWindow;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let window = TimeWindow::same_day(
///     date,
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert!(window.contains(date.and_hms_opt(11, 22, 0).unwrap()));
/// assert!(!window.contains(date.and_hms_opt(9, 22, 0).unwrap()));
/// assert!(!window.contains(date.and_hms_opt(12, 22, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_date: NaiveDate,
    end_time: NaiveTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
    duration: TimeDelta,
}

impl TimeWindow {
    /// Creates a window between two validated instants without
    /// re-checking the invariant.
    ///
    /// The caller must ensure `end >= start`.
    fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(
            end >= start,
            "Invalid window: end must not precede start"
        );
        Self {
            start_date: start.date(),
            start_time: start.time(),
            end_date: end.date(),
            end_time: end.time(),
            start,
            end,
            duration: end - start,
        }
    }

    /// Creates a window from a start and end date/time pair.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::EndBeforeStart`] if the end instant
    /// precedes the start instant.
    pub fn new(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Result<Self, TimeWindowError> {
        Self::from_instants(
            NaiveDateTime::new(start_date, start_time),
            NaiveDateTime::new(end_date, end_time),
        )
    }

    /// Creates a window within a single calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::EndBeforeStart`] if `end_time` precedes
    /// `start_time`.
    #[inline]
    pub fn same_day(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, TimeWindowError> {
        Self::new(date, start_time, date, end_time)
    }

    /// Creates a window from two instants.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::EndBeforeStart`] if `end < start`.
    pub fn from_instants(
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TimeWindowError> {
        if end < start {
            return Err(TimeWindowError::EndBeforeStart { start, end });
        }
        Ok(Self::between(start, end))
    }

    /// Creates a window of the given number of hours starting at `start`.
    ///
    /// Zero hours yield a window whose start equals its end.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::NegativeDuration`] for negative `hours`
    /// and [`TimeWindowError::InstantOutOfRange`] if the end would leave
    /// the representable range.
    pub fn from_hours(start: NaiveDateTime, hours: i64) -> Result<Self, TimeWindowError> {
        let length = TimeDelta::try_hours(hours).ok_or(TimeWindowError::InstantOutOfRange)?;
        Self::from_length(start, length)
    }

    /// Creates a window of the given number of minutes starting at `start`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TimeWindow::from_hours`].
    pub fn from_minutes(start: NaiveDateTime, minutes: i64) -> Result<Self, TimeWindowError> {
        let length = TimeDelta::try_minutes(minutes).ok_or(TimeWindowError::InstantOutOfRange)?;
        Self::from_length(start, length)
    }

    fn from_length(start: NaiveDateTime, length: TimeDelta) -> Result<Self, TimeWindowError> {
        if length < TimeDelta::zero() {
            return Err(TimeWindowError::NegativeDuration { requested: length });
        }
        let end = start
            .checked_add_signed(length)
            .ok_or(TimeWindowError::InstantOutOfRange)?;
        Ok(Self::between(start, end))
    }

    /// Returns the start date of the window.
    #[inline]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the start time of the window.
    #[inline]
    pub const fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the end date of the window.
    #[inline]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the end time of the window.
    #[inline]
    pub const fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Returns the start instant of the window.
    #[inline]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end instant of the window.
    #[inline]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the window's duration.
    #[inline]
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Returns `true` if `instant` falls within the window, both ends
    /// inclusive.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns `true` if the given date and time fall within the window.
    #[inline]
    pub fn contains_at(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.contains(NaiveDateTime::new(date, time))
    }

    /// Returns a window with the same start and the end moved later by
    /// `amount`.
    ///
    /// Extending by zero returns an equal window.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::NegativeDuration`] for a negative
    /// `amount` and [`TimeWindowError::InstantOutOfRange`] if the new end
    /// would leave the representable range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{NaiveDate, NaiveTime, TimeDelta};
    /// # use gnomon_time::window::TimeWindow;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let window = TimeWindow::same_day(
    ///     date,
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let longer = window.extend(TimeDelta::minutes(30)).unwrap();
    /// assert_eq!(longer.duration(), TimeDelta::minutes(90));
    /// assert_eq!(longer.start(), window.start());
    /// ```
    pub fn extend(&self, amount: TimeDelta) -> Result<Self, TimeWindowError> {
        if amount < TimeDelta::zero() {
            return Err(TimeWindowError::NegativeDuration { requested: amount });
        }
        let end = self
            .end
            .checked_add_signed(amount)
            .ok_or(TimeWindowError::InstantOutOfRange)?;
        Ok(Self::between(self.start, end))
    }

    /// Returns a window with the same start and the end moved earlier by
    /// `amount`.
    ///
    /// Shortening by the full duration yields a window whose start equals
    /// its end.
    ///
    /// # Errors
    ///
    /// Returns [`TimeWindowError::NegativeDuration`] for a negative
    /// `amount` and [`TimeWindowError::ShortenTooLong`] if `amount`
    /// exceeds the current duration.
    pub fn shorten(&self, amount: TimeDelta) -> Result<Self, TimeWindowError> {
        if amount < TimeDelta::zero() {
            return Err(TimeWindowError::NegativeDuration { requested: amount });
        }
        if amount > self.duration {
            return Err(TimeWindowError::ShortenTooLong {
                requested: amount,
                available: self.duration,
            });
        }
        Ok(Self::between(self.start, self.end - amount))
    }

    /// Encodes the window as `start|end` using the fixed invariant
    /// instant format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{NaiveDate, NaiveTime};
    /// # use gnomon_time::window::TimeWindow;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let window = TimeWindow::same_day(
    ///     date,
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(window.encode(), "2024-05-01T09:00:00|2024-05-01T17:30:00");
    /// assert_eq!(TimeWindow::parse(&window.encode()), Some(window));
    /// ```
    pub fn encode(&self) -> String {
        format!(
            "{}|{}",
            self.start.format(INSTANT_FORMAT),
            self.end.format(INSTANT_FORMAT)
        )
    }

    /// Parses a window from its canonical `start|end` encoding.
    ///
    /// Returns `None` for anything other than exactly two well-formed
    /// instants in order; the parse path never errors.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('|');
        let start = NaiveDateTime::parse_from_str(parts.next()?, INSTANT_FORMAT).ok()?;
        let end = NaiveDateTime::parse_from_str(parts.next()?, INSTANT_FORMAT).ok()?;
        if parts.next().is_some() {
            return None;
        }
        Self::from_instants(start, end).ok()
    }
}

impl PartialEq for TimeWindow {
    /// Equality is defined over the derived instants only; two windows
    /// with different internal splits but identical instants are equal.
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for TimeWindow {}

impl Hash for TimeWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_date == self.end_date {
            write!(
                f,
                "{}: {} - {}",
                self.start_date, self.start_time, self.end_time
            )
        } else {
            write!(
                f,
                "{}: {} - {}: {}",
                self.start_date, self.start_time, self.end_date, self.end_time
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDateTime::new(date(year, month, day), time(hour, minute))
    }

    fn sample() -> TimeWindow {
        TimeWindow::same_day(date(2000, 1, 1), time(10, 0), time(12, 0)).unwrap()
    }

    #[test]
    fn test_same_day_construction() {
        let w = sample();
        assert_eq!(w.start_date(), date(2000, 1, 1));
        assert_eq!(w.end_date(), date(2000, 1, 1));
        assert_eq!(w.start_time(), time(10, 0));
        assert_eq!(w.end_time(), time(12, 0));
        assert_eq!(w.duration(), TimeDelta::hours(2));
    }

    #[test]
    fn test_cross_day_construction() {
        let w = TimeWindow::new(date(2024, 3, 1), time(22, 0), date(2024, 3, 2), time(6, 0))
            .unwrap();
        assert_eq!(w.duration(), TimeDelta::hours(8));
    }

    #[test]
    fn test_construction_rejects_reversed_instants() {
        let result = TimeWindow::same_day(date(2024, 3, 1), time(12, 0), time(10, 0));
        assert!(matches!(
            result,
            Err(TimeWindowError::EndBeforeStart { .. })
        ));

        let result = TimeWindow::new(date(2024, 3, 2), time(6, 0), date(2024, 3, 1), time(22, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_instants_decomposes() {
        let start = instant(2024, 3, 1, 22, 30);
        let end = instant(2024, 3, 2, 6, 15);
        let w = TimeWindow::from_instants(start, end).unwrap();
        assert_eq!(w.start_date(), date(2024, 3, 1));
        assert_eq!(w.start_time(), NaiveTime::from_hms_opt(22, 30, 0).unwrap());
        assert_eq!(w.end_date(), date(2024, 3, 2));
        assert_eq!(w.start(), start);
        assert_eq!(w.end(), end);
    }

    #[test]
    fn test_zero_length_window() {
        let at = instant(2024, 3, 1, 9, 0);
        let w = TimeWindow::from_instants(at, at).unwrap();
        assert_eq!(w.duration(), TimeDelta::zero());
        assert!(w.contains(at));
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let w = sample();
        let day = date(2000, 1, 1);

        assert!(w.contains(day.and_hms_opt(10, 0, 0).unwrap())); // start
        assert!(w.contains(day.and_hms_opt(11, 22, 0).unwrap()));
        assert!(w.contains(day.and_hms_opt(12, 0, 0).unwrap())); // end
        assert!(!w.contains(day.and_hms_opt(9, 22, 0).unwrap()));
        assert!(!w.contains(day.and_hms_opt(12, 0, 1).unwrap())); // just past end
        assert!(!w.contains(day.and_hms_opt(12, 22, 0).unwrap()));
    }

    #[test]
    fn test_contains_at() {
        let w = sample();
        assert!(w.contains_at(date(2000, 1, 1), time(11, 0)));
        assert!(!w.contains_at(date(2000, 1, 2), time(11, 0)));
    }

    #[test]
    fn test_extend() {
        let w = sample();

        let longer = w.extend(TimeDelta::minutes(45)).unwrap();
        assert_eq!(longer.start(), w.start());
        assert_eq!(longer.duration(), TimeDelta::minutes(165));

        // Zero extension yields an equal window.
        assert_eq!(w.extend(TimeDelta::zero()).unwrap(), w);

        assert!(matches!(
            w.extend(TimeDelta::minutes(-1)),
            Err(TimeWindowError::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_extend_across_midnight() {
        let w = TimeWindow::same_day(date(2024, 3, 1), time(22, 0), time(23, 0)).unwrap();
        let extended = w.extend(TimeDelta::hours(3)).unwrap();
        assert_eq!(extended.end_date(), date(2024, 3, 2));
        assert_eq!(extended.end_time(), time(2, 0));
    }

    #[test]
    fn test_shorten() {
        let w = sample();

        let shorter = w.shorten(TimeDelta::minutes(30)).unwrap();
        assert_eq!(shorter.start(), w.start());
        assert_eq!(shorter.duration(), TimeDelta::minutes(90));

        // Shortening by the full duration collapses the window.
        let collapsed = w.shorten(w.duration()).unwrap();
        assert_eq!(collapsed.start(), collapsed.end());
        assert_eq!(collapsed.duration(), TimeDelta::zero());

        assert!(matches!(
            w.shorten(TimeDelta::minutes(-1)),
            Err(TimeWindowError::NegativeDuration { .. })
        ));
        assert_eq!(
            w.shorten(TimeDelta::hours(3)),
            Err(TimeWindowError::ShortenTooLong {
                requested: TimeDelta::hours(3),
                available: TimeDelta::hours(2),
            })
        );
    }

    #[test]
    fn test_from_hours() {
        let start = instant(2024, 3, 1, 9, 0);

        let w = TimeWindow::from_hours(start, 8).unwrap();
        assert_eq!(w.start(), start);
        assert_eq!(w.duration(), TimeDelta::hours(8));

        let zero = TimeWindow::from_hours(start, 0).unwrap();
        assert_eq!(zero.start(), zero.end());

        assert!(matches!(
            TimeWindow::from_hours(start, -2),
            Err(TimeWindowError::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_from_minutes() {
        let start = instant(2024, 3, 1, 9, 0);

        let w = TimeWindow::from_minutes(start, 90).unwrap();
        assert_eq!(w.duration(), TimeDelta::minutes(90));

        assert!(TimeWindow::from_minutes(start, -1).is_err());
    }

    #[test]
    fn test_equality_over_instants_only() {
        let a = TimeWindow::same_day(date(2024, 3, 1), time(9, 0), time(17, 0)).unwrap();
        let b = TimeWindow::from_instants(instant(2024, 3, 1, 9, 0), instant(2024, 3, 1, 17, 0))
            .unwrap();
        assert_eq!(a, b);

        let c = TimeWindow::same_day(date(2024, 3, 1), time(9, 0), time(17, 30)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(w: &TimeWindow) -> u64 {
            let mut hasher = DefaultHasher::new();
            w.hash(&mut hasher);
            hasher.finish()
        }

        let a = TimeWindow::same_day(date(2024, 3, 1), time(9, 0), time(17, 0)).unwrap();
        let b = TimeWindow::from_instants(instant(2024, 3, 1, 9, 0), instant(2024, 3, 1, 17, 0))
            .unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display_same_day() {
        let w = sample();
        assert_eq!(format!("{}", w), "2000-01-01: 10:00:00 - 12:00:00");
    }

    #[test]
    fn test_display_cross_day() {
        let w = TimeWindow::new(date(2024, 3, 1), time(22, 0), date(2024, 3, 2), time(6, 0))
            .unwrap();
        assert_eq!(format!("{}", w), "2024-03-01: 22:00:00 - 2024-03-02: 06:00:00");
    }

    #[test]
    fn test_encode() {
        let w = sample();
        assert_eq!(w.encode(), "2000-01-01T10:00:00|2000-01-01T12:00:00");
    }

    #[test]
    fn test_round_trip() {
        let windows = [
            sample(),
            TimeWindow::new(date(2024, 3, 1), time(22, 0), date(2024, 3, 2), time(6, 0)).unwrap(),
            TimeWindow::from_instants(instant(2024, 3, 1, 9, 0), instant(2024, 3, 1, 9, 0))
                .unwrap(),
        ];
        for w in windows {
            assert_eq!(TimeWindow::parse(&w.encode()), Some(w));
        }
    }

    #[test]
    fn test_round_trip_subsecond() {
        let start = date(2024, 3, 1)
            .and_hms_milli_opt(9, 0, 0, 250)
            .unwrap();
        let end = date(2024, 3, 1).and_hms_milli_opt(10, 30, 15, 500).unwrap();
        let w = TimeWindow::from_instants(start, end).unwrap();
        assert_eq!(TimeWindow::parse(&w.encode()), Some(w));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(TimeWindow::parse(""), None);
        assert_eq!(TimeWindow::parse("not a window"), None);
        assert_eq!(TimeWindow::parse("2024-03-01T09:00:00"), None);
        assert_eq!(
            TimeWindow::parse("2024-03-01T09:00:00|not-an-instant"),
            None
        );
        assert_eq!(
            TimeWindow::parse("2024-03-01T09:00:00|2024-03-01T10:00:00|2024-03-01T11:00:00"),
            None
        );
        // Reversed instants violate the invariant and also yield nothing.
        assert_eq!(
            TimeWindow::parse("2024-03-01T10:00:00|2024-03-01T09:00:00"),
            None
        );
    }
}
