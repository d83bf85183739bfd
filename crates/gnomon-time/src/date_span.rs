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

//! # Date Spans
//!
//! A closed, day-granularity interval over calendar dates. A `DateSpan` is
//! either the canonical empty value or bounded by a begin and end date
//! (both inclusive) with a cached day count. All transformations return
//! new values; predicates on an empty operand answer `false`.
//!
//! Combination is a **bounding hull**, not a set union: combining two
//! disjoint, non-adjacent spans yields a span covering the gap between
//! them as well. This is intended behavior and relied upon by callers.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use rand::Rng;
use std::{
    cmp::{max, min},
    fmt,
    iter::FusedIterator,
};

/// The error type for date span construction and derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpanError {
    /// The requested end date lies before the begin date.
    EndBeforeBegin {
        /// The begin date of the rejected span.
        begin: NaiveDate,
        /// The offending end date.
        end: NaiveDate,
    },
    /// Calendar arithmetic left the range of representable dates.
    DateOutOfRange,
}

impl fmt::Display for DateSpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeBegin { begin, end } => {
                write!(f, "End date {} lies before begin date {}", end, begin)
            }
            Self::DateOutOfRange => {
                write!(f, "Date arithmetic left the representable calendar range")
            }
        }
    }
}

impl std::error::Error for DateSpanError {}

/// Selects which endpoint(s) of a span a [`DateSpan::shift`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanEnds {
    /// Only the begin date moves.
    Begin,
    /// Only the end date moves.
    End,
    /// Both dates move.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Bounds {
    begin: NaiveDate,
    end: NaiveDate,
    days: i64,
}

/// A closed, day-granularity interval over calendar dates.
///
/// # Invariants
/// A non-empty span satisfies `end >= begin` and caches
/// `days == (end - begin).num_days() + 1`, so `days >= 1`.
///
/// # Examples
///
/// ```rust
/// # use chrono::NaiveDate;
/// # use gnomon_time::date_span::DateSpan;
///
/// let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let span = DateSpan::single(day);
/// assert_eq!(span.days(), 1);
/// assert_eq!(span.begin(), span.end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateSpan {
    bounds: Option<Bounds>,
}

impl DateSpan {
    /// The canonical empty span.
    pub const EMPTY: DateSpan = DateSpan { bounds: None };

    /// Creates a bounded span without re-validating the invariant.
    ///
    /// The caller must ensure `end >= begin`.
    #[inline]
    fn bounded(begin: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(
            end >= begin,
            "Invalid span: end must not precede begin"
        );
        let days = end.signed_duration_since(begin).num_days() + 1;
        DateSpan {
            bounds: Some(Bounds { begin, end, days }),
        }
    }

    /// Creates a one-day span covering the given date.
    #[inline]
    pub fn single(date: NaiveDate) -> Self {
        Self::bounded(date, date)
    }

    /// Creates a span from explicit begin and end dates.
    ///
    /// # Errors
    ///
    /// Returns [`DateSpanError::EndBeforeBegin`] if `end < begin`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    ///
    /// let begin = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let span = DateSpan::new(begin, end).unwrap();
    /// assert_eq!(span.days(), 10);
    ///
    /// assert!(DateSpan::new(end, begin).is_err());
    /// ```
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self, DateSpanError> {
        if end < begin {
            return Err(DateSpanError::EndBeforeBegin { begin, end });
        }
        Ok(Self::bounded(begin, end))
    }

    /// Creates a span from two instants, discarding their time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`DateSpanError::EndBeforeBegin`] if `end`'s date precedes
    /// `begin`'s date.
    #[inline]
    pub fn from_datetimes(begin: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DateSpanError> {
        Self::new(begin.date(), end.date())
    }

    /// Creates a span from two dates in either order.
    #[inline]
    pub fn unordered(a: NaiveDate, b: NaiveDate) -> Self {
        Self::bounded(min(a, b), max(a, b))
    }

    /// Returns `true` if this is the empty span.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns the first date of the span, or `None` if empty.
    #[inline]
    pub fn begin(&self) -> Option<NaiveDate> {
        self.bounds.map(|b| b.begin)
    }

    /// Returns the last date of the span, or `None` if empty.
    #[inline]
    pub fn end(&self) -> Option<NaiveDate> {
        self.bounds.map(|b| b.end)
    }

    /// Returns the number of days in the span (zero if empty).
    #[inline]
    pub fn days(&self) -> i64 {
        self.bounds.map_or(0, |b| b.days)
    }

    /// Returns `true` if the span covers `date`.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds
            .is_some_and(|b| b.begin <= date && date <= b.end)
    }

    /// Returns `true` if the span begins strictly after `date`.
    #[inline]
    pub fn begins_after(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.begin > date)
    }

    /// Returns `true` if the span begins strictly before `date`.
    #[inline]
    pub fn begins_before(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.begin < date)
    }

    /// Returns `true` if the span ends strictly after `date`.
    #[inline]
    pub fn ends_after(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.end > date)
    }

    /// Returns `true` if the span ends strictly before `date`.
    #[inline]
    pub fn ends_before(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.end < date)
    }

    /// Returns `true` if the entire span lies strictly after `date`.
    #[inline]
    pub fn is_after(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.begin > date)
    }

    /// Returns `true` if the entire span lies strictly before `date`.
    #[inline]
    pub fn is_before(&self, date: NaiveDate) -> bool {
        self.bounds.is_some_and(|b| b.end < date)
    }

    /// Returns `true` if this span begins after `other` begins.
    pub fn begins_after_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.begin > b.begin,
            _ => false,
        }
    }

    /// Returns `true` if this span begins before `other` begins.
    pub fn begins_before_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.begin < b.begin,
            _ => false,
        }
    }

    /// Returns `true` if this span ends after `other` ends.
    pub fn ends_after_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.end > b.end,
            _ => false,
        }
    }

    /// Returns `true` if this span ends before `other` ends.
    pub fn ends_before_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.end < b.end,
            _ => false,
        }
    }

    /// Returns `true` if the entire span lies strictly after `other`.
    pub fn is_after_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.begin > b.end,
            _ => false,
        }
    }

    /// Returns `true` if the entire span lies strictly before `other`.
    pub fn is_before_span(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.end < b.begin,
            _ => false,
        }
    }

    /// Returns `true` if this span fully contains `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let outer = DateSpan::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
    /// let inner = DateSpan::new(d(2024, 1, 10), d(2024, 1, 20)).unwrap();
    /// assert!(outer.includes(&inner));
    /// assert!(!inner.includes(&outer));
    /// ```
    pub fn includes(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.begin <= b.begin && a.end >= b.end,
            _ => false,
        }
    }

    /// Returns `true` if the two spans share at least one day.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.begin <= b.end && a.end >= b.begin,
            _ => false,
        }
    }

    /// Returns `true` if this span ends on the day before `other` begins.
    pub fn is_immediately_before(&self, other: &DateSpan) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.end.succ_opt() == Some(b.begin),
            _ => false,
        }
    }

    /// Returns `true` if this span begins on the day after `other` ends.
    pub fn is_immediately_after(&self, other: &DateSpan) -> bool {
        other.is_immediately_before(self)
    }

    /// Returns `true` if the two spans touch without overlapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let january = DateSpan::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
    /// let february = DateSpan::new(d(2024, 2, 1), d(2024, 2, 29)).unwrap();
    /// assert!(january.is_adjacent_to(&february));
    /// assert!(february.is_adjacent_to(&january));
    /// ```
    pub fn is_adjacent_to(&self, other: &DateSpan) -> bool {
        self.is_immediately_before(other) || self.is_immediately_after(other)
    }

    /// Returns the intersection of the two spans.
    ///
    /// Structurally equal operands short-circuit to `self`; otherwise the
    /// result is the shared days, or [`DateSpan::EMPTY`] when the spans do
    /// not overlap or either operand is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let a = DateSpan::new(d(2024, 1, 1), d(2024, 1, 20)).unwrap();
    /// let b = DateSpan::new(d(2024, 1, 10), d(2024, 1, 31)).unwrap();
    /// let shared = a.overlap(&b);
    /// assert_eq!(shared.begin(), Some(d(2024, 1, 10)));
    /// assert_eq!(shared.end(), Some(d(2024, 1, 20)));
    /// ```
    pub fn overlap(&self, other: &DateSpan) -> DateSpan {
        if self == other {
            return *self;
        }
        let (Some(a), Some(b)) = (self.bounds, other.bounds) else {
            return Self::EMPTY;
        };
        if a.begin > b.end || a.end < b.begin {
            return Self::EMPTY;
        }
        Self::bounded(max(a.begin, b.begin), min(a.end, b.end))
    }

    /// Intersects every span in the sequence.
    ///
    /// An empty sequence yields [`DateSpan::EMPTY`].
    pub fn overlap_all<I>(spans: I) -> DateSpan
    where
        I: IntoIterator<Item = DateSpan>,
    {
        let mut iter = spans.into_iter();
        let Some(first) = iter.next() else {
            return Self::EMPTY;
        };
        iter.fold(first, |acc, next| acc.overlap(&next))
    }

    /// Returns the bounding hull of the two spans.
    ///
    /// This is **not** a set union: combining disjoint, non-adjacent spans
    /// yields a span that also covers the days between them. An empty
    /// operand is absorbed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let a = DateSpan::new(d(2024, 1, 1), d(2024, 1, 5)).unwrap();
    /// let b = DateSpan::new(d(2024, 1, 20), d(2024, 1, 25)).unwrap();
    /// let hull = a.combine(&b);
    /// assert_eq!(hull.days(), 25);
    /// assert!(hull.contains(d(2024, 1, 10))); // a day belonging to neither input
    /// ```
    pub fn combine(&self, other: &DateSpan) -> DateSpan {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Self::bounded(min(a.begin, b.begin), max(a.end, b.end)),
            (Some(_), None) => *self,
            (None, _) => *other,
        }
    }

    /// Combines every span in the sequence into one bounding hull.
    pub fn combine_all<I>(spans: I) -> DateSpan
    where
        I: IntoIterator<Item = DateSpan>,
    {
        spans
            .into_iter()
            .fold(Self::EMPTY, |acc, next| acc.combine(&next))
    }

    /// Returns the strict gap between two spans: the days after `first`
    /// ends and before `second` begins.
    ///
    /// The result is [`DateSpan::EMPTY`] when either operand is empty, the
    /// operands are equal, or they overlap or touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let a = DateSpan::new(d(2024, 1, 1), d(2024, 1, 5)).unwrap();
    /// let b = DateSpan::new(d(2024, 1, 10), d(2024, 1, 15)).unwrap();
    /// let gap = DateSpan::gap_between(&a, &b);
    /// assert_eq!(gap.begin(), Some(d(2024, 1, 6)));
    /// assert_eq!(gap.end(), Some(d(2024, 1, 9)));
    /// ```
    pub fn gap_between(first: &DateSpan, second: &DateSpan) -> DateSpan {
        let (Some(a), Some(b)) = (first.bounds, second.bounds) else {
            return Self::EMPTY;
        };
        if first == second || a.end >= b.begin {
            return Self::EMPTY;
        }
        let (Some(begin), Some(end)) = (a.end.succ_opt(), b.begin.pred_opt()) else {
            return Self::EMPTY;
        };
        if begin > end {
            // The spans touch; there is no day strictly between them.
            return Self::EMPTY;
        }
        Self::bounded(begin, end)
    }

    /// Returns the dates in the strict gap between two spans.
    #[inline]
    pub fn dates_between(first: &DateSpan, second: &DateSpan) -> Dates {
        Self::gap_between(first, second).dates()
    }

    /// Moves the selected endpoint(s) by the given year, month, and day
    /// deltas, applied in that order with calendar clamping.
    ///
    /// Shifting the empty span is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DateSpanError::EndBeforeBegin`] if the shift leaves the
    /// end before the begin, and [`DateSpanError::DateOutOfRange`] if it
    /// leaves the representable calendar range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::{DateSpan, SpanEnds};
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let span = DateSpan::new(d(2024, 1, 10), d(2024, 1, 20)).unwrap();
    /// let moved = span.shift(SpanEnds::Both, 0, 1, 5).unwrap();
    /// assert_eq!(moved.begin(), Some(d(2024, 2, 15)));
    /// assert_eq!(moved.end(), Some(d(2024, 2, 25)));
    /// ```
    pub fn shift(
        &self,
        ends: SpanEnds,
        years: i32,
        months: i32,
        days: i64,
    ) -> Result<DateSpan, DateSpanError> {
        let Some(b) = self.bounds else {
            return Ok(Self::EMPTY);
        };
        let begin = match ends {
            SpanEnds::Begin | SpanEnds::Both => shift_date(b.begin, years, months, days)?,
            SpanEnds::End => b.begin,
        };
        let end = match ends {
            SpanEnds::End | SpanEnds::Both => shift_date(b.end, years, months, days)?,
            SpanEnds::Begin => b.end,
        };
        Self::new(begin, end)
    }

    /// Partitions the span into consecutive chunks of `chunk_days` days.
    ///
    /// The final chunk may be shorter. A chunk size of one or less yields
    /// the span unchanged as a single-element result; the empty span
    /// yields no chunks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let span = DateSpan::new(d(2024, 1, 1), d(2024, 1, 7)).unwrap();
    /// let chunks = span.split(3);
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[2].days(), 1);
    /// ```
    pub fn split(&self, chunk_days: i64) -> Vec<DateSpan> {
        let Some(b) = self.bounds else {
            return Vec::new();
        };
        if chunk_days <= 1 {
            return vec![*self];
        }
        let mut chunks = Vec::new();
        let mut start = b.begin;
        loop {
            let chunk_end = TimeDelta::try_days(chunk_days - 1)
                .and_then(|delta| start.checked_add_signed(delta))
                .map_or(b.end, |date| min(date, b.end));
            chunks.push(Self::bounded(start, chunk_end));
            match chunk_end.succ_opt() {
                Some(next) if next <= b.end => start = next,
                _ => break,
            }
        }
        chunks
    }

    /// Partitions the span into one sub-span per calendar month.
    pub fn split_by_month(&self) -> Vec<DateSpan> {
        self.split_groups(|date| (date.year(), date.month()))
    }

    /// Partitions the span into one sub-span per calendar year.
    pub fn split_by_year(&self) -> Vec<DateSpan> {
        self.split_groups(|date| date.year())
    }

    /// Groups consecutive dates by `key` and emits one span per group.
    fn split_groups<K, F>(&self, key: F) -> Vec<DateSpan>
    where
        K: PartialEq,
        F: Fn(NaiveDate) -> K,
    {
        let mut groups = Vec::new();
        let mut dates = self.dates();
        let Some(first) = dates.next() else {
            return groups;
        };
        let mut group_begin = first;
        let mut group_end = first;
        let mut group_key = key(first);
        for date in dates {
            let next_key = key(date);
            if next_key == group_key {
                group_end = date;
            } else {
                groups.push(Self::bounded(group_begin, group_end));
                group_begin = date;
                group_end = date;
                group_key = next_key;
            }
        }
        groups.push(Self::bounded(group_begin, group_end));
        groups
    }

    /// Creates an iterator over every date in the span.
    ///
    /// The iterator is restartable: each call starts a fresh pass. The
    /// empty span yields an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use gnomon_time::date_span::DateSpan;
    /// # let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    ///
    /// let span = DateSpan::new(d(2024, 1, 1), d(2024, 1, 3)).unwrap();
    /// let dates: Vec<_> = span.dates().collect();
    /// assert_eq!(dates, vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3)]);
    /// ```
    pub fn dates(&self) -> Dates {
        match self.bounds {
            Some(b) => Dates {
                front: b.begin,
                back: b.end,
                exhausted: false,
            },
            None => Dates::empty(),
        }
    }

    /// Returns the span's dates falling on the given weekday.
    pub fn dates_on(self, weekday: Weekday) -> impl Iterator<Item = NaiveDate> {
        self.dates().filter(move |date| date.weekday() == weekday)
    }

    /// Returns the span's dates falling on any of the given weekdays.
    pub fn dates_on_any(self, weekdays: &[Weekday]) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates()
            .filter(move |date| weekdays.contains(&date.weekday()))
    }

    /// Returns the span's dates matching every given criterion.
    ///
    /// A criterion given as `None` matches every date.
    pub fn dates_matching(
        self,
        weekday: Option<Weekday>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> impl Iterator<Item = NaiveDate> {
        self.dates().filter(move |date| {
            weekday.is_none_or(|w| date.weekday() == w)
                && year.is_none_or(|y| date.year() == y)
                && month.is_none_or(|m| date.month() == m)
        })
    }

    /// Counts the span's days, optionally skipping Saturdays and Sundays.
    pub fn total_days(&self, include_weekends: bool) -> usize {
        if include_weekends {
            self.dates().len()
        } else {
            self.dates()
                .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
                .count()
        }
    }

    /// Counts the span's days falling on the given weekday.
    #[inline]
    pub fn total_days_on(&self, weekday: Weekday) -> usize {
        self.dates_on(weekday).count()
    }

    /// Counts the span's days falling on any of the given weekdays.
    #[inline]
    pub fn total_days_on_any(&self, weekdays: &[Weekday]) -> usize {
        self.dates_on_any(weekdays).count()
    }

    /// Picks a date from the span uniformly at random.
    ///
    /// Returns `None` for the empty span and the single date for a one-day
    /// span. The random source is an explicit parameter, so callers keep
    /// full control over determinism.
    pub fn random_date<R>(&self, rng: &mut R) -> Option<NaiveDate>
    where
        R: Rng + ?Sized,
    {
        let b = self.bounds?;
        if b.days == 1 {
            return Some(b.begin);
        }
        let offset = rng.random_range(0..b.days);
        b.begin.checked_add_signed(TimeDelta::days(offset))
    }

    /// Picks a date uniformly at random between two dates in either order
    /// (both inclusive).
    pub fn random_between<R>(a: NaiveDate, b: NaiveDate, rng: &mut R) -> NaiveDate
    where
        R: Rng + ?Sized,
    {
        Self::unordered(a, b)
            .random_date(rng)
            .expect("a normalized span is never empty")
    }
}

/// Applies year, month, and day deltas to a date, in that order.
///
/// Year and month arithmetic clamps to the end of the target month, so
/// shifting Jan 31 by one month lands on the last day of February.
fn shift_date(
    date: NaiveDate,
    years: i32,
    months: i32,
    days: i64,
) -> Result<NaiveDate, DateSpanError> {
    let with_years = add_signed_months(date, i64::from(years) * 12)?;
    let with_months = add_signed_months(with_years, i64::from(months))?;
    let delta = TimeDelta::try_days(days).ok_or(DateSpanError::DateOutOfRange)?;
    with_months
        .checked_add_signed(delta)
        .ok_or(DateSpanError::DateOutOfRange)
}

fn add_signed_months(date: NaiveDate, months: i64) -> Result<NaiveDate, DateSpanError> {
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| DateSpanError::DateOutOfRange)?;
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(DateSpanError::DateOutOfRange)
}

/// An iterator over the dates contained in a [`DateSpan`].
#[derive(Debug, Clone)]
pub struct Dates {
    front: NaiveDate,
    back: NaiveDate,
    exhausted: bool,
}

impl Dates {
    fn empty() -> Self {
        Dates {
            front: NaiveDate::MIN,
            back: NaiveDate::MIN,
            exhausted: true,
        }
    }
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let date = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = date
                .succ_opt()
                .expect("front is below back, so a successor exists");
        }
        Some(date)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Dates {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let date = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = date
                .pred_opt()
                .expect("back is above front, so a predecessor exists");
        }
        Some(date)
    }
}

impl ExactSizeIterator for Dates {
    fn len(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        let days = self.back.signed_duration_since(self.front).num_days() + 1;
        days.try_into()
            .expect("Dates: remaining length exceeds usize::MAX")
    }
}

impl FusedIterator for Dates {}

impl IntoIterator for DateSpan {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Self::IntoIter {
        self.dates()
    }
}

impl IntoIterator for &DateSpan {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Self::IntoIter {
        self.dates()
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some(b) => write!(f, "{} {}", b.begin, b.end),
            None => Ok(()),
        }
    }
}
