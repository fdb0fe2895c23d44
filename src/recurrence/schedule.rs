//! Recurring schedule: next occurrence and occurrences within a window
//!
//! A schedule keeps no cursor. Every query walks forward from `start_date`,
//! stepping one period at a time, so a month-end start that gets clamped once
//! (Jan 31 -> Feb 29) continues from the clamped day (Mar 29).

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use super::frequency::Frequency;

/// Definition of a recurring transaction schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSchedule {
    pub start_date: NaiveDate,
    pub frequency: Frequency,
    /// Last date an occurrence may fall on; `None` repeats forever
    #[serde(default)]
    pub recurrence_end: Option<NaiveDate>,
}

impl RecurrenceSchedule {
    pub fn new(start_date: NaiveDate, frequency: Frequency) -> Self {
        Self {
            start_date,
            frequency,
            recurrence_end: None,
        }
    }

    /// Bound the schedule so no occurrence falls after `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.recurrence_end = Some(end);
        self
    }

    /// All occurrences in ascending order, starting with `start_date`
    ///
    /// The iterator is infinite for an unbounded schedule; bound it with
    /// `take_while` or similar.
    pub fn occurrences(&self) -> Occurrences {
        Occurrences {
            next: Some(self.start_date),
            frequency: self.frequency,
            end: self.recurrence_end,
        }
    }

    /// First occurrence strictly after `after`, or `None` once the schedule has ended
    ///
    /// A schedule that has not started yet returns `start_date`.
    pub fn next_occurrence(&self, after: NaiveDate) -> Option<NaiveDate> {
        let next = self.occurrences().find(|date| *date > after);
        if next.is_none() {
            debug!(
                "Schedule starting {} ({}) has no occurrence after {}",
                self.start_date, self.frequency, after
            );
        }
        next
    }

    /// Every occurrence `d` with `from <= d <= to`, in ascending order
    ///
    /// An inverted window yields an empty list.
    pub fn occurrences_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        if from > to {
            return Vec::new();
        }

        self.occurrences()
            .take_while(|date| *date <= to)
            .filter(|date| *date >= from)
            .collect()
    }

    /// Whether no occurrence remains after `as_of`
    pub fn has_ended(&self, as_of: NaiveDate) -> bool {
        self.next_occurrence(as_of).is_none()
    }

    /// Occurrences that are due to be materialized as of `as_of`
    ///
    /// Returns every occurrence on or before `as_of` that falls strictly after
    /// `last_processed`, or every occurrence from the start when nothing has
    /// been processed yet.
    pub fn due_occurrences(
        &self,
        last_processed: Option<NaiveDate>,
        as_of: NaiveDate,
    ) -> Vec<NaiveDate> {
        self.occurrences()
            .take_while(|date| *date <= as_of)
            .filter(|date| last_processed.map_or(true, |processed| *date > processed))
            .collect()
    }
}

/// Iterator over the occurrence dates of a [`RecurrenceSchedule`]
#[derive(Debug, Clone)]
pub struct Occurrences {
    next: Option<NaiveDate>,
    frequency: Frequency,
    end: Option<NaiveDate>,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;

        if matches!(self.end, Some(end) if current > end) {
            self.next = None;
            return None;
        }

        self.next = self.frequency.advance(current);
        Some(current)
    }
}

/// Next occurrence strictly after `after` for the given schedule definition
pub fn get_next_occurrence_date(
    start_date: NaiveDate,
    frequency: Frequency,
    recurrence_end: Option<NaiveDate>,
    after: NaiveDate,
) -> Option<NaiveDate> {
    RecurrenceSchedule {
        start_date,
        frequency,
        recurrence_end,
    }
    .next_occurrence(after)
}

/// Occurrences within `[from, to]` for the given schedule definition
pub fn get_occurrences_in_range(
    start_date: NaiveDate,
    frequency: Frequency,
    recurrence_end: Option<NaiveDate>,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<NaiveDate> {
    RecurrenceSchedule {
        start_date,
        frequency,
        recurrence_end,
    }
    .occurrences_in_range(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_is_strictly_after() {
        let next = get_next_occurrence_date(ymd(2024, 1, 1), Frequency::Monthly, None, ymd(2024, 1, 1));
        assert_eq!(next, Some(ymd(2024, 2, 1)));

        let next = get_next_occurrence_date(ymd(2024, 1, 1), Frequency::Weekly, None, ymd(2024, 1, 10));
        assert_eq!(next, Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_next_past_end_is_none() {
        let next = get_next_occurrence_date(
            ymd(2024, 1, 1),
            Frequency::Monthly,
            Some(ymd(2024, 1, 15)),
            ymd(2024, 1, 1),
        );
        assert_eq!(next, None);
    }

    #[test]
    fn test_next_on_end_date_is_included() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Monthly).until(ymd(2024, 3, 1));
        assert_eq!(schedule.next_occurrence(ymd(2024, 2, 15)), Some(ymd(2024, 3, 1)));
        assert_eq!(schedule.next_occurrence(ymd(2024, 3, 1)), None);
    }

    #[test]
    fn test_next_before_start_returns_start() {
        let schedule = RecurrenceSchedule::new(ymd(2025, 6, 1), Frequency::Yearly);
        assert_eq!(schedule.next_occurrence(ymd(2024, 1, 1)), Some(ymd(2025, 6, 1)));
    }

    #[test]
    fn test_end_before_start() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 5, 1), Frequency::Daily).until(ymd(2024, 4, 1));
        assert_eq!(schedule.next_occurrence(ymd(2024, 1, 1)), None);
        assert!(schedule.occurrences_in_range(ymd(2024, 1, 1), ymd(2024, 12, 31)).is_empty());
        assert!(schedule.has_ended(ymd(2024, 1, 1)));
    }

    #[test]
    fn test_range_monthly() {
        let dates = get_occurrences_in_range(
            ymd(2024, 1, 1),
            Frequency::Monthly,
            None,
            ymd(2024, 1, 1),
            ymd(2024, 4, 1),
        );
        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 3, 1), ymd(2024, 4, 1)]);
    }

    #[test]
    fn test_range_start_before_window() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 3), Frequency::Weekly);
        let dates = schedule.occurrences_in_range(ymd(2024, 2, 1), ymd(2024, 2, 29));
        assert_eq!(dates, vec![ymd(2024, 2, 7), ymd(2024, 2, 14), ymd(2024, 2, 21), ymd(2024, 2, 28)]);
    }

    #[test]
    fn test_range_start_after_window() {
        let schedule = RecurrenceSchedule::new(ymd(2025, 1, 1), Frequency::Daily);
        assert!(schedule.occurrences_in_range(ymd(2024, 1, 1), ymd(2024, 12, 31)).is_empty());
    }

    #[test]
    fn test_range_respects_end() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Daily).until(ymd(2024, 1, 3));
        let dates = schedule.occurrences_in_range(ymd(2023, 12, 1), ymd(2024, 2, 1));
        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Daily);
        assert!(schedule.occurrences_in_range(ymd(2024, 3, 1), ymd(2024, 2, 1)).is_empty());
    }

    #[test]
    fn test_month_end_start_follows_clamped_day() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 31), Frequency::Monthly);
        let dates = schedule.occurrences_in_range(ymd(2024, 1, 1), ymd(2024, 4, 30));
        assert_eq!(dates, vec![ymd(2024, 1, 31), ymd(2024, 2, 29), ymd(2024, 3, 29), ymd(2024, 4, 29)]);
    }

    #[test]
    fn test_has_ended() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Yearly).until(ymd(2026, 1, 1));
        assert!(!schedule.has_ended(ymd(2025, 6, 1)));
        assert!(schedule.has_ended(ymd(2026, 1, 1)));

        let unbounded = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Yearly);
        assert!(!unbounded.has_ended(ymd(2100, 1, 1)));
    }

    #[test]
    fn test_due_occurrences() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Weekly);

        let due = schedule.due_occurrences(None, ymd(2024, 1, 15));
        assert_eq!(due, vec![ymd(2024, 1, 1), ymd(2024, 1, 8), ymd(2024, 1, 15)]);

        let due = schedule.due_occurrences(Some(ymd(2024, 1, 8)), ymd(2024, 1, 20));
        assert_eq!(due, vec![ymd(2024, 1, 15)]);

        assert!(schedule.due_occurrences(Some(ymd(2024, 1, 15)), ymd(2024, 1, 21)).is_empty());
    }

    #[test]
    fn test_occurrences_iterator_stops_at_end() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Monthly).until(ymd(2024, 3, 15));
        let all: Vec<NaiveDate> = schedule.occurrences().collect();
        assert_eq!(all, vec![ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 3, 1)]);
    }

    #[test]
    fn test_serde_shape() {
        let schedule = RecurrenceSchedule::new(ymd(2024, 1, 1), Frequency::Monthly).until(ymd(2024, 6, 1));
        let json = serde_json::to_value(schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startDate": "2024-01-01",
                "frequency": "MONTHLY",
                "recurrenceEnd": "2024-06-01"
            })
        );
    }
}
