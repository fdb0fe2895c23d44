//! Date arithmetic for recurring-transaction schedules

mod frequency;
mod schedule;

pub use frequency::{add_frequency, Frequency};
pub use schedule::{
    get_next_occurrence_date, get_occurrences_in_range, Occurrences, RecurrenceSchedule,
};
