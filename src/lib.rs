//! Wealth Projection - Investment growth and recurring-schedule computation for personal finance
//!
//! This library provides:
//! - Compound growth of a principal with optional periodic contributions
//! - Milestone search (years until 2x, 5x, 10x, 20x the principal)
//! - Yearly growth series for charts, per investment and aggregated
//! - Next-occurrence and in-range expansion of recurring schedules
//!
//! All computation is pure and synchronous; inputs are assumed validated by the caller.

pub mod error;
pub mod projection;
pub mod recurrence;

// Re-export commonly used types
pub use error::{parse_date, FinanceError, Result};
pub use projection::{
    ContributionInterval, GrowthPoint, Milestone, MilestoneSearch, ProjectionInput,
};
pub use recurrence::{Frequency, RecurrenceSchedule};
