//! Investment growth projection: compound growth, milestones, and chart series

mod interval;
mod growth;
mod input;
mod milestones;
mod series;

pub use interval::ContributionInterval;
pub use growth::{
    contribution_count, future_value, future_value_recurring, total_invested,
    total_projected_value, years_elapsed, DAYS_PER_YEAR,
};
pub use input::ProjectionInput;
pub use milestones::{
    calculate_milestones, calculate_milestones_with, Milestone, MilestoneSearch,
    BISECTION_ITERATIONS, DEFAULT_MAX_YEARS, MILESTONE_MULTIPLES,
};
pub use series::{aggregate_growth_series, build_growth_series, GrowthPoint};
