//! Milestone search: how many years until an investment reaches N times its principal

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use super::growth::{round_to, total_projected_value};
use super::interval::ContributionInterval;

/// Default search horizon in years
pub const DEFAULT_MAX_YEARS: f64 = 50.0;

/// Target multiples of principal, in ascending order
pub const MILESTONE_MULTIPLES: [u32; 4] = [2, 5, 10, 20];

/// Fixed bisection iteration count
pub const BISECTION_ITERATIONS: u32 = 50;

/// Years needed to reach `multiple` times the principal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub multiple: u32,
    /// Rounded to one decimal place
    pub years: f64,
}

/// Configuration for a milestone search
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneSearch {
    /// Upper bound of the search bracket; milestones beyond it are omitted
    pub max_years: f64,

    /// Number of bisection steps over `[0, max_years]`
    pub iterations: u32,

    /// Multiples of principal to search for, reported in this order
    pub multiples: Vec<u32>,
}

impl Default for MilestoneSearch {
    fn default() -> Self {
        Self {
            max_years: DEFAULT_MAX_YEARS,
            iterations: BISECTION_ITERATIONS,
            multiples: MILESTONE_MULTIPLES.to_vec(),
        }
    }
}

impl MilestoneSearch {
    /// Default search with a custom horizon
    pub fn with_max_years(max_years: f64) -> Self {
        Self {
            max_years,
            ..Default::default()
        }
    }
}

/// Calculate the 2x, 5x, 10x and 20x milestones within `max_years`
///
/// Multiples that cannot be reached within the horizon are left out, so the
/// result may be shorter than four entries or empty.
pub fn calculate_milestones(
    principal: f64,
    annual_rate: f64,
    contribution: f64,
    interval: Option<ContributionInterval>,
    max_years: f64,
) -> Vec<Milestone> {
    calculate_milestones_with(
        principal,
        annual_rate,
        contribution,
        interval,
        &MilestoneSearch::with_max_years(max_years),
    )
}

/// Calculate milestones with an explicit search configuration
pub fn calculate_milestones_with(
    principal: f64,
    annual_rate: f64,
    contribution: f64,
    interval: Option<ContributionInterval>,
    search: &MilestoneSearch,
) -> Vec<Milestone> {
    // A zero principal has no meaningful multiple
    if principal <= 0.0 {
        debug!("No milestones for non-positive principal {}", principal);
        return Vec::new();
    }

    let value_at = |years: f64| {
        total_projected_value(principal, annual_rate, years, contribution, interval)
    };

    let horizon_value = value_at(search.max_years);

    search
        .multiples
        .iter()
        .filter_map(|&multiple| {
            let target = principal * multiple as f64;

            if horizon_value < target {
                debug!(
                    "Milestone {}x unreachable within {} years (horizon value {:.2} < target {:.2})",
                    multiple, search.max_years, horizon_value, target
                );
                return None;
            }

            let years = solve_years_to_target(&value_at, target, search.max_years, search.iterations);
            trace!("Milestone {}x reached at {:.6} years", multiple, years);

            Some(Milestone {
                multiple,
                years: round_to(years, 1),
            })
        })
        .collect()
}

/// Fixed-iteration bisection for the first time `value_at` reaches `target`
/// over the bracket `[0, max_years]`
fn solve_years_to_target<F>(value_at: &F, target: f64, max_years: f64, iterations: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut low = 0.0_f64;
    let mut high = max_years;

    for _ in 0..iterations {
        let mid = (low + high) / 2.0;
        if value_at(mid) < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    (low + high) / 2.0
}
