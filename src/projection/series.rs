//! Yearly growth series for chart rendering

use serde::{Deserialize, Serialize};
use super::growth::{future_value, round_to, total_projected_value};
use super::input::ProjectionInput;
use super::interval::ContributionInterval;

/// One point of a growth chart, values rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year: u32,
    /// Value of the principal alone, without contributions
    pub principal_only: f64,
    /// Principal plus contributions
    pub total: f64,
}

impl GrowthPoint {
    /// Portion of the total that comes from contributions and their growth
    pub fn contribution_share(&self) -> f64 {
        round_to(self.total - self.principal_only, 2)
    }
}

/// Build one point per whole year from 0 to `max_years` inclusive
pub fn build_growth_series(
    principal: f64,
    annual_rate: f64,
    max_years: u32,
    contribution: f64,
    interval: Option<ContributionInterval>,
) -> Vec<GrowthPoint> {
    (0..=max_years)
        .map(|year| {
            let years = year as f64;
            GrowthPoint {
                year,
                principal_only: round_to(future_value(principal, annual_rate, years), 2),
                total: round_to(
                    total_projected_value(principal, annual_rate, years, contribution, interval),
                    2,
                ),
            }
        })
        .collect()
}

/// Sum the growth series of several investments year by year
///
/// Each investment's series is rounded first, then the per-year sums are
/// rounded again. An empty slice yields `max_years + 1` zero points.
pub fn aggregate_growth_series(inputs: &[ProjectionInput], max_years: u32) -> Vec<GrowthPoint> {
    let mut aggregated: Vec<GrowthPoint> = (0..=max_years)
        .map(|year| GrowthPoint {
            year,
            principal_only: 0.0,
            total: 0.0,
        })
        .collect();

    for input in inputs {
        for (agg, point) in aggregated.iter_mut().zip(input.growth_series(max_years)) {
            agg.principal_only += point.principal_only;
            agg.total += point.total;
        }
    }

    for agg in &mut aggregated {
        agg.principal_only = round_to(agg.principal_only, 2);
        agg.total = round_to(agg.total, 2);
    }

    aggregated
}
