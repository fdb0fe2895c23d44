//! Projection input for a single investment

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::growth::{
    future_value, future_value_recurring, total_invested, total_projected_value, years_elapsed,
};
use super::interval::ContributionInterval;
use super::milestones::{calculate_milestones_with, Milestone, MilestoneSearch};
use super::series::{build_growth_series, GrowthPoint};

/// A single investment: principal, fixed annual rate, horizon, and an optional
/// recurring contribution
///
/// A contribution without an interval has no effect on any projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub principal: f64,

    /// Decimal fraction, e.g. 0.12 for 12%
    pub annual_rate: f64,

    /// Horizon in years, may be fractional
    pub years: f64,

    #[serde(default)]
    pub contribution: f64,

    #[serde(default)]
    pub interval: Option<ContributionInterval>,
}

impl ProjectionInput {
    /// Lump-sum investment with no recurring contribution
    pub fn new(principal: f64, annual_rate: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            contribution: 0.0,
            interval: None,
        }
    }

    /// Add a recurring contribution
    pub fn with_contribution(mut self, contribution: f64, interval: ContributionInterval) -> Self {
        self.contribution = contribution;
        self.interval = Some(interval);
        self
    }

    /// Whether the contribution stream takes part in projections
    pub fn has_contributions(&self) -> bool {
        self.contribution > 0.0 && self.interval.is_some()
    }

    /// Future value of the principal alone at the input horizon
    pub fn principal_value(&self) -> f64 {
        future_value(self.principal, self.annual_rate, self.years)
    }

    /// Future value of the contribution stream alone at the input horizon
    pub fn contributions_value(&self) -> f64 {
        match self.interval {
            Some(interval) if self.contribution > 0.0 => {
                future_value_recurring(self.contribution, self.annual_rate, self.years, interval)
            }
            _ => 0.0,
        }
    }

    /// Total projected value at the input horizon
    pub fn total_value(&self) -> f64 {
        self.value_at(self.years)
    }

    /// Total projected value at an arbitrary number of years
    pub fn value_at(&self, years: f64) -> f64 {
        total_projected_value(
            self.principal,
            self.annual_rate,
            years,
            self.contribution,
            self.interval,
        )
    }

    /// Total projected value for the time elapsed between `start` and `as_of`
    pub fn value_as_of(&self, start: NaiveDate, as_of: NaiveDate) -> f64 {
        self.value_at(years_elapsed(start, as_of))
    }

    /// Principal plus face value of contributions made by the input horizon
    pub fn total_invested(&self) -> f64 {
        total_invested(self.principal, self.contribution, self.years, self.interval)
    }

    pub fn milestones(&self, max_years: f64) -> Vec<Milestone> {
        self.milestones_with(&MilestoneSearch::with_max_years(max_years))
    }

    pub fn milestones_with(&self, search: &MilestoneSearch) -> Vec<Milestone> {
        calculate_milestones_with(
            self.principal,
            self.annual_rate,
            self.contribution,
            self.interval,
            search,
        )
    }

    pub fn growth_series(&self, max_years: u32) -> Vec<GrowthPoint> {
        build_growth_series(
            self.principal,
            self.annual_rate,
            max_years,
            self.contribution,
            self.interval,
        )
    }
}
