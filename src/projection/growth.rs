//! Compound growth math for a lump sum plus an optional contribution stream
//!
//! Growth is annual compounding evaluated at fractional years:
//! `value = amount * (1 + annual_rate)^years`.
//!
//! Contributions follow an ordinary annuity: the n-th contribution lands at the
//! end of the n-th interval and grows for the time remaining to the horizon.

use chrono::NaiveDate;
use super::interval::ContributionInterval;

/// Days per year used to turn a date span into fractional years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Future value of a lump sum: `principal * (1 + annual_rate)^years`
pub fn future_value(principal: f64, annual_rate: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate).powf(years)
}

/// Number of whole contribution intervals that fit in `years`
///
/// Returns 0 when less than one full interval has elapsed.
pub fn contribution_count(years: f64, interval: ContributionInterval) -> u32 {
    let periods = (years / interval.year_fraction()).floor();
    if periods.is_finite() && periods > 0.0 {
        periods as u32
    } else {
        0
    }
}

/// Future value of a stream of end-of-interval contributions
///
/// The n-th contribution (n = 1..=N, N = floor(years / delta)) grows for
/// `max(years - n * delta, 0)` years. A remaining time that would go negative
/// through rounding is clamped to zero growth, so the contribution still counts
/// at face value.
pub fn future_value_recurring(
    contribution: f64,
    annual_rate: f64,
    years: f64,
    interval: ContributionInterval,
) -> f64 {
    let delta = interval.year_fraction();
    let periods = contribution_count(years, interval);

    (1..=periods)
        .map(|n| {
            let remaining = (years - n as f64 * delta).max(0.0);
            future_value(contribution, annual_rate, remaining)
        })
        .sum()
}

/// Total projected value of principal plus contributions at `years`
///
/// Contributions only count when `contribution > 0` and an interval is set.
/// A contribution without an interval is ignored.
pub fn total_projected_value(
    principal: f64,
    annual_rate: f64,
    years: f64,
    contribution: f64,
    interval: Option<ContributionInterval>,
) -> f64 {
    let lump_sum = future_value(principal, annual_rate, years);

    match interval {
        Some(interval) if contribution > 0.0 => {
            lump_sum + future_value_recurring(contribution, annual_rate, years, interval)
        }
        _ => lump_sum,
    }
}

/// Principal plus the face value of every contribution made by `years`
///
/// Counts contributions exactly as [`future_value_recurring`] does, so
/// `total_projected_value - total_invested` is the growth.
pub fn total_invested(
    principal: f64,
    contribution: f64,
    years: f64,
    interval: Option<ContributionInterval>,
) -> f64 {
    match interval {
        Some(interval) if contribution > 0.0 => {
            principal + contribution * contribution_count(years, interval) as f64
        }
        _ => principal,
    }
}

/// Fractional years between `start` and `as_of`, zero if `as_of` is not after `start`
pub fn years_elapsed(start: NaiveDate, as_of: NaiveDate) -> f64 {
    let days = (as_of - start).num_days();
    if days <= 0 {
        0.0
    } else {
        days as f64 / DAYS_PER_YEAR
    }
}

/// Round half away from zero to a fixed number of decimals
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
