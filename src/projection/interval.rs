//! Contribution interval for recurring deposits

use crate::error::FinanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a recurring contribution lands in the investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionInterval {
    Monthly,
    Quarterly,
    Yearly,
}

impl ContributionInterval {
    /// Length of one interval as a fraction of a year
    pub fn year_fraction(&self) -> f64 {
        match self {
            ContributionInterval::Monthly => 1.0 / 12.0,
            ContributionInterval::Quarterly => 1.0 / 4.0,
            ContributionInterval::Yearly => 1.0,
        }
    }

    /// Number of contributions per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            ContributionInterval::Monthly => 12,
            ContributionInterval::Quarterly => 4,
            ContributionInterval::Yearly => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionInterval::Monthly => "MONTHLY",
            ContributionInterval::Quarterly => "QUARTERLY",
            ContributionInterval::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for ContributionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionInterval {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MONTHLY" => Ok(ContributionInterval::Monthly),
            "QUARTERLY" => Ok(ContributionInterval::Quarterly),
            "YEARLY" => Ok(ContributionInterval::Yearly),
            _ => Err(FinanceError::UnknownInterval(s.to_string())),
        }
    }
}
