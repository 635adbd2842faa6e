//! Reporting horizon for emission aggregation

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting period over which methane volume is aggregated
///
/// Each mode maps to a fixed day-count multiplier applied to the daily
/// emission rate. The recognized tokens at the string boundary are exactly
/// `day`, `month`, and `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// Single day (multiplier 1)
    Day,
    /// 30-day month (multiplier 30)
    Month,
    /// 365-day year (multiplier 365)
    Year,
}

impl Horizon {
    /// All modes, shortest first
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Month, Horizon::Year];

    /// Fixed day-count multiplier for this horizon
    #[inline]
    #[must_use]
    pub const fn day_count(self) -> u32 {
        match self {
            Horizon::Day => 1,
            Horizon::Month => 30,
            Horizon::Year => 365,
        }
    }

    /// Lowercase token used at the string boundary and in display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Horizon::Day => "day",
            Horizon::Month => "month",
            Horizon::Year => "year",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizon {
    type Err = ModelError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Horizon::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(token))
            .ok_or_else(|| ModelError::InvalidHorizon {
                token: token.to_string(),
            })
    }
}
