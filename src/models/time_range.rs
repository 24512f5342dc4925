use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Chart time range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    /// One trading day, 5-minute buckets
    Day1,
    /// Five trading days, 10-minute buckets
    Day5,
    /// One month, daily buckets
    Month1,
    /// One year, daily buckets
    Year1,
    /// Five years, daily buckets
    Year5,
}

impl TimeRange {
    /// Wire representation used by the `timeRange` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day1 => "1D",
            TimeRange::Day5 => "5D",
            TimeRange::Month1 => "1M",
            TimeRange::Year1 => "1Y",
            TimeRange::Year5 => "5Y",
        }
    }

    /// Number of calendar days covered by this range
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Day1 => 1,
            TimeRange::Day5 => 5,
            TimeRange::Month1 => 30,
            TimeRange::Year1 => 365,
            TimeRange::Year5 => 1825,
        }
    }

    /// Point density policy: how many points one day contributes
    pub fn points_per_day(&self) -> u32 {
        match self {
            TimeRange::Day1 => 78,
            TimeRange::Day5 => 39,
            TimeRange::Month1 | TimeRange::Year1 | TimeRange::Year5 => 1,
        }
    }

    /// Spacing between consecutive points
    pub fn point_spacing(&self) -> chrono::Duration {
        match self {
            TimeRange::Day1 => chrono::Duration::minutes(5),
            TimeRange::Day5 => chrono::Duration::minutes(10),
            TimeRange::Month1 | TimeRange::Year1 | TimeRange::Year5 => chrono::Duration::days(1),
        }
    }

    /// Human phrase used in the performance banner
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day1 => "today",
            TimeRange::Day5 => "this week",
            TimeRange::Month1 => "this month",
            TimeRange::Year1 => "this year",
            TimeRange::Year5 => "5 years",
        }
    }

    /// All ranges, in display order
    pub fn all() -> [TimeRange; 5] {
        [
            TimeRange::Day1,
            TimeRange::Day5,
            TimeRange::Month1,
            TimeRange::Year1,
            TimeRange::Year5,
        ]
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1D" => Ok(TimeRange::Day1),
            "5D" => Ok(TimeRange::Day5),
            "1M" => Ok(TimeRange::Month1),
            "1Y" => Ok(TimeRange::Year1),
            "5Y" => Ok(TimeRange::Year5),
            other => Err(AppError::InvalidInput(format!(
                "Invalid timeRange '{}'. Valid values: 1D, 5D, 1M, 1Y, 5Y",
                other
            ))),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Day1
    }
}
