use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of a historical price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Point timestamp (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,

    /// Series value at this instant
    pub value: f64,
}

impl HistoricalPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Time-ordered sequence of points, ascending by timestamp with no
/// duplicate timestamps. Earliest element is the period start, last is
/// the period end.
pub type Series = Vec<HistoricalPoint>;

/// The four parallel series the dashboard chart renders.
///
/// Each series is generated independently but shares the same time
/// bucketing for a given time range. The selection-dependent series
/// (`average`, `highest`, `lowest`) are empty when no stocks are selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub sp500: Series,
    pub average: Series,
    pub highest: Series,
    pub lowest: Series,
}
