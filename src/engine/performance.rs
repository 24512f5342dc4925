use serde::Serialize;

use crate::models::Series;

/// Outcome of comparing the selection's period change against the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// selection change minus benchmark change (percentage points)
    pub difference: f64,
    /// True when the selection matched or beat the benchmark. Exact ties
    /// count as outperformance.
    pub outperformed: bool,
}

/// Percentage change between a series' first and last value.
///
/// Returns 0.0 for series with fewer than two points. Callers that need to
/// tell "no data yet" apart from a genuinely flat period should check the
/// series length before calling.
pub fn period_change(series: &Series) -> f64 {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return 0.0;
    };
    if series.len() < 2 || first.value == 0.0 {
        return 0.0;
    }
    (last.value - first.value) / first.value * 100.0
}

/// Compare the selection's period change against the benchmark's.
pub fn compare(benchmark_change: f64, selection_change: f64) -> Comparison {
    let difference = selection_change - benchmark_change;
    Comparison {
        difference,
        outperformed: difference >= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoricalPoint;
    use chrono::{Duration, Utc};

    fn series(values: &[f64]) -> Series {
        let start = Utc::now();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| HistoricalPoint::new(start + Duration::minutes(i as i64), *v))
            .collect()
    }

    #[test]
    fn test_period_change_is_exact() {
        assert_eq!(period_change(&series(&[100.0, 110.0])), 10.0);
    }

    #[test]
    fn test_period_change_ignores_middle_points() {
        assert_eq!(period_change(&series(&[200.0, 350.0, 120.0, 150.0])), -25.0);
    }

    #[test]
    fn test_period_change_empty_series_is_zero() {
        assert_eq!(period_change(&series(&[])), 0.0);
    }

    #[test]
    fn test_period_change_single_point_is_zero() {
        assert_eq!(period_change(&series(&[100.0])), 0.0);
    }

    #[test]
    fn test_compare_tie_counts_as_outperformed() {
        let result = compare(5.0, 5.0);
        assert_eq!(result.difference, 0.0);
        assert!(result.outperformed);
    }

    #[test]
    fn test_compare_underperforming_selection() {
        let result = compare(2.0, 1.5);
        assert_eq!(result.difference, -0.5);
        assert!(!result.outperformed);
    }

    #[test]
    fn test_compare_outperforming_selection() {
        let result = compare(-1.0, 3.0);
        assert_eq!(result.difference, 4.0);
        assert!(result.outperformed);
    }
}
