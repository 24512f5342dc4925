//! Mock quote generator
//!
//! Synthesizes plausible-looking stocks, index levels, and random-walk
//! historical series when no provider credential is configured or the
//! upstream call fails. Sits behind the same adapter surface as the real
//! provider so the engines are exercised identically either way.
//!
//! Tests seed the generator (`with_seed`) so generated values are
//! deterministic; the production path seeds from OS entropy.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    MAX_SERIES_POINTS, MOCK_AVERAGE_BASE, MOCK_AVERAGE_VOLATILITY, MOCK_HIGHEST_BASE,
    MOCK_HIGHEST_VOLATILITY, MOCK_LOWEST_BASE, MOCK_LOWEST_VOLATILITY, MOCK_SP500_BASE,
    MOCK_SP500_VOLATILITY, SP500_BASE_VALUE, SP500_COMPANIES,
};
use crate::models::{ChartData, HistoricalPoint, IndexData, Series, Stock, TimeRange};
use crate::utils::round_cents;

pub struct MockGenerator {
    rng: StdRng,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and fixtures.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Full constituent list with synthetic prices. Prices descend roughly
    /// by roster rank so top-N selections look sensible.
    pub fn stocks(&mut self) -> Vec<Stock> {
        SP500_COMPANIES
            .iter()
            .enumerate()
            .map(|(rank, (symbol, name))| {
                let base_price = 800.0 - rank as f64 * 12.0 + self.rng.gen_range(0.0..50.0);
                let change_percent = round_cents(self.rng.gen_range(-3.0..3.0));
                let change = round_cents(change_percent * self.rng.gen_range(1.0..11.0));
                Stock::new(symbol, name, round_cents(base_price), change, change_percent)
            })
            .collect()
    }

    pub fn index(&mut self) -> IndexData {
        let change_percent = round_cents(self.rng.gen_range(-1.0..1.0));
        IndexData {
            value: round_cents(SP500_BASE_VALUE + self.rng.gen_range(-25.0..25.0)),
            change: round_cents(change_percent * 58.0),
            change_percent,
        }
    }

    /// Four parallel random-walk series for the chart. The
    /// selection-dependent series are empty when no symbols are selected;
    /// the index series is always generated.
    pub fn chart(&mut self, time_range: TimeRange, has_selection: bool) -> ChartData {
        let sp500 = self.series(time_range, MOCK_SP500_BASE, MOCK_SP500_VOLATILITY);
        if !has_selection {
            return ChartData {
                sp500,
                ..ChartData::default()
            };
        }
        ChartData {
            sp500,
            average: self.series(time_range, MOCK_AVERAGE_BASE, MOCK_AVERAGE_VOLATILITY),
            highest: self.series(time_range, MOCK_HIGHEST_BASE, MOCK_HIGHEST_VOLATILITY),
            lowest: self.series(time_range, MOCK_LOWEST_BASE, MOCK_LOWEST_VOLATILITY),
        }
    }

    /// Random walk ending at the current instant, ascending timestamps at
    /// the range's fixed point spacing.
    fn series(&mut self, time_range: TimeRange, base_value: f64, volatility: f64) -> Series {
        let total_points = (time_range.days() * time_range.points_per_day()) as usize;
        let total_points = total_points.min(MAX_SERIES_POINTS);
        let spacing = time_range.point_spacing();
        let now = Utc::now();

        let mut value = base_value;
        let mut data = Vec::with_capacity(total_points + 1);
        for i in (0..=total_points as i64).rev() {
            value *= 1.0 + self.rng.gen_range(-0.5..0.5) * volatility;
            data.push(HistoricalPoint::new(now - spacing * i as i32, round_cents(value)));
        }
        data
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}
