//! Dashboard session state
//!
//! Owns the selection state a UI session carries across fetch cycles and
//! keeps every derived view consistent with it. The selected sequence is
//! recomputed eagerly on every mutation of the stock list, selection mode,
//! top-N count, or manual picks, so statistics and the chart-fetch key
//! always read the current selection, never a stale snapshot.

use std::collections::HashSet;

use crate::constants::{DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N};
use crate::engine::{compare, compute_statistics, period_change, select_stocks, Comparison, Statistics};
use crate::models::{ChartData, IndexData, SelectionMode, Stock, TimeRange};

/// Key a historical fetch is issued under. Results are only applied while
/// the session's current key still equals the one the fetch was keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub time_range: TimeRange,
    /// Comma-joined symbols of the selection the fetch is for, in
    /// selection order
    pub symbols: String,
}

/// Period performance of the selection against the index
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub benchmark_change: f64,
    pub selection_change: f64,
    pub comparison: Comparison,
    /// Human phrase for the active time range ("today", "this week", ...)
    pub label: &'static str,
}

pub struct DashboardSession {
    stocks: Vec<Stock>,
    index: Option<IndexData>,
    mode: SelectionMode,
    top_n: usize,
    manual_symbols: HashSet<String>,
    time_range: TimeRange,
    /// Recomputed on every relevant mutation
    selected: Vec<Stock>,
    /// Chart data together with the key it was fetched under
    chart: Option<(ChartKey, ChartData)>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self {
            stocks: Vec::new(),
            index: None,
            mode: SelectionMode::TopN,
            top_n: DEFAULT_TOP_N,
            manual_symbols: HashSet::new(),
            time_range: TimeRange::default(),
            selected: Vec::new(),
            chart: None,
        }
    }

    /// Replace the stock list with a new fetch-cycle snapshot.
    pub fn set_stocks(&mut self, stocks: Vec<Stock>) {
        self.stocks = stocks;
        self.recompute_selection();
    }

    pub fn set_index(&mut self, index: IndexData) {
        self.index = Some(index);
    }

    /// Switch selection mode. The inactive mode's parameters are retained,
    /// so switching back restores the previous selection.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.recompute_selection();
    }

    /// Set the top-N count, clamped to the valid range at this boundary.
    /// The engine itself never clamps.
    pub fn set_top_n(&mut self, top_n: usize) {
        self.top_n = top_n.clamp(MIN_TOP_N, MAX_TOP_N);
        self.recompute_selection();
    }

    /// Add or remove a manual pick.
    pub fn toggle_symbol(&mut self, symbol: &str) {
        if !self.manual_symbols.remove(symbol) {
            self.manual_symbols.insert(symbol.to_string());
        }
        self.recompute_selection();
    }

    pub fn set_manual_symbols(&mut self, symbols: HashSet<String>) {
        self.manual_symbols = symbols;
        self.recompute_selection();
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }

    fn recompute_selection(&mut self) {
        self.selected = select_stocks(&self.stocks, self.mode, self.top_n, &self.manual_symbols);
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn index(&self) -> Option<&IndexData> {
        self.index.as_ref()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn manual_symbols(&self) -> &HashSet<String> {
        &self.manual_symbols
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// The current selected sequence (already up to date with all inputs).
    pub fn selected_stocks(&self) -> &[Stock] {
        &self.selected
    }

    /// Aggregate statistics over the current selection. Empty selection
    /// degrades to zero values rather than an error.
    pub fn statistics(&self) -> Statistics {
        compute_statistics(&self.selected)
    }

    /// Key for the historical fetch the session currently needs, or None
    /// when the selection is empty and no fetch should be issued.
    pub fn chart_key(&self) -> Option<ChartKey> {
        if self.selected.is_empty() {
            return None;
        }
        let symbols: Vec<&str> = self.selected.iter().map(|s| s.symbol.as_str()).collect();
        Some(ChartKey {
            time_range: self.time_range,
            symbols: symbols.join(","),
        })
    }

    /// Apply a completed historical fetch. Returns false (and discards the
    /// payload) when `key` no longer matches the current selection and time
    /// range, so results of superseded fetches never reach the chart.
    pub fn apply_chart_data(&mut self, key: ChartKey, data: ChartData) -> bool {
        if self.chart_key().as_ref() != Some(&key) {
            return false;
        }
        self.chart = Some((key, data));
        true
    }

    /// Chart data for the current key, if a fetch under that key has
    /// completed. Data applied under an older key is never returned.
    pub fn chart_data(&self) -> Option<&ChartData> {
        let (key, data) = self.chart.as_ref()?;
        if self.chart_key().as_ref() == Some(key) {
            Some(data)
        } else {
            None
        }
    }

    /// Period performance of the selection against the index, derived from
    /// the current chart data. None while no consistent chart is available.
    pub fn performance(&self) -> Option<PerformanceSummary> {
        let chart = self.chart_data()?;
        let benchmark_change = period_change(&chart.sp500);
        let selection_change = period_change(&chart.average);
        Some(PerformanceSummary {
            benchmark_change,
            selection_change,
            comparison: compare(benchmark_change, selection_change),
            label: self.time_range.label(),
        })
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoricalPoint;
    use chrono::{Duration, Utc};

    fn stock(symbol: &str, price: f64) -> Stock {
        Stock::new(symbol, symbol, price, 0.0, 0.0)
    }

    fn session_with_stocks() -> DashboardSession {
        let mut session = DashboardSession::new();
        session.set_stocks(vec![
            stock("AAPL", 150.0),
            stock("MSFT", 300.0),
            stock("GOOGL", 100.0),
        ]);
        session
    }

    fn flat_series(first: f64, last: f64) -> Vec<HistoricalPoint> {
        let start = Utc::now();
        vec![
            HistoricalPoint::new(start, first),
            HistoricalPoint::new(start + Duration::minutes(5), last),
        ]
    }

    #[test]
    fn test_selection_recomputed_on_stock_update() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        assert_eq!(session.selected_stocks()[0].symbol, "MSFT");

        // New fetch cycle flips the price order
        session.set_stocks(vec![stock("AAPL", 500.0), stock("MSFT", 300.0)]);
        assert_eq!(session.selected_stocks()[0].symbol, "AAPL");
    }

    #[test]
    fn test_mode_switch_retains_both_parameters() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        session.toggle_symbol("GOOGL");

        session.set_mode(SelectionMode::Manual);
        assert_eq!(session.selected_stocks().len(), 1);
        assert_eq!(session.selected_stocks()[0].symbol, "GOOGL");

        // Switching back restores the top-N selection unchanged
        session.set_mode(SelectionMode::TopN);
        assert_eq!(session.top_n(), 2);
        assert_eq!(session.selected_stocks().len(), 2);
        assert!(session.manual_symbols().contains("GOOGL"));
    }

    #[test]
    fn test_top_n_clamped_at_boundary() {
        let mut session = session_with_stocks();
        session.set_top_n(0);
        assert_eq!(session.top_n(), 1);
        session.set_top_n(10_000);
        assert_eq!(session.top_n(), 500);
    }

    #[test]
    fn test_chart_key_tracks_selection_order() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        let key = session.chart_key().unwrap();
        assert_eq!(key.symbols, "MSFT,AAPL");
        assert_eq!(key.time_range, TimeRange::Day1);
    }

    #[test]
    fn test_empty_selection_skips_chart_fetch() {
        let mut session = session_with_stocks();
        session.set_mode(SelectionMode::Manual);
        assert!(session.chart_key().is_none());
    }

    #[test]
    fn test_stale_chart_result_discarded() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        let stale_key = session.chart_key().unwrap();

        // Selection changes while the fetch is in flight
        session.set_top_n(3);
        let accepted = session.apply_chart_data(stale_key, ChartData::default());
        assert!(!accepted);
        assert!(session.chart_data().is_none());
    }

    #[test]
    fn test_current_chart_result_accepted() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        let key = session.chart_key().unwrap();
        assert!(session.apply_chart_data(key, ChartData::default()));
        assert!(session.chart_data().is_some());
    }

    #[test]
    fn test_chart_invalidated_by_time_range_change() {
        let mut session = session_with_stocks();
        let key = session.chart_key().unwrap();
        session.apply_chart_data(key, ChartData::default());

        session.set_time_range(TimeRange::Year1);
        assert!(session.chart_data().is_none());
        assert!(session.performance().is_none());
    }

    #[test]
    fn test_performance_from_chart_data() {
        let mut session = session_with_stocks();
        let key = session.chart_key().unwrap();
        let chart = ChartData {
            sp500: flat_series(100.0, 102.0),
            average: flat_series(200.0, 210.0),
            highest: flat_series(300.0, 303.0),
            lowest: flat_series(50.0, 51.0),
        };
        session.apply_chart_data(key, chart);

        let perf = session.performance().unwrap();
        assert_eq!(perf.benchmark_change, 2.0);
        assert_eq!(perf.selection_change, 5.0);
        assert_eq!(perf.comparison.difference, 3.0);
        assert!(perf.comparison.outperformed);
        assert_eq!(perf.label, "today");
    }

    #[test]
    fn test_statistics_follow_selection() {
        let mut session = session_with_stocks();
        session.set_top_n(2);
        let stats = session.statistics();
        assert_eq!(stats.average, 225.0);
        assert_eq!(stats.highest, 300.0);
        assert_eq!(stats.lowest, 150.0);

        session.set_mode(SelectionMode::Manual);
        let stats = session.statistics();
        assert_eq!(stats.average, 0.0);
    }
}
