use std::collections::HashSet;

use crate::models::{SelectionMode, Stock};

/// Compute the selected stock subset for the given mode.
///
/// `TopN`: a copy of `all` sorted descending by price (stable, so ties keep
/// input order), truncated to `min(top_n, all.len())`. `top_n` must already
/// be clamped to [MIN_TOP_N, MAX_TOP_N] at the input boundary; this function
/// does not re-clamp.
///
/// `Manual`: the elements of `all` whose symbol is in `manual_symbols`,
/// preserving input order (not pick order).
///
/// The output never exceeds the input and contains each symbol at most once
/// given unique symbols in `all`.
pub fn select_stocks(
    all: &[Stock],
    mode: SelectionMode,
    top_n: usize,
    manual_symbols: &HashSet<String>,
) -> Vec<Stock> {
    match mode {
        SelectionMode::TopN => {
            let mut sorted: Vec<Stock> = all.to_vec();
            sorted.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            sorted.truncate(top_n.min(all.len()));
            sorted
        }
        SelectionMode::Manual => all
            .iter()
            .filter(|s| manual_symbols.contains(&s.symbol))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(symbol: &str, price: f64) -> Stock {
        Stock::new(symbol, symbol, price, 0.0, 0.0)
    }

    fn sample() -> Vec<Stock> {
        vec![
            stock("AAPL", 150.0),
            stock("MSFT", 300.0),
            stock("GOOGL", 100.0),
        ]
    }

    #[test]
    fn test_top_n_orders_by_price_descending() {
        let selected = select_stocks(&sample(), SelectionMode::TopN, 2, &HashSet::new());
        let symbols: Vec<&str> = selected.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL"]);
    }

    #[test]
    fn test_top_n_larger_than_input_takes_all() {
        let selected = select_stocks(&sample(), SelectionMode::TopN, 10, &HashSet::new());
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_top_n_selection_dominates_rest() {
        let all = vec![
            stock("A", 5.0),
            stock("B", 42.0),
            stock("C", 17.0),
            stock("D", 99.0),
            stock("E", 23.0),
        ];
        let selected = select_stocks(&all, SelectionMode::TopN, 3, &HashSet::new());
        assert_eq!(selected.len(), 3);

        let picked: HashSet<&str> = selected.iter().map(|s| s.symbol.as_str()).collect();
        let min_selected = selected.iter().map(|s| s.price).fold(f64::MAX, f64::min);
        for stock in &all {
            if !picked.contains(stock.symbol.as_str()) {
                assert!(stock.price <= min_selected);
            }
        }
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let all = vec![stock("X", 100.0), stock("Y", 100.0), stock("Z", 100.0)];
        let selected = select_stocks(&all, SelectionMode::TopN, 2, &HashSet::new());
        let symbols: Vec<&str> = selected.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["X", "Y"]);
    }

    #[test]
    fn test_manual_preserves_input_order() {
        let picks: HashSet<String> = ["GOOGL", "AAPL"].iter().map(|s| s.to_string()).collect();
        let selected = select_stocks(&sample(), SelectionMode::Manual, 10, &picks);
        let symbols: Vec<&str> = selected.iter().map(|s| s.symbol.as_str()).collect();
        // Input order, not pick order
        assert_eq!(symbols, vec!["AAPL", "GOOGL"]);
    }

    #[test]
    fn test_manual_empty_picks_selects_nothing() {
        let selected = select_stocks(&sample(), SelectionMode::Manual, 10, &HashSet::new());
        assert!(selected.is_empty());
    }

    #[test]
    fn test_manual_ignores_unknown_symbols() {
        let picks: HashSet<String> = ["TSLA", "MSFT"].iter().map(|s| s.to_string()).collect();
        let selected = select_stocks(&sample(), SelectionMode::Manual, 10, &picks);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].symbol, "MSFT");
    }
}
