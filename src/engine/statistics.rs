use serde::Serialize;

use crate::models::Stock;

/// Aggregate price statistics over a selected stock subset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl Statistics {
    /// Zero-value statistics for an empty selection. Callers treat this as
    /// "no data", not as a fetch failure.
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            highest: 0.0,
            lowest: 0.0,
        }
    }
}

/// Compute average/highest/lowest price over the selection in one pass.
///
/// Full floating precision; rounding for display is the presentation
/// layer's job.
pub fn compute_statistics(selected: &[Stock]) -> Statistics {
    let Some(first) = selected.first() else {
        return Statistics::empty();
    };

    let mut sum = 0.0;
    let mut highest = first.price;
    let mut lowest = first.price;

    for stock in selected {
        sum += stock.price;
        if stock.price > highest {
            highest = stock.price;
        }
        if stock.price < lowest {
            lowest = stock.price;
        }
    }

    Statistics {
        average: sum / selected.len() as f64,
        highest,
        lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(symbol: &str, price: f64) -> Stock {
        Stock::new(symbol, symbol, price, 0.0, 0.0)
    }

    #[test]
    fn test_empty_selection_yields_zeros() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.highest, 0.0);
        assert_eq!(stats.lowest, 0.0);
    }

    #[test]
    fn test_top_two_scenario() {
        // MSFT + AAPL selected out of the three-stock scenario
        let selected = vec![stock("MSFT", 300.0), stock("AAPL", 150.0)];
        let stats = compute_statistics(&selected);
        assert_eq!(stats.average, 225.0);
        assert_eq!(stats.highest, 300.0);
        assert_eq!(stats.lowest, 150.0);
    }

    #[test]
    fn test_manual_scenario() {
        let selected = vec![stock("AAPL", 150.0), stock("GOOGL", 100.0)];
        let stats = compute_statistics(&selected);
        assert_eq!(stats.average, 125.0);
    }

    #[test]
    fn test_single_stock() {
        let stats = compute_statistics(&[stock("V", 250.5)]);
        assert_eq!(stats.average, 250.5);
        assert_eq!(stats.highest, 250.5);
        assert_eq!(stats.lowest, 250.5);
    }

    #[test]
    fn test_ordering_invariant() {
        let selected = vec![
            stock("A", 12.0),
            stock("B", 87.5),
            stock("C", 44.1),
            stock("D", 3.2),
        ];
        let stats = compute_statistics(&selected);
        assert!(stats.lowest <= stats.average);
        assert!(stats.average <= stats.highest);
    }
}
