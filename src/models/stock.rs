use serde::{Deserialize, Serialize};

/// Per-constituent quote snapshot
///
/// One immutable snapshot per fetch cycle. `symbol` is unique within a
/// stock list; the engines rely on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Ticker symbol (unique within a list)
    pub symbol: String,

    /// Company name
    pub name: String,

    /// Last price, non-negative
    pub price: f64,

    /// Absolute change since previous close (signed)
    pub change: f64,

    /// Percentage change since previous close (signed)
    pub change_percent: f64,
}

impl Stock {
    pub fn new(symbol: &str, name: &str, price: f64, change: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
        }
    }
}

/// S&P 500 index level snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexData {
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
}
