//! CSV export of the constituent table

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::Stock;

/// Render the stock list as CSV. Company names are double-quoted, numeric
/// fields are fixed to two decimals.
pub fn stocks_to_csv(stocks: &[Stock]) -> String {
    // header (~40) + ~60 bytes per row
    let mut csv = String::with_capacity(40 + stocks.len() * 60);
    csv.push_str("Symbol,Company Name,Price,Change,Change %\n");

    for stock in stocks {
        let _ = writeln!(
            csv,
            "{},\"{}\",{:.2},{:.2},{:.2}",
            stock.symbol, stock.name, stock.price, stock.change, stock.change_percent,
        );
    }

    csv
}

/// Download filename for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("sp500_stocks_{}.csv", date.format("%Y-%m-%d"))
}
