use crate::constants::{DEFAULT_TOP_N, MAX_TOP_N, SP500_COMPANIES};
use crate::error::Result;
use crate::services::ProviderConfig;

pub fn run() -> Result<()> {
    let config = ProviderConfig::from_env();

    println!("sp500-dashboard status");
    println!();
    if config.use_mock() {
        println!("  Provider:      mock (no STOCK_API_KEY configured)");
    } else {
        println!("  Provider:      live");
    }
    println!("  Base URL:      {}", config.base_url);
    println!("  Constituents:  {} tracked", SP500_COMPANIES.len());
    println!("  Selection:     top-N default {}, max {}", DEFAULT_TOP_N, MAX_TOP_N);

    Ok(())
}
