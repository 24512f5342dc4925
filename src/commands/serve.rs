use std::sync::Arc;

use crate::error::Result;
use crate::server;
use crate::services::{ProviderConfig, StockService};

pub async fn run(port: u16) -> Result<()> {
    println!("🚀 Starting sp500-dashboard server on port {}", port);

    let config = ProviderConfig::from_env();
    if config.use_mock() {
        println!("📊 Stock API: mock data (set STOCK_API_KEY to use a real provider)");
    } else {
        println!("📊 Stock API: live provider at {}", config.base_url);
    }

    let service = Arc::new(StockService::new(config));
    server::serve(service, port).await
}
