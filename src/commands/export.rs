use chrono::Utc;
use std::path::PathBuf;

use crate::error::Result;
use crate::services::{export_filename, stocks_to_csv, ProviderConfig, StockService};

pub async fn run(output: Option<PathBuf>) -> Result<()> {
    let service = StockService::new(ProviderConfig::from_env());

    let fetched = service.get_stocks().await;
    let csv = stocks_to_csv(&fetched.data);

    let path = output
        .unwrap_or_else(|| PathBuf::from(export_filename(Utc::now().date_naive())));
    tokio::fs::write(&path, csv).await?;

    println!(
        "✅ Exported {} stocks ({} data) to {}",
        fetched.data.len(),
        fetched.source.as_str(),
        path.display()
    );
    Ok(())
}
