//! Finnhub quote client
//!
//! Thin client for the Finnhub `/quote` endpoint. Quotes are fetched per
//! symbol, batched with a short pause between batches to stay inside the
//! free-tier rate limit. Individual symbol failures are skipped; a run
//! that yields no quotes at all is reported as a network error so the
//! adapter can fall back to mock data.

use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::constants::{
    QUOTE_BATCH_DELAY_MS, QUOTE_BATCH_SIZE, QUOTE_SYMBOL_LIMIT, SP500_BASE_VALUE,
    SP500_COMPANIES, SP500_INDEX_SYMBOL,
};
use crate::error::{AppError, Result};
use crate::models::{IndexData, Stock};

/// Finnhub quote payload: current price, change, percent change
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    c: Option<f64>,
    d: Option<f64>,
    dp: Option<f64>,
}

#[derive(Clone)]
pub struct FinnhubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl FinnhubClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    async fn quote(&self, symbol: &str) -> Result<QuoteResponse> {
        let url = format!(
            "{}/quote?symbol={}&token={}",
            self.base_url, symbol, self.token
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Finnhub returned HTTP {} for {}",
                response.status(),
                symbol
            )));
        }
        Ok(response.json::<QuoteResponse>().await?)
    }

    /// Quote the constituent roster, batched to respect rate limits.
    pub async fn stocks(&self) -> Result<Vec<Stock>> {
        let companies = &SP500_COMPANIES[..SP500_COMPANIES.len().min(QUOTE_SYMBOL_LIMIT)];
        let mut stocks = Vec::with_capacity(companies.len());

        for batch in companies.chunks(QUOTE_BATCH_SIZE) {
            let mut handles = Vec::with_capacity(batch.len());
            for &(symbol, name) in batch {
                let client = self.clone();
                handles.push(tokio::spawn(async move {
                    match client.quote(symbol).await {
                        Ok(quote) => Some(Stock::new(
                            symbol,
                            name,
                            quote.c.unwrap_or(0.0),
                            quote.d.unwrap_or(0.0),
                            quote.dp.unwrap_or(0.0),
                        )),
                        Err(e) => {
                            warn!(symbol, error = %e, "Skipping symbol after quote failure");
                            None
                        }
                    }
                }));
            }

            for handle in handles {
                if let Ok(Some(stock)) = handle.await {
                    stocks.push(stock);
                }
            }

            // Pause between batches to respect the free-tier rate limit
            sleep(Duration::from_millis(QUOTE_BATCH_DELAY_MS)).await;
        }

        if stocks.is_empty() {
            return Err(AppError::Network(
                "No quotes returned for any constituent".to_string(),
            ));
        }

        debug!(count = stocks.len(), "Fetched constituent quotes");
        Ok(stocks)
    }

    /// Quote the S&P 500 index itself.
    pub async fn index(&self) -> Result<IndexData> {
        let quote = self.quote(SP500_INDEX_SYMBOL).await?;
        Ok(IndexData {
            value: quote.c.unwrap_or(SP500_BASE_VALUE),
            change: quote.d.unwrap_or(0.0),
            change_percent: quote.dp.unwrap_or(0.0),
        })
    }
}
