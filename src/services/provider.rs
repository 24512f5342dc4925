//! Stock data provider adapter
//!
//! Single entry point for stock, index, and historical data. Proxies the
//! configured quote provider when a credential is present and falls back to
//! the mock generator on any upstream failure. The API surface always gets
//! data; whether it came from the provider or the fallback is carried
//! explicitly in [`Fetched::source`] rather than inferred from control flow.

use tracing::{info, warn};

use crate::models::{ChartData, IndexData, Stock, TimeRange};
use crate::services::finnhub::FinnhubClient;
use crate::services::mock::MockGenerator;

/// Where a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Real quotes from the configured provider
    Live,
    /// Synthesized fallback data
    Mock,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Mock => "mock",
        }
    }
}

/// A payload together with its provenance
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    fn mock(data: T) -> Self {
        Self {
            data,
            source: DataSource::Mock,
        }
    }
}

/// Provider configuration, built once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider credential; mock data is used when absent
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ProviderConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://finnhub.io/api/v1";

    /// Read configuration from `STOCK_API_KEY` / `STOCK_API_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("STOCK_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("STOCK_API_BASE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Mock-only configuration, for tests and offline use.
    pub fn mock() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn use_mock(&self) -> bool {
        self.api_key.is_none()
    }
}

pub struct StockService {
    config: ProviderConfig,
    finnhub: Option<FinnhubClient>,
}

impl StockService {
    pub fn new(config: ProviderConfig) -> Self {
        let finnhub = match &config.api_key {
            Some(key) => match FinnhubClient::new(&config.base_url, key) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!(error = %e, "Failed to build provider client, using mock data");
                    None
                }
            },
            None => None,
        };

        if finnhub.is_some() {
            info!(base_url = %config.base_url, "Stock API: using live provider");
        } else {
            info!("Stock API: using mock data (no API key configured)");
        }

        Self { config, finnhub }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Current constituent quotes; mock fallback on any upstream failure.
    pub async fn get_stocks(&self) -> Fetched<Vec<Stock>> {
        if let Some(client) = &self.finnhub {
            match client.stocks().await {
                Ok(stocks) => return Fetched::live(stocks),
                Err(e) => {
                    warn!(error = %e, "Error fetching stocks, falling back to mock data");
                }
            }
        }
        Fetched::mock(MockGenerator::new().stocks())
    }

    /// Current index level; mock fallback on any upstream failure.
    pub async fn get_index(&self) -> Fetched<IndexData> {
        if let Some(client) = &self.finnhub {
            match client.index().await {
                Ok(index) => return Fetched::live(index),
                Err(e) => {
                    warn!(error = %e, "Error fetching index data, falling back to mock data");
                }
            }
        }
        Fetched::mock(MockGenerator::new().index())
    }

    /// Historical series for the chart. Candle history is not part of the
    /// quote contract, so this is always synthesized; the selection only
    /// decides whether the aggregate series are populated.
    pub fn get_historical(&self, time_range: TimeRange, symbols: &[String]) -> Fetched<ChartData> {
        Fetched::mock(MockGenerator::new().chart(time_range, !symbols.is_empty()))
    }
}
