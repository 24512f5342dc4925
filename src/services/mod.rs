pub mod export;
pub mod finnhub;
pub mod mock;
pub mod provider;

pub use export::{export_filename, stocks_to_csv};
pub use finnhub::FinnhubClient;
pub use mock::MockGenerator;
pub use provider::{DataSource, Fetched, ProviderConfig, StockService};
