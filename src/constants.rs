//! Dashboard Constants
//!
//! Selection bounds, the constituent roster used for quotes and mock data,
//! and the baseline values the mock generator walks from.

/// Minimum allowed top-N selection count
pub const MIN_TOP_N: usize = 1;

/// Maximum allowed top-N selection count (full index size)
pub const MAX_TOP_N: usize = 500;

/// Default top-N selection when a session starts
pub const DEFAULT_TOP_N: usize = 10;

/// Finnhub symbol for the S&P 500 index
pub const SP500_INDEX_SYMBOL: &str = "^GSPC";

/// Fallback index value when the provider returns an empty quote
pub const SP500_BASE_VALUE: f64 = 5842.31;

/// Quotes are fetched in batches of this size to respect provider rate limits
pub const QUOTE_BATCH_SIZE: usize = 10;

/// Pause between quote batches (milliseconds)
pub const QUOTE_BATCH_DELAY_MS: u64 = 100;

/// Cap on constituents quoted per refresh (free-tier rate limits)
pub const QUOTE_SYMBOL_LIMIT: usize = 50;

/// Hard cap on points in a generated historical series
pub const MAX_SERIES_POINTS: usize = 500;

/// Mock random-walk baselines and volatilities per chart series
pub const MOCK_SP500_BASE: f64 = 5842.0;
pub const MOCK_SP500_VOLATILITY: f64 = 0.01;
pub const MOCK_AVERAGE_BASE: f64 = 450.0;
pub const MOCK_AVERAGE_VOLATILITY: f64 = 0.015;
pub const MOCK_HIGHEST_BASE: f64 = 780.0;
pub const MOCK_HIGHEST_VOLATILITY: f64 = 0.02;
pub const MOCK_LOWEST_BASE: f64 = 180.0;
pub const MOCK_LOWEST_VOLATILITY: f64 = 0.025;

/// S&P 500 constituents served by the API (subset; the full index roster
/// would come from a reference-data provider).
pub const SP500_COMPANIES: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("META", "Meta Platforms Inc."),
    ("TSLA", "Tesla Inc."),
    ("BRK.B", "Berkshire Hathaway Inc."),
    ("UNH", "UnitedHealth Group Inc."),
    ("JNJ", "Johnson & Johnson"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("PG", "Procter & Gamble Co."),
    ("XOM", "Exxon Mobil Corporation"),
    ("HD", "The Home Depot Inc."),
    ("MA", "Mastercard Inc."),
    ("CVX", "Chevron Corporation"),
    ("MRK", "Merck & Co. Inc."),
    ("ABBV", "AbbVie Inc."),
    ("LLY", "Eli Lilly and Company"),
    ("PFE", "Pfizer Inc."),
    ("COST", "Costco Wholesale Corp."),
    ("KO", "The Coca-Cola Company"),
    ("PEP", "PepsiCo Inc."),
    ("TMO", "Thermo Fisher Scientific"),
    ("AVGO", "Broadcom Inc."),
    ("WMT", "Walmart Inc."),
    ("MCD", "McDonald's Corporation"),
    ("CSCO", "Cisco Systems Inc."),
    ("ABT", "Abbott Laboratories"),
    ("DHR", "Danaher Corporation"),
    ("ACN", "Accenture plc"),
    ("CMCSA", "Comcast Corporation"),
    ("VZ", "Verizon Communications"),
    ("ADBE", "Adobe Inc."),
    ("NKE", "NIKE Inc."),
    ("TXN", "Texas Instruments Inc."),
    ("NEE", "NextEra Energy Inc."),
    ("CRM", "Salesforce Inc."),
    ("PM", "Philip Morris International"),
    ("ORCL", "Oracle Corporation"),
    ("AMD", "Advanced Micro Devices"),
    ("INTC", "Intel Corporation"),
    ("DIS", "The Walt Disney Company"),
    ("NFLX", "Netflix Inc."),
    ("IBM", "IBM Corporation"),
    ("GE", "General Electric Co."),
    ("BA", "Boeing Company"),
    ("CAT", "Caterpillar Inc."),
    ("GS", "Goldman Sachs Group"),
];
