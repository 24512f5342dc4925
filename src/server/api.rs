use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::models::TimeRange;
use crate::server::AppState;
use crate::services::DataSource;

/// Name of the header carrying payload provenance (live vs mock fallback)
const DATA_SOURCE_HEADER: &str = "x-data-source";

fn data_source_headers(source: DataSource) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(DATA_SOURCE_HEADER, HeaderValue::from_static(source.as_str()));
    headers
}

/// GET /api/stocks - Current quotes for all tracked constituents
#[instrument(skip(app_state))]
pub async fn stocks_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Received request for stocks");

    let fetched = app_state.stocks.get_stocks().await;
    info!(
        count = fetched.data.len(),
        source = fetched.source.as_str(),
        "Returning stock list"
    );

    (
        StatusCode::OK,
        data_source_headers(fetched.source),
        Json(fetched.data),
    )
}

/// GET /api/index - Current S&P 500 index level
#[instrument(skip(app_state))]
pub async fn index_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Received request for index data");

    let fetched = app_state.stocks.get_index().await;
    info!(
        value = fetched.data.value,
        source = fetched.source.as_str(),
        "Returning index data"
    );

    (
        StatusCode::OK,
        data_source_headers(fetched.source),
        Json(fetched.data),
    )
}

/// Query parameters for /api/historical
#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    /// Time range: 1D (default), 5D, 1M, 1Y, 5Y
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,

    /// Comma-joined symbols of the current selection
    pub symbols: Option<String>,
}

/// Parse the `timeRange` parameter, defaulting to 1D when absent.
fn parse_time_range(raw: Option<&str>) -> Result<TimeRange, String> {
    match raw {
        None | Some("") => Ok(TimeRange::default()),
        Some(s) => s.parse::<TimeRange>().map_err(|e| e.to_string()),
    }
}

/// Split the comma-joined `symbols` parameter, dropping empty segments.
fn parse_symbols(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// GET /api/historical - Chart series for the selected time range
///
/// Examples:
/// - /api/historical (defaults to 1D, empty selection)
/// - /api/historical?timeRange=1M&symbols=AAPL,MSFT,GOOGL
#[instrument(skip(app_state))]
pub async fn historical_handler(
    State(app_state): State<AppState>,
    Query(params): Query<HistoricalQuery>,
) -> impl IntoResponse {
    debug!("Received request for historical data with params: {:?}", params);

    let time_range = match parse_time_range(params.time_range.as_deref()) {
        Ok(range) => range,
        Err(message) => {
            warn!(time_range = ?params.time_range, "Invalid timeRange parameter");
            return (
                StatusCode::BAD_REQUEST,
                HeaderMap::new(),
                Json(serde_json::json!({ "error": message })),
            )
                .into_response();
        }
    };
    let symbols = parse_symbols(params.symbols.as_deref());

    let fetched = app_state.stocks.get_historical(time_range, &symbols);
    info!(
        time_range = %time_range,
        symbol_count = symbols.len(),
        points = fetched.data.sp500.len(),
        source = fetched.source.as_str(),
        "Returning historical data"
    );

    (
        StatusCode::OK,
        data_source_headers(fetched.source),
        Json(fetched.data),
    )
        .into_response()
}

/// GET /api/health - Liveness check
#[instrument]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}
