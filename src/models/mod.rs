mod historical;
mod selection;
mod stock;
mod time_range;

pub use historical::{ChartData, HistoricalPoint, Series};
pub use selection::SelectionMode;
pub use stock::{IndexData, Stock};
pub use time_range::TimeRange;
