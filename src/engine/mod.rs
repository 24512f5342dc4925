//! Derived-state engines
//!
//! Pure transformations from raw stock and series data to selection sets,
//! aggregate statistics, and performance comparisons. Nothing in here does
//! I/O or holds state; callers re-run these on every relevant input change.

pub mod performance;
pub mod selection;
pub mod statistics;

pub use performance::{compare, period_change, Comparison};
pub use selection::select_stocks;
pub use statistics::{compute_statistics, Statistics};
