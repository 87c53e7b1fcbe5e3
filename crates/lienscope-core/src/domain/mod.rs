//! # Domain Models
//!
//! Canonical types for normalized market data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CalendarDate`] | ISO-8601 calendar date |
//! | [`MarketDataPoint`] | One finite `(date, value)` observation |
//! | [`Series`] | Ascending, duplicate-free points for one metric |
//! | [`Metric`] | Named economic series and its FRED identifier |
//! | [`Cadence`] | Weekly or monthly publication schedule |
//!
//! Every constructor validates its invariants, so a `Series` in hand is
//! always ordered and NaN-free.

mod date;
mod metric;
mod series;

pub use date::CalendarDate;
pub use metric::{Cadence, Metric, SyntheticProfile};
pub use series::{MarketDataPoint, Series};
