mod fred;

pub use fred::{normalize_observations, FredAdapter, MISSING_VALUE_SENTINEL};
