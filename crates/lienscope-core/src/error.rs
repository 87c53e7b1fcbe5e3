use thiserror::Error;

/// Validation and contract errors exposed by `lienscope-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be an ISO-8601 calendar date (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },
    #[error("value for {date} must be a finite number: '{value}'")]
    InvalidValue { date: String, value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("series dates must be strictly ascending: {previous} is not before {next}")]
    SeriesOutOfOrder { previous: String, next: String },

    #[error(
        "invalid metric '{value}', expected one of mortgage_rate, home_price_index, \
unemployment_rate, delinquency_rate"
    )]
    InvalidMetric { value: String },
}
