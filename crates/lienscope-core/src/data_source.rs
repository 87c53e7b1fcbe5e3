//! Series source trait and request/error types.
//!
//! A [`SeriesSource`] is the fallible half of the pipeline: it talks to an
//! upstream provider and either yields a validated [`Series`] or a
//! [`SourceError`]. [`MarketDataClient`](crate::MarketDataClient) wraps a
//! source and turns every error into synthetic data.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Metric, ProviderId, Series};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or non-success status.
    Unavailable,
    /// Payload could not be parsed or violated series invariants.
    InvalidResponse,
    InvalidRequest,
}

/// Structured source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidResponse,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidResponse => "source.invalid_response",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request for the most recent `limit` observations of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRequest {
    pub metric: Metric,
    pub limit: usize,
}

impl SeriesRequest {
    pub fn new(metric: Metric, limit: usize) -> Result<Self, SourceError> {
        if limit == 0 {
            return Err(SourceError::invalid_request(
                "series request limit must be greater than zero",
            ));
        }
        Ok(Self { metric, limit })
    }
}

/// Upstream series provider contract.
///
/// Implementations must return at most `limit` points, ascending by date,
/// and must be `Send + Sync` so one source can serve concurrent fetches.
pub trait SeriesSource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Fetches and normalizes one series.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-success status, or a
    /// payload that cannot be normalized into a [`Series`].
    fn series<'a>(
        &'a self,
        req: SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Series, SourceError>> + Send + 'a>>;
}
