use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::config::FredConfig;
use crate::data_source::{SeriesRequest, SeriesSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, OfflineHttpClient, ReqwestHttpClient};
use crate::{CalendarDate, MarketDataPoint, ProviderId, Series, ValidationError};

/// FRED's marker for "no observation in this period".
pub const MISSING_VALUE_SENTINEL: &str = ".";

/// Adapter for the FRED `series/observations` endpoint.
#[derive(Clone)]
pub struct FredAdapter {
    http_client: Arc<dyn HttpClient>,
    config: FredConfig,
}

impl FredAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FredConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn with_real_client(config: FredConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn offline(config: FredConfig) -> Self {
        Self::new(Arc::new(OfflineHttpClient), config)
    }

    pub fn config(&self) -> &FredConfig {
        &self.config
    }

    /// Newest-first observations URL for `series_id`.
    pub fn observations_url(&self, series_id: &str, limit: usize) -> String {
        format!(
            "{}/series/observations?series_id={}&api_key={}&file_type=json&limit={}&sort_order=desc",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(series_id),
            urlencoding::encode(&self.config.api_key),
            limit
        )
    }

    async fn fetch_series(&self, req: SeriesRequest) -> Result<Series, SourceError> {
        let series_id = req.metric.series_id();
        debug!(metric = %req.metric, series_id, limit = req.limit, "requesting fred observations");

        let request = HttpRequest::get(self.observations_url(series_id, req.limit))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("fred transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            let detail = serde_json::from_str::<FredErrorResponse>(&response.body)
                .ok()
                .map(|payload| format!(": {}", payload.error_message))
                .unwrap_or_default();
            return Err(SourceError::unavailable(format!(
                "fred returned status {}{detail}",
                response.status
            )));
        }

        normalize_observations(&response.body, req.limit)
    }
}

impl SeriesSource for FredAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Fred
    }

    fn series<'a>(
        &'a self,
        req: SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Series, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch_series(req).await })
    }
}

/// Turns a newest-first FRED payload into an ascending [`Series`] of at most
/// `limit` points, dropping sentinel observations.
pub fn normalize_observations(body: &str, limit: usize) -> Result<Series, SourceError> {
    let payload: FredObservationsResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("failed to parse fred observations: {e}"))
    })?;

    let total = payload.observations.len();
    let mut points = payload
        .observations
        .into_iter()
        .filter(|observation| observation.value.trim() != MISSING_VALUE_SENTINEL)
        .map(FredObservation::normalize)
        .collect::<Result<Vec<_>, _>>()
        .map_err(validation_to_error)?;

    debug!(
        observations = total,
        kept = points.len(),
        "normalized fred observations"
    );

    points.truncate(limit);
    points.reverse();
    Series::new(points).map_err(validation_to_error)
}

#[derive(Debug, Clone, Deserialize)]
struct FredObservationsResponse {
    observations: Vec<FredObservation>,
}

#[derive(Debug, Clone, Deserialize)]
struct FredObservation {
    date: String,
    value: String,
}

impl FredObservation {
    fn normalize(self) -> Result<MarketDataPoint, ValidationError> {
        let date = CalendarDate::parse(&self.date)?;
        let value = self
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ValidationError::InvalidValue {
                date: self.date,
                value: self.value,
            })?;

        MarketDataPoint::new(date, value)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FredErrorResponse {
    error_message: String,
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::invalid_response(error.to_string())
}
