//! Fetch-with-fallback front door of the pipeline.
//!
//! [`MarketDataClient`] never fails: any [`SourceError`] from the wrapped
//! [`SeriesSource`] is logged and replaced by a synthetic series, so the
//! consuming layer always has something plausible to render. Provenance is
//! kept on [`SeriesSnapshot::source`] for a freshness badge.
//!
//! ```rust,ignore
//! use lienscope_core::{FredConfig, MarketDataClient};
//!
//! let client = MarketDataClient::from_config(FredConfig::from_env());
//! let rates = client.mortgage_rates(30).await;
//! println!("latest: {:?}", rates.last());
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::adapters::FredAdapter;
use crate::chart::{format_chart_data, ChartPoint};
use crate::clock::{Clock, SystemClock};
use crate::config::FredConfig;
use crate::data_source::{SeriesRequest, SeriesSource, SourceError};
use crate::synthetic::SyntheticGenerator;
use crate::{CalendarDate, ChangeSummary, Metric, ProviderId, Series};

/// One fetched series with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSnapshot {
    pub metric: Metric,
    pub source: ProviderId,
    pub fetched_on: CalendarDate,
    pub series: Series,
    /// Why synthetic data was served, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl SeriesSnapshot {
    pub fn is_synthetic(&self) -> bool {
        !self.source.is_live()
    }

    pub fn change(&self) -> ChangeSummary {
        self.series.change_summary()
    }

    pub fn chart(&self, label: &str) -> Vec<ChartPoint> {
        format_chart_data(&self.series, label)
    }
}

/// Snapshots of every tracked metric, fetched together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverview {
    pub mortgage_rate: SeriesSnapshot,
    pub home_price_index: SeriesSnapshot,
    pub unemployment_rate: SeriesSnapshot,
    pub delinquency_rate: SeriesSnapshot,
}

impl MarketOverview {
    pub fn get(&self, metric: Metric) -> &SeriesSnapshot {
        match metric {
            Metric::MortgageRate => &self.mortgage_rate,
            Metric::HomePriceIndex => &self.home_price_index,
            Metric::UnemploymentRate => &self.unemployment_rate,
            Metric::DelinquencyRate => &self.delinquency_rate,
        }
    }

    pub fn snapshots(&self) -> [&SeriesSnapshot; 4] {
        Metric::ALL.map(|metric| self.get(metric))
    }

    pub fn all_live(&self) -> bool {
        self.snapshots()
            .iter()
            .all(|snapshot| snapshot.source.is_live())
    }
}

/// Market data client that degrades to synthetic series on any failure.
#[derive(Clone)]
pub struct MarketDataClient {
    source: Arc<dyn SeriesSource>,
    clock: Arc<dyn Clock>,
    synthetic_seed: Option<u64>,
}

impl MarketDataClient {
    pub fn new(source: Arc<dyn SeriesSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            synthetic_seed: None,
        }
    }

    /// Client talking to FRED over the network.
    pub fn from_config(config: FredConfig) -> Self {
        Self::new(Arc::new(FredAdapter::with_real_client(config)))
    }

    /// Client whose every fetch resolves to synthetic data.
    pub fn offline(config: FredConfig) -> Self {
        Self::new(Arc::new(FredAdapter::offline(config)))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Makes fallback series reproducible.
    pub fn with_synthetic_seed(mut self, seed: u64) -> Self {
        self.synthetic_seed = Some(seed);
        self
    }

    pub fn source_id(&self) -> ProviderId {
        self.source.id()
    }

    /// Fetches up to `limit` most recent points of `metric`.
    ///
    /// `limit == 0` returns an empty series without touching the source.
    /// Any source failure yields a synthetic series instead.
    pub async fn fetch(&self, metric: Metric, limit: usize) -> SeriesSnapshot {
        let fetched_on = self.clock.today();

        let request = match SeriesRequest::new(metric, limit) {
            Ok(request) => request,
            Err(_) => {
                return SeriesSnapshot {
                    metric,
                    source: self.source.id(),
                    fetched_on,
                    series: Series::empty(),
                    fallback_reason: None,
                }
            }
        };

        match self.source.series(request).await {
            Ok(series) => SeriesSnapshot {
                metric,
                source: self.source.id(),
                fetched_on,
                series,
                fallback_reason: None,
            },
            Err(error) => self.fallback(metric, fetched_on, &error),
        }
    }

    pub async fn fetch_series(&self, metric: Metric, limit: usize) -> Series {
        self.fetch(metric, limit).await.series
    }

    pub async fn mortgage_rates(&self, limit: usize) -> Series {
        self.fetch_series(Metric::MortgageRate, limit).await
    }

    pub async fn home_price_index(&self, limit: usize) -> Series {
        self.fetch_series(Metric::HomePriceIndex, limit).await
    }

    pub async fn unemployment_rate(&self, limit: usize) -> Series {
        self.fetch_series(Metric::UnemploymentRate, limit).await
    }

    pub async fn delinquency_rate(&self, limit: usize) -> Series {
        self.fetch_series(Metric::DelinquencyRate, limit).await
    }

    /// Fetches every metric concurrently; each falls back on its own.
    pub async fn fetch_all(&self, limit: usize) -> MarketOverview {
        let (mortgage_rate, home_price_index, unemployment_rate, delinquency_rate) = tokio::join!(
            self.fetch(Metric::MortgageRate, limit),
            self.fetch(Metric::HomePriceIndex, limit),
            self.fetch(Metric::UnemploymentRate, limit),
            self.fetch(Metric::DelinquencyRate, limit),
        );

        MarketOverview {
            mortgage_rate,
            home_price_index,
            unemployment_rate,
            delinquency_rate,
        }
    }

    fn fallback(&self, metric: Metric, today: CalendarDate, error: &SourceError) -> SeriesSnapshot {
        warn!(
            metric = %metric,
            source = %self.source.id(),
            code = error.code(),
            error = error.message(),
            "series fetch failed; serving synthetic data"
        );

        let mut generator = match self.synthetic_seed {
            Some(seed) => SyntheticGenerator::with_seed(seed ^ metric as u64),
            None => SyntheticGenerator::new(),
        };

        SeriesSnapshot {
            metric,
            source: ProviderId::Synthetic,
            fetched_on: today,
            series: generator.generate(metric, today),
            fallback_reason: Some(error.to_string()),
        }
    }
}
