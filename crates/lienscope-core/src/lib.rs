//! # Lienscope Core
//!
//! Market data retrieval and normalization for the lienscope mortgage
//! investment dashboard.
//!
//! ## Overview
//!
//! The crate fetches named macroeconomic series from FRED, normalizes them
//! into ascending [`Series`], and derives presentation values from them:
//!
//! - **Domain models** for dates, points, series and metrics
//! - **FRED adapter** behind the [`SeriesSource`] trait
//! - **Market data client** that swaps in synthetic data on any failure
//! - **Change calculator** and **chart formatter** for the UI layer
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | FRED `series/observations` adapter |
//! | [`analytics`] | [`ChangeSummary`] over the last two points |
//! | [`chart`] | Chart rows with a caller-chosen value key |
//! | [`client`] | [`MarketDataClient`], the never-failing fetch entry point |
//! | [`clock`] | "Today" seam for dating synthetic series |
//! | [`config`] | Environment-driven FRED settings |
//! | [`data_source`] | Source trait, request and error types |
//! | [`domain`] | Domain models |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`synthetic`] | Fallback series generator |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / UI layer │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌───────────────────┐  error  ┌─────────────────────┐
//! │ MarketDataClient  │───────▶│ SyntheticGenerator  │
//! └────────┬──────────┘         └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ SeriesSource    │────▶│ HTTP Client      │
//! │ (FredAdapter)   │     │ (reqwest/offline)│
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! [`SeriesSource`] implementations return structured [`SourceError`]s.
//! [`MarketDataClient`] absorbs them: callers always receive a [`Series`],
//! and [`SeriesSnapshot::source`] says whether it is live or synthetic.
//!
//! ## Security
//!
//! - The FRED API key is read from the environment and never logged
//! - Transport errors are stripped of the request URL before reporting

pub mod adapters;
pub mod analytics;
pub mod chart;
pub mod client;
pub mod clock;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod source;
pub mod synthetic;

pub use adapters::{normalize_observations, FredAdapter, MISSING_VALUE_SENTINEL};

pub use analytics::ChangeSummary;

pub use chart::{format_chart_data, ChartPoint};

pub use client::{MarketDataClient, MarketOverview, SeriesSnapshot};

pub use clock::{Clock, FixedClock, SystemClock};

pub use config::FredConfig;

pub use data_source::{SeriesRequest, SeriesSource, SourceError, SourceErrorKind};

pub use domain::{Cadence, CalendarDate, MarketDataPoint, Metric, Series, SyntheticProfile};

pub use error::ValidationError;

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, OfflineHttpClient,
    ReqwestHttpClient,
};

pub use source::ProviderId;

pub use synthetic::{SyntheticGenerator, SYNTHETIC_SERIES_LEN};
