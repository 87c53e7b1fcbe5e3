//! CLI argument definitions for lienscope.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `series` | Fetch one metric with change summary and chart rows |
//! | `dashboard` | Fetch every metric concurrently |
//! | `watch` | Re-fetch one metric on an interval |
//! | `sources` | List tracked metrics and their FRED series |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output (not `watch`) |
//! | `--offline` | `false` | Never touch the network; serve synthetic data |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//! | `--api-key` | env | FRED API key |
//! | `--base-url` | env | FRED API base URL |
//! | `--timeout-ms` | env | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! lienscope series mortgage_rate --limit 12 --pretty
//! lienscope series UNRATE --label unemployment
//! lienscope dashboard --offline
//! lienscope watch mortgage_rate --interval-secs 300 --iterations 3
//! ```

use clap::{Args, Parser, Subcommand};

/// Mortgage market data CLI backed by FRED.
#[derive(Debug, Parser)]
#[command(
    name = "lienscope",
    author,
    version,
    about = "Mortgage market data from FRED with synthetic fallback",
    long_about = "lienscope fetches mortgage-market series from the St. Louis Fed FRED API \
and prints them as JSON. When FRED is unreachable or returns something unusable, a \
plausible synthetic series is served instead and flagged in the output.\n\
\n\
Use 'lienscope <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    ///
    /// `watch` always writes one compact line per fetch.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Disable network access; every metric is served synthetic data.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Log filter used when RUST_LOG is unset (e.g. warn, debug, lienscope_core=debug).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// FRED API key; overrides LIENSCOPE_FRED_API_KEY and FRED_API_KEY.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// FRED API base URL; overrides LIENSCOPE_FRED_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds; overrides LIENSCOPE_FRED_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one metric with its change summary and chart rows.
    ///
    /// # Examples
    ///
    ///   lienscope series mortgage_rate
    ///   lienscope series CSUSHPINSA --limit 24 --label index
    Series(SeriesArgs),

    /// Fetch every tracked metric concurrently.
    Dashboard(DashboardArgs),

    /// Poll one metric, printing one JSON line per fetch.
    Watch(WatchArgs),

    /// List tracked metrics, FRED series ids, cadences and fallback ranges.
    Sources,
}

/// Arguments for the `series` command.
#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Metric name (mortgage_rate, home_price_index, unemployment_rate,
    /// delinquency_rate) or FRED series id.
    pub metric: String,

    /// Maximum number of most recent points to fetch.
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Value key used in chart rows; defaults to the metric's own label.
    #[arg(long)]
    pub label: Option<String>,
}

/// Arguments for the `dashboard` command.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Maximum number of most recent points per metric.
    #[arg(long, default_value_t = 30)]
    pub limit: usize,
}

/// Arguments for the `watch` command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Metric name or FRED series id.
    pub metric: String,

    /// Maximum number of most recent points per fetch.
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Seconds between fetches.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Number of fetches before exiting; 0 polls until interrupted.
    #[arg(long, default_value_t = 0)]
    pub iterations: u64,
}
