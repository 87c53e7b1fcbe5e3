mod dashboard;
mod series;
mod sources;
mod watch;

use lienscope_core::{FredConfig, MarketDataClient, ProviderId, SeriesSnapshot};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Envelope, Metadata};
use crate::output;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
    pub sources: Vec<ProviderId>,
}

impl CommandResult {
    pub fn ok(data: Value, sources: Vec<ProviderId>) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            latency_ms: 0,
            sources,
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Provenance and fallback warnings for a set of fetched snapshots.
    pub fn from_snapshots<'a>(
        data: Value,
        snapshots: impl IntoIterator<Item = &'a SeriesSnapshot>,
    ) -> Self {
        let mut sources = Vec::new();
        let mut warnings = Vec::new();

        for snapshot in snapshots {
            if !sources.contains(&snapshot.source) {
                sources.push(snapshot.source);
            }
            if let Some(reason) = &snapshot.fallback_reason {
                warnings.push(format!(
                    "{}: serving synthetic data ({reason})",
                    snapshot.metric
                ));
            }
        }

        Self::ok(data, sources).with_warnings(warnings)
    }

    pub fn into_envelope(self) -> Envelope<Value> {
        let Self {
            data,
            warnings,
            latency_ms,
            sources,
        } = self;

        let mut meta = Metadata::new(sources, latency_ms);
        for warning in warnings {
            meta.push_warning(warning);
        }

        Envelope { meta, data }
    }
}

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli);
    let warnings = config_warnings(&config, cli.offline);
    debug!(?config, offline = cli.offline, "resolved configuration");

    let client = if cli.offline {
        MarketDataClient::offline(config)
    } else {
        MarketDataClient::from_config(config)
    };

    let command_result = match &cli.command {
        Command::Series(args) => series::run(args, &client).await?,
        Command::Dashboard(args) => dashboard::run(args, &client).await?,
        Command::Watch(args) => return watch::run(args, &client, warnings).await,
        Command::Sources => sources::run(&client)?,
    };

    emit(command_result.with_warnings(warnings), cli.pretty)
}

/// Wraps a command result in the envelope and writes it to stdout.
pub fn emit(result: CommandResult, pretty: bool) -> Result<(), CliError> {
    output::render(&result.into_envelope(), pretty)
}

fn resolve_config(cli: &Cli) -> FredConfig {
    let mut config = FredConfig::from_env();
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.as_str());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    config
}

fn config_warnings(config: &FredConfig, offline: bool) -> Vec<String> {
    if config.has_placeholder_key() && !offline {
        vec![String::from(
            "no FRED API key configured; requests use the placeholder key and will fall back to synthetic data",
        )]
    } else {
        Vec::new()
    }
}

fn elapsed_ms(started: std::time::Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
