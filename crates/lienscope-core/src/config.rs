//! Environment-driven FRED connection settings.
//!
//! A missing key is not an error: the placeholder is sent, the upstream call
//! fails, and the client serves synthetic data.

use std::fmt::{Debug, Formatter};

use tracing::warn;

pub const DEFAULT_FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred";
pub const PLACEHOLDER_API_KEY: &str = "demo_key";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

const API_KEY_VARS: [&str; 2] = ["LIENSCOPE_FRED_API_KEY", "FRED_API_KEY"];
const BASE_URL_VAR: &str = "LIENSCOPE_FRED_BASE_URL";
const TIMEOUT_VAR: &str = "LIENSCOPE_FRED_TIMEOUT_MS";

#[derive(Clone, PartialEq, Eq)]
pub struct FredConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_FRED_BASE_URL),
            api_key: String::from(PLACEHOLDER_API_KEY),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FredConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| non_empty(*name))
            .unwrap_or(defaults.api_key);

        let base_url = non_empty(BASE_URL_VAR).unwrap_or(defaults.base_url);

        let timeout_ms = match non_empty(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(value) if value > 0 => value,
                _ => {
                    warn!(variable = TIMEOUT_VAR, value = %raw, "ignoring invalid timeout");
                    defaults.timeout_ms
                }
            },
            None => defaults.timeout_ms,
        };

        Self {
            base_url,
            api_key,
            timeout_ms,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

impl Debug for FredConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FredConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
