use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Publication cadence of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Weekly,
    Monthly,
}

impl Cadence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the synthetic series substituted when the source is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SyntheticProfile {
    pub base: f64,
    /// Half-width of the uniform noise band applied to each point.
    pub noise: f64,
    /// Added once per cadence step back from today; the newest point sits at `base`.
    pub trend_per_step: f64,
    pub floor: f64,
    pub ceiling: f64,
}

/// Economic series tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MortgageRate,
    HomePriceIndex,
    UnemploymentRate,
    DelinquencyRate,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::MortgageRate,
        Self::HomePriceIndex,
        Self::UnemploymentRate,
        Self::DelinquencyRate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MortgageRate => "mortgage_rate",
            Self::HomePriceIndex => "home_price_index",
            Self::UnemploymentRate => "unemployment_rate",
            Self::DelinquencyRate => "delinquency_rate",
        }
    }

    /// FRED series identifier.
    pub const fn series_id(self) -> &'static str {
        match self {
            Self::MortgageRate => "MORTGAGE30US",
            Self::HomePriceIndex => "CSUSHPINSA",
            Self::UnemploymentRate => "UNRATE",
            Self::DelinquencyRate => "DRSFRMACBS",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::MortgageRate => "30-year fixed rate mortgage average",
            Self::HomePriceIndex => "S&P CoreLogic Case-Shiller U.S. national home price index",
            Self::UnemploymentRate => "Civilian unemployment rate",
            Self::DelinquencyRate => "Delinquency rate on single-family residential mortgages",
        }
    }

    pub const fn cadence(self) -> Cadence {
        match self {
            Self::MortgageRate => Cadence::Weekly,
            Self::HomePriceIndex | Self::UnemploymentRate | Self::DelinquencyRate => {
                Cadence::Monthly
            }
        }
    }

    /// Default value key for chart rows.
    pub const fn chart_label(self) -> &'static str {
        match self {
            Self::MortgageRate | Self::UnemploymentRate | Self::DelinquencyRate => "rate",
            Self::HomePriceIndex => "index",
        }
    }

    pub const fn synthetic_profile(self) -> SyntheticProfile {
        match self {
            Self::MortgageRate => SyntheticProfile {
                base: 6.8,
                noise: 0.15,
                trend_per_step: 0.0,
                floor: 3.0,
                ceiling: 8.0,
            },
            Self::HomePriceIndex => SyntheticProfile {
                base: 310.0,
                noise: 2.5,
                trend_per_step: 0.5,
                floor: 280.0,
                ceiling: 340.0,
            },
            Self::UnemploymentRate => SyntheticProfile {
                base: 3.8,
                noise: 0.25,
                trend_per_step: 0.0,
                floor: 2.0,
                ceiling: 6.0,
            },
            Self::DelinquencyRate => SyntheticProfile {
                base: 2.1,
                noise: 0.15,
                trend_per_step: 0.0,
                floor: 1.0,
                ceiling: 4.0,
            },
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|metric| {
                metric.as_str() == normalized
                    || metric.series_id().eq_ignore_ascii_case(value.trim())
            })
            .ok_or_else(|| ValidationError::InvalidMetric {
                value: value.to_owned(),
            })
    }
}
