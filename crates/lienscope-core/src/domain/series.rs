use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ValidationError};

/// Normalized `(date, value)` observation. The value is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    pub date: CalendarDate,
    pub value: f64,
}

impl MarketDataPoint {
    pub fn new(date: CalendarDate, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }

        Ok(Self { date, value })
    }
}

/// Chronologically ascending, duplicate-free sequence of points for one metric.
///
/// Read-only once constructed; a refresh produces a new `Series`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<MarketDataPoint>,
}

impl Series {
    pub fn new(points: Vec<MarketDataPoint>) -> Result<Self, ValidationError> {
        for pair in points.windows(2) {
            if pair[0].date >= pair[1].date {
                return Err(ValidationError::SeriesOutOfOrder {
                    previous: pair[0].date.to_string(),
                    next: pair[1].date.to_string(),
                });
            }
        }

        Ok(Self { points })
    }

    /// Skips the ordering check; callers must supply strictly ascending dates.
    pub(crate) fn from_ascending(points: Vec<MarketDataPoint>) -> Self {
        debug_assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
        Self { points }
    }

    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[MarketDataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&MarketDataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&MarketDataPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketDataPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a MarketDataPoint;
    type IntoIter = std::slice::Iter<'a, MarketDataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<MarketDataPoint>> for Series {
    type Error = ValidationError;

    fn try_from(value: Vec<MarketDataPoint>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<MarketDataPoint>::deserialize(deserializer)?;
        Self::new(points).map_err(serde::de::Error::custom)
    }
}
