use serde::{Deserialize, Serialize};

use crate::Series;

/// Latest move of a series: the last value against the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    /// Percent move relative to `previous`; 0 when `previous` is 0.
    pub change_percent: f64,
}

impl ChangeSummary {
    /// All-zero summary when the series has fewer than two points.
    pub fn from_series(series: &Series) -> Self {
        let [.., previous, current] = series.points() else {
            return Self::default();
        };

        let (current, previous) = (current.value, previous.value);
        let change = current - previous;
        let change_percent = if previous == 0.0 {
            0.0
        } else {
            change / previous * 100.0
        };

        Self {
            current,
            previous,
            change,
            change_percent,
        }
    }

    pub fn is_increase(&self) -> bool {
        self.change > 0.0
    }
}

impl Series {
    pub fn change_summary(&self) -> ChangeSummary {
        ChangeSummary::from_series(self)
    }
}
