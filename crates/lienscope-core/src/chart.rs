//! Chart rows for plotting a series.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::{CalendarDate, Series};

const DATE_KEY: &str = "date";
const FORMATTED_DATE_KEY: &str = "formattedDate";

/// One plotted point. The value is keyed under a caller-chosen label when
/// serialized: `{"date":"2024-01-15","rate":6.8,"formattedDate":"Jan 15"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: CalendarDate,
    pub label: String,
    pub value: f64,
    pub formatted_date: String,
}

impl ChartPoint {
    /// Value under `label`, if that is this row's label.
    pub fn value_for(&self, label: &str) -> Option<f64> {
        (self.label == label).then_some(self.value)
    }
}

impl Serialize for ChartPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // A label colliding with a fixed key keeps the key's position and the
        // later write wins, the same as building the row as a plain object.
        let mut map = serializer.serialize_map(None)?;
        match self.label.as_str() {
            DATE_KEY => {
                map.serialize_entry(DATE_KEY, &self.value)?;
                map.serialize_entry(FORMATTED_DATE_KEY, &self.formatted_date)?;
            }
            FORMATTED_DATE_KEY => {
                map.serialize_entry(DATE_KEY, &self.date)?;
                map.serialize_entry(FORMATTED_DATE_KEY, &self.formatted_date)?;
            }
            label => {
                map.serialize_entry(DATE_KEY, &self.date)?;
                map.serialize_entry(label, &self.value)?;
                map.serialize_entry(FORMATTED_DATE_KEY, &self.formatted_date)?;
            }
        }
        map.end()
    }
}

/// Projects a series into chart rows, value keyed under `label`.
pub fn format_chart_data(series: &Series, label: &str) -> Vec<ChartPoint> {
    series
        .iter()
        .map(|point| ChartPoint {
            date: point.date,
            label: label.to_owned(),
            value: point.value,
            formatted_date: point.date.short_label(),
        })
        .collect()
}
