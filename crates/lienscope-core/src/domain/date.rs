use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::ValidationError;

/// ISO-8601 calendar date (`YYYY-MM-DD`) as used by observation payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }

    /// Axis label in the form `"Jan 15"`.
    pub fn short_label(self) -> String {
        self.0
            .format(format_description!("[month repr:short] [day padding:none]"))
            .unwrap_or_else(|_| self.format_iso())
    }

    /// Steps back `weeks` whole weeks.
    pub fn weeks_before(self, weeks: u32) -> Option<Self> {
        self.0
            .checked_sub(Duration::weeks(i64::from(weeks)))
            .map(Self)
    }

    /// Steps back `months` calendar months, clamping the day to the end of
    /// shorter months (Mar 31 one month back is Feb 28/29).
    pub fn months_before(self, months: u32) -> Option<Self> {
        let current = self.0.year() * 12 + i32::from(u8::from(self.0.month())) - 1;
        let target = current.checked_sub(i32::try_from(months).ok()?)?;
        let year = target.div_euclid(12);
        let month = Month::try_from(u8::try_from(target.rem_euclid(12) + 1).ok()?).ok()?;
        let day = self.0.day().min(days_in_month(year, month)?);

        Date::from_calendar_date(year, month, day).ok().map(Self)
    }
}

fn days_in_month(year: i32, month: Month) -> Option<u8> {
    let (next_year, next_month) = match month {
        Month::December => (year.checked_add(1)?, Month::January),
        other => (year, other.next()),
    };

    Date::from_calendar_date(next_year, next_month, 1)
        .ok()?
        .previous_day()
        .map(Date::day)
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
