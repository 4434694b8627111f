use serde::{Deserialize, Serialize};

/// Day-level date format shared by tick labels and tooltips.
pub const DAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Tick cadence of the calendar time axis.
///
/// Listing history is daily, so `Day` is the only cadence backends are
/// required to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeAxisUnit {
    #[default]
    Day,
}

/// X-axis contract handed to backends: a daily calendar scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    pub title: String,
    pub unit: TimeAxisUnit,
    pub date_format: String,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            title: "Date".to_owned(),
            unit: TimeAxisUnit::Day,
            date_format: DAY_DATE_FORMAT.to_owned(),
        }
    }
}

/// Y-axis contract: a computed title over a linear value scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisConfig {
    pub title: String,
}

impl ValueAxisConfig {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for ValueAxisConfig {
    /// Generic title used when no graph kind has resolved one.
    fn default() -> Self {
        Self::titled("Value")
    }
}
