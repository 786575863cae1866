//! Forecast document
//!
//! The upstream forecast is passed through and cached untouched. Only
//! display code looks inside it, through [`ForecastDocument::periods`].

use serde::{Deserialize, Serialize};

/// Number of periods shown in a short forecast
pub const SHORT_FORECAST_PERIODS: usize = 3;

/// Opaque JSON payload returned by the weather service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastDocument(serde_json::Value);

impl ForecastDocument {
    /// Wrap a raw upstream payload
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the raw payload
    #[must_use]
    pub const fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    /// Forecast periods listed under `properties.periods`
    ///
    /// Entries that are not objects are skipped. A document without a
    /// period list yields an empty vector.
    pub fn periods(&self) -> Vec<ForecastPeriod> {
        self.0
            .pointer("/properties/periods")
            .and_then(serde_json::Value::as_array)
            .map(|periods| {
                periods
                    .iter()
                    .filter_map(|p| ForecastPeriod::deserialize(p).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<serde_json::Value> for ForecastDocument {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// One named forecast period ("Tonight", "Friday", ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastPeriod {
    /// Period name
    pub name: String,
    /// ISO 8601 start of the period
    pub start_time: String,
    /// Forecast temperature
    pub temperature: Option<f64>,
    /// Temperature unit ("F" or "C")
    pub temperature_unit: String,
    /// Short textual forecast
    pub short_forecast: String,
    /// Wind speed text, e.g. "5 to 10 mph"
    pub wind_speed: Option<String>,
    /// Wind direction, e.g. "NW"
    pub wind_direction: Option<String>,
    /// Whether the period is daytime
    pub is_daytime: Option<bool>,
}

/// Pick the periods for a short forecast
///
/// Prefers daytime periods when at least three exist, otherwise takes the
/// first three periods in document order.
pub fn select_periods(document: &ForecastDocument) -> Vec<ForecastPeriod> {
    let periods = document.periods();
    let daytime: Vec<ForecastPeriod> = periods
        .iter()
        .filter(|p| p.is_daytime == Some(true))
        .take(SHORT_FORECAST_PERIODS)
        .cloned()
        .collect();

    if daytime.len() >= SHORT_FORECAST_PERIODS {
        daytime
    } else {
        periods.into_iter().take(SHORT_FORECAST_PERIODS).collect()
    }
}
