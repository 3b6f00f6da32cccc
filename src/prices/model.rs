use serde::{Deserialize, Serialize};

use crate::core::wire::{flag, lenient};

/// One daily OHLCV bar (`/prices/daily_quotes`).
///
/// Prices are `None` when the server withholds them (`"-"`), e.g. on days without trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyQuote {
    pub date: String,
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub close: Option<f64>,
    /// The price hit the daily upper limit.
    #[serde(default, deserialize_with = "flag")]
    pub upper_limit: Option<bool>,
    /// The price hit the daily lower limit.
    #[serde(default, deserialize_with = "flag")]
    pub lower_limit: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub turnover_value: Option<f64>,
    /// Split/merge factor applied on this date (1.0 when nothing happened).
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_factor: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjustment_volume: Option<f64>,
}

/// Morning-session prices for the current day (`/prices/prices_am`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MorningQuote {
    pub date: String,
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_turnover_value: Option<f64>,
}
