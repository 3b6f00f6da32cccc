use serde::{Deserialize, Serialize};

use crate::core::wire::{flag, lenient};

/// Put or call, from the server's `PutCallDivision` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PutCall {
    Put,
    Call,
}

impl PutCall {
    /// `1` is a put, `2` a call.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Put),
            "2" => Some(Self::Call),
            _ => None,
        }
    }
}

/// Daily futures prices (`/derivatives/futures`).
///
/// Session prices are `None` when the session did not trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FuturesQuote {
    pub code: String,
    pub derivatives_product_category: String,
    pub date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_interest: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub turnover_value: Option<f64>,
    /// `YYYY-MM`.
    pub contract_month: String,
    #[serde(rename = "Volume(OnlyAuction)", default, deserialize_with = "lenient")]
    pub volume_only_auction: Option<f64>,
    /// `001` normal settlement, `002` emergency margin triggered.
    #[serde(default)]
    pub emergency_margin_trigger_division: String,
    pub last_trading_day: String,
    pub special_quotation_day: String,
    #[serde(default, deserialize_with = "lenient")]
    pub settlement_price: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub central_contract_month_flag: Option<bool>,
}

/// Daily option prices for equity and index options (`/derivatives/options`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionQuote {
    pub code: String,
    pub derivatives_product_category: String,
    /// Underlying security code, or `-` for index options.
    #[serde(rename = "UnderlyingSSO", default)]
    pub underlying_sso: String,
    pub date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub morning_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_interest: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub turnover_value: Option<f64>,
    pub contract_month: String,
    #[serde(default, deserialize_with = "lenient")]
    pub strike_price: Option<f64>,
    #[serde(rename = "Volume(OnlyAuction)", default, deserialize_with = "lenient")]
    pub volume_only_auction: Option<f64>,
    #[serde(default)]
    pub emergency_margin_trigger_division: String,
    pub put_call_division: String,
    pub last_trading_day: String,
    pub special_quotation_day: String,
    #[serde(default, deserialize_with = "lenient")]
    pub settlement_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub theoretical_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub underlying_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub implied_volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub central_contract_month_flag: Option<bool>,
}

impl OptionQuote {
    #[must_use]
    pub fn put_call(&self) -> Option<PutCall> {
        PutCall::from_code(&self.put_call_division)
    }
}

/// Nikkei 225 option prices (`/option/index_option`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexOptionQuote {
    pub date: String,
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub whole_day_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub night_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub day_session_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<f64>,
    #[serde(rename = "Volume(OnlyAuction)", default, deserialize_with = "lenient")]
    pub volume_only_auction: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_interest: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub turnover_value: Option<f64>,
    pub contract_month: String,
    #[serde(default, deserialize_with = "lenient")]
    pub strike_price: Option<f64>,
    #[serde(default)]
    pub emergency_margin_trigger_division: String,
    pub put_call_division: String,
    pub last_trading_day: String,
    pub special_quotation_day: String,
    #[serde(default, deserialize_with = "lenient")]
    pub settlement_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub theoretical_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub underlying_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub implied_volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub interest_rate: Option<f64>,
}

impl IndexOptionQuote {
    #[must_use]
    pub fn put_call(&self) -> Option<PutCall> {
        PutCall::from_code(&self.put_call_division)
    }
}
