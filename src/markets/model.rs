use serde::{Deserialize, Serialize};

use crate::core::wire::lenient;

/* ---------------- Trading calendar ---------------- */

/// One day of the exchange calendar (`/markets/trading_calendar`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradingCalendarDay {
    pub date: String,
    /// Raw division code; see [`TradingCalendarDay::division`].
    pub holiday_division: String,
}

impl TradingCalendarDay {
    #[must_use]
    pub fn division(&self) -> HolidayDivision {
        HolidayDivision::from_code(&self.holiday_division)
    }

    /// Whether the cash equity market trades on this day.
    #[must_use]
    pub fn is_trading_day(&self) -> bool {
        self.division().is_trading_day()
    }
}

/// Classification of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolidayDivision {
    /// `0`
    NonBusinessDay,
    /// `1`
    BusinessDay,
    /// `2`: the morning session only (Tokyo exchange's first and last business days).
    HalfDayTrading,
    /// `3`: exchange holiday on which holiday trading of derivatives takes place.
    NonBusinessDayWithHolidayTrading,
    Unknown(String),
}

impl HolidayDivision {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => Self::NonBusinessDay,
            "1" => Self::BusinessDay,
            "2" => Self::HalfDayTrading,
            "3" => Self::NonBusinessDayWithHolidayTrading,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NonBusinessDay => "0",
            Self::BusinessDay => "1",
            Self::HalfDayTrading => "2",
            Self::NonBusinessDayWithHolidayTrading => "3",
            Self::Unknown(s) => s,
        }
    }

    #[must_use]
    pub const fn is_trading_day(&self) -> bool {
        matches!(self, Self::BusinessDay | Self::HalfDayTrading)
    }
}

/* ---------------- Trading by investor type ---------------- */

/// Sales/purchases of one investor category over one week, in thousands of yen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TradeFlow {
    pub sales: Option<f64>,
    pub purchases: Option<f64>,
    pub total: Option<f64>,
    pub balance: Option<f64>,
}

/// Weekly trading by type of investor (`/markets/trades_spec`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "serde_json::Map<String, serde_json::Value>",
    into = "serde_json::Map<String, serde_json::Value>"
)]
pub struct InvestorTrades {
    pub published_date: String,
    pub start_date: String,
    pub end_date: String,
    /// Market section, e.g. `TSEPrime`.
    pub section: String,
    pub proprietary: TradeFlow,
    pub brokerage: TradeFlow,
    pub total: TradeFlow,
    pub individuals: TradeFlow,
    pub foreigners: TradeFlow,
    pub securities_cos: TradeFlow,
    pub investment_trusts: TradeFlow,
    pub business_cos: TradeFlow,
    pub other_cos: TradeFlow,
    pub insurance_cos: TradeFlow,
    pub city_banks_regional_banks_etc: TradeFlow,
    pub trust_banks: TradeFlow,
    pub other_financial_institutions: TradeFlow,
}

/* ---------------- Margin interest ---------------- */

/// Weekly margin trading outstanding (`/markets/weekly_margin_interest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyMargin {
    pub date: String,
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub short_margin_trade_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_margin_trade_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_negotiable_margin_trade_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_negotiable_margin_trade_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_standardized_margin_trade_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_standardized_margin_trade_volume: Option<f64>,
    /// `1` margin issue, `2` loan issue, `3` other.
    pub issue_type: String,
}

/// Positional flags explaining why a daily margin balance was published.
///
/// The raw string is kept verbatim; each position holds `0` or `1` in the order
/// restricted, daily publication, monitoring, restricted by JSF, precaution by JSF,
/// unclear or on alert. Positions beyond the end of the string read as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PublishReason(String);

impl PublishReason {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn bit(&self, pos: usize) -> bool {
        self.0.as_bytes().get(pos) == Some(&b'1')
    }

    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.bit(0)
    }

    #[must_use]
    pub fn is_daily_publication(&self) -> bool {
        self.bit(1)
    }

    #[must_use]
    pub fn is_monitoring(&self) -> bool {
        self.bit(2)
    }

    #[must_use]
    pub fn is_restricted_by_jsf(&self) -> bool {
        self.bit(3)
    }

    #[must_use]
    pub fn is_precaution_by_jsf(&self) -> bool {
        self.bit(4)
    }

    #[must_use]
    pub fn is_unclear_or_sec_on_alert(&self) -> bool {
        self.bit(5)
    }
}

/// Daily margin balance of an issue under daily publication (`/markets/daily_margin_interest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyMargin {
    pub published_date: String,
    pub code: String,
    pub application_date: String,
    #[serde(default)]
    pub publish_reason: PublishReason,
    #[serde(default, deserialize_with = "lenient")]
    pub short_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_short_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_margin_outstanding_listed_share_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_long_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_margin_outstanding_listed_share_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_long_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_negotiable_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_short_negotiable_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_standardized_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_short_standardized_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_negotiable_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_long_negotiable_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_standardized_margin_outstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_change_long_standardized_margin_outstanding: Option<f64>,
    #[serde(
        rename = "TSEMarginBorrowingAndLendingRegulationClassification",
        default
    )]
    pub tse_margin_regulation_classification: Option<String>,
}

/* ---------------- Short selling ---------------- */

/// Short-selling turnover by TSE 33-sector (`/markets/short_selling`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortSellingValue {
    pub date: String,
    pub sector33_code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub selling_excluding_short_selling_turnover_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_selling_with_restrictions_turnover_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_selling_without_restrictions_turnover_value: Option<f64>,
}

/// A reported short position of 0.5% or more (`/markets/short_selling_positions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortPosition {
    pub disclosed_date: String,
    pub calculated_date: String,
    pub code: String,
    pub short_seller_name: String,
    #[serde(default)]
    pub short_seller_address: String,
    #[serde(default)]
    pub discretionary_investment_contractor_name: String,
    #[serde(default)]
    pub discretionary_investment_contractor_address: String,
    #[serde(default)]
    pub investment_fund_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub short_positions_to_shares_outstanding_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_positions_in_shares_number: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_positions_in_trading_units_number: Option<f64>,
    /// Empty when no previous report exists.
    #[serde(default)]
    pub calculation_in_previous_reporting_date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub short_positions_in_previous_reporting_ratio: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

/* ---------------- Breakdown ---------------- */

/// Daily trading breakdown by trade type (`/markets/breakdown`). Values in yen, volumes in shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeBreakdown {
    pub date: String,
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub long_sell_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_sell_without_margin_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_sell_new_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_sell_close_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_buy_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_buy_new_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_buy_close_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_sell_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_sell_without_margin_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_sell_new_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_sell_close_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_buy_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_buy_new_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin_buy_close_volume: Option<f64>,
}
