//! Market-wide data: calendar, investor flows, margin, short selling and trade breakdown.

mod model;
mod wire;

pub use model::{
    DailyMargin, HolidayDivision, InvestorTrades, PublishReason, ShortPosition,
    ShortSellingValue, TradeBreakdown, TradeFlow, TradingCalendarDay, WeeklyMargin,
};

use crate::core::{DateParam, Endpoint, EndpointRequest, JqClient, Selector};

/// `GET /markets/trading_calendar`
#[derive(Debug, Clone, Copy)]
pub struct TradingCalendar;

impl Endpoint for TradingCalendar {
    const PATH: &'static str = "/markets/trading_calendar";
    const PAYLOAD_KEY: &'static str = "trading_calendar";
    type Record = TradingCalendarDay;
}

impl EndpointRequest<'_, TradingCalendar> {
    /// Only return days of this division.
    #[must_use]
    pub fn holiday_division(self, division: &HolidayDivision) -> Self {
        self.text("holidaydivision", division.code())
    }
}

/// `GET /markets/trades_spec`: weekly trading by type of investor.
#[derive(Debug, Clone, Copy)]
pub struct TradesSpec;

impl Endpoint for TradesSpec {
    const PATH: &'static str = "/markets/trades_spec";
    const PAYLOAD_KEY: &'static str = "trades_spec";
    type Record = InvestorTrades;
}

impl EndpointRequest<'_, TradesSpec> {
    /// Market section, e.g. `TSEPrime`, `TSEStandard`, `TSEGrowth`.
    #[must_use]
    pub fn section(self, section: impl Into<String>) -> Self {
        self.text("section", section)
    }
}

/// `GET /markets/weekly_margin_interest`
#[derive(Debug, Clone, Copy)]
pub struct WeeklyMarginInterest;

impl Endpoint for WeeklyMarginInterest {
    const PATH: &'static str = "/markets/weekly_margin_interest";
    const PAYLOAD_KEY: &'static str = "weekly_margin_interest";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = WeeklyMargin;
}

/// `GET /markets/daily_margin_interest`
#[derive(Debug, Clone, Copy)]
pub struct DailyMarginInterest;

impl Endpoint for DailyMarginInterest {
    const PATH: &'static str = "/markets/daily_margin_interest";
    const PAYLOAD_KEY: &'static str = "daily_margin_interest";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = DailyMargin;
}

/// `GET /markets/short_selling`: short-selling value by sector.
#[derive(Debug, Clone, Copy)]
pub struct ShortSelling;

impl Endpoint for ShortSelling {
    const PATH: &'static str = "/markets/short_selling";
    const PAYLOAD_KEY: &'static str = "short_selling";
    const SELECTOR: Selector = Selector::AnyOf(&["sector33code", "date"]);
    type Record = ShortSellingValue;
}

impl EndpointRequest<'_, ShortSelling> {
    /// TSE 33-sector code, e.g. `0050`.
    #[must_use]
    pub fn sector33_code(self, code: impl Into<String>) -> Self {
        self.text("sector33code", code)
    }
}

/// `GET /markets/short_selling_positions`
#[derive(Debug, Clone, Copy)]
pub struct ShortSellingPositions;

impl Endpoint for ShortSellingPositions {
    const PATH: &'static str = "/markets/short_selling_positions";
    const PAYLOAD_KEY: &'static str = "short_selling_positions";
    const SELECTOR: Selector = Selector::AnyOf(&[
        "code",
        "disclosed_date",
        "disclosed_date_from",
        "calculated_date",
    ]);
    type Record = ShortPosition;
}

impl EndpointRequest<'_, ShortSellingPositions> {
    #[must_use]
    pub fn disclosed_date(self, date: impl Into<DateParam>) -> Self {
        self.date_field("disclosed_date", date)
    }

    /// Positions disclosed between `from` and `to`, inclusive.
    #[must_use]
    pub fn disclosed_between(self, from: impl Into<DateParam>, to: impl Into<DateParam>) -> Self {
        self.date_field("disclosed_date_from", from)
            .date_field("disclosed_date_to", to)
    }

    #[must_use]
    pub fn calculated_date(self, date: impl Into<DateParam>) -> Self {
        self.date_field("calculated_date", date)
    }
}

/// `GET /markets/breakdown`
#[derive(Debug, Clone, Copy)]
pub struct Breakdown;

impl Endpoint for Breakdown {
    const PATH: &'static str = "/markets/breakdown";
    const PAYLOAD_KEY: &'static str = "breakdown";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = TradeBreakdown;
}

impl JqClient {
    /// The exchange calendar; narrow with `.between(from, to)` or `.holiday_division(..)`.
    #[must_use]
    pub fn trading_calendar(&self) -> EndpointRequest<'_, TradingCalendar> {
        self.endpoint()
    }

    /// Weekly trading by type of investor; narrow with `.section(..)` and a date range.
    #[must_use]
    pub fn trades_spec(&self) -> EndpointRequest<'_, TradesSpec> {
        self.endpoint()
    }

    /// Weekly margin trading outstanding. Requires `.code(..)` or `.date(..)`.
    #[must_use]
    pub fn weekly_margin_interest(&self) -> EndpointRequest<'_, WeeklyMarginInterest> {
        self.endpoint()
    }

    /// Daily margin balances of issues under daily publication. Requires `.code(..)` or `.date(..)`.
    #[must_use]
    pub fn daily_margin_interest(&self) -> EndpointRequest<'_, DailyMarginInterest> {
        self.endpoint()
    }

    /// Short-selling value by sector. Requires `.sector33_code(..)` or `.date(..)`.
    #[must_use]
    pub fn short_selling(&self) -> EndpointRequest<'_, ShortSelling> {
        self.endpoint()
    }

    /// Reported short positions. Requires a code, a disclosure date (or range) or a calculation date.
    #[must_use]
    pub fn short_selling_positions(&self) -> EndpointRequest<'_, ShortSellingPositions> {
        self.endpoint()
    }

    /// Trading breakdown by trade type. Requires `.code(..)` or `.date(..)`.
    #[must_use]
    pub fn breakdown(&self) -> EndpointRequest<'_, Breakdown> {
        self.endpoint()
    }
}
