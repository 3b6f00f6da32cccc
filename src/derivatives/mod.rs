//! Futures and options.

mod model;

pub use model::{FuturesQuote, IndexOptionQuote, OptionQuote, PutCall};

use crate::core::{DateFormat, Endpoint, EndpointRequest, JqClient, Selector};

/// `GET /derivatives/futures`
#[derive(Debug, Clone, Copy)]
pub struct Futures;

impl Endpoint for Futures {
    const PATH: &'static str = "/derivatives/futures";
    const PAYLOAD_KEY: &'static str = "futures";
    const SELECTOR: Selector = Selector::Required(&["date"]);
    const DATE_FORMAT: DateFormat = DateFormat::Compact;
    type Record = FuturesQuote;
}

impl EndpointRequest<'_, Futures> {
    /// Product category, e.g. `TOPIXF`, `NK225F`.
    #[must_use]
    pub fn category(self, category: impl Into<String>) -> Self {
        self.text("category", category)
    }

    /// Restrict to central contract months.
    #[must_use]
    pub fn central_contract_month_only(self) -> Self {
        self.text("contract_flag", "1")
    }
}

/// `GET /derivatives/options`
#[derive(Debug, Clone, Copy)]
pub struct Options;

impl Endpoint for Options {
    const PATH: &'static str = "/derivatives/options";
    const PAYLOAD_KEY: &'static str = "options";
    const SELECTOR: Selector = Selector::Required(&["date"]);
    const DATE_FORMAT: DateFormat = DateFormat::Compact;
    type Record = OptionQuote;
}

impl EndpointRequest<'_, Options> {
    /// Product category, e.g. `NK225E`, `EQOP`.
    #[must_use]
    pub fn category(self, category: impl Into<String>) -> Self {
        self.text("category", category)
    }

    /// Restrict to central contract months.
    #[must_use]
    pub fn central_contract_month_only(self) -> Self {
        self.text("contract_flag", "1")
    }
}

/// `GET /option/index_option`: Nikkei 225 options.
#[derive(Debug, Clone, Copy)]
pub struct IndexOption;

impl Endpoint for IndexOption {
    const PATH: &'static str = "/option/index_option";
    const PAYLOAD_KEY: &'static str = "index_option";
    const SELECTOR: Selector = Selector::Required(&["date"]);
    const DATE_FORMAT: DateFormat = DateFormat::Compact;
    type Record = IndexOptionQuote;
}

impl JqClient {
    /// Futures prices for one trading day. Requires `.date(..)`.
    #[must_use]
    pub fn futures(&self) -> EndpointRequest<'_, Futures> {
        self.endpoint()
    }

    /// Option prices for one trading day. Requires `.date(..)`.
    #[must_use]
    pub fn options(&self) -> EndpointRequest<'_, Options> {
        self.endpoint()
    }

    /// Nikkei 225 option prices for one trading day. Requires `.date(..)`.
    #[must_use]
    pub fn index_option(&self) -> EndpointRequest<'_, IndexOption> {
        self.endpoint()
    }
}
