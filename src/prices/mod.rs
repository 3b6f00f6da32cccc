//! Equity prices.

mod model;

pub use model::{DailyQuote, MorningQuote};

use crate::core::{Endpoint, EndpointRequest, JqClient, Selector};

/// `GET /prices/daily_quotes`: daily bars, by code and/or date range.
#[derive(Debug, Clone, Copy)]
pub struct DailyQuotes;

impl Endpoint for DailyQuotes {
    const PATH: &'static str = "/prices/daily_quotes";
    const PAYLOAD_KEY: &'static str = "daily_quotes";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = DailyQuote;
}

/// `GET /prices/prices_am`: morning-session prices, published around midday.
#[derive(Debug, Clone, Copy)]
pub struct PricesAm;

impl Endpoint for PricesAm {
    const PATH: &'static str = "/prices/prices_am";
    const PAYLOAD_KEY: &'static str = "prices_am";
    type Record = MorningQuote;
}

impl JqClient {
    /// Daily stock prices. Requires `.code(..)` or `.date(..)`; a code may be combined
    /// with `.between(from, to)`.
    #[must_use]
    pub fn daily_quotes(&self) -> EndpointRequest<'_, DailyQuotes> {
        self.endpoint()
    }

    /// Morning-session prices of the current trading day.
    #[must_use]
    pub fn prices_am(&self) -> EndpointRequest<'_, PricesAm> {
        self.endpoint()
    }
}
