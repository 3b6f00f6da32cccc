//! Financial disclosures.

mod model;

pub use model::{Announcement, DividendNotice, Statement};

use crate::core::{Endpoint, EndpointRequest, JqClient, Selector};

/// `GET /fins/statements`: quarterly/annual results summaries.
#[derive(Debug, Clone, Copy)]
pub struct Statements;

impl Endpoint for Statements {
    const PATH: &'static str = "/fins/statements";
    const PAYLOAD_KEY: &'static str = "statements";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = Statement;
}

/// `GET /fins/announcement`: earnings announcements scheduled for the next business day.
#[derive(Debug, Clone, Copy)]
pub struct Announcements;

impl Endpoint for Announcements {
    const PATH: &'static str = "/fins/announcement";
    const PAYLOAD_KEY: &'static str = "announcement";
    type Record = Announcement;
}

/// `GET /fins/dividend`: dividend notices.
#[derive(Debug, Clone, Copy)]
pub struct Dividend;

impl Endpoint for Dividend {
    const PATH: &'static str = "/fins/dividend";
    const PAYLOAD_KEY: &'static str = "dividend";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = DividendNotice;
}

impl JqClient {
    /// Financial statement summaries. Requires `.code(..)` or `.date(..)` (disclosure date).
    #[must_use]
    pub fn statements(&self) -> EndpointRequest<'_, Statements> {
        self.endpoint()
    }

    /// Upcoming earnings announcements.
    #[must_use]
    pub fn announcements(&self) -> EndpointRequest<'_, Announcements> {
        self.endpoint()
    }

    /// Dividend notices. Requires `.code(..)` or `.date(..)` (announcement date).
    #[must_use]
    pub fn dividends(&self) -> EndpointRequest<'_, Dividend> {
        self.endpoint()
    }
}
