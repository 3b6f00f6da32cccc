//! Index values.

mod model;

pub use model::{IndexQuote, TopixQuote};

use crate::core::{Endpoint, EndpointRequest, JqClient, Selector};

/// `GET /indices`: daily values of the indices published by JPX.
#[derive(Debug, Clone, Copy)]
pub struct Indices;

impl Endpoint for Indices {
    const PATH: &'static str = "/indices";
    const PAYLOAD_KEY: &'static str = "indices";
    const SELECTOR: Selector = Selector::AnyOf(&["code", "date"]);
    type Record = IndexQuote;
}

/// `GET /indices/topix`: TOPIX daily values.
#[derive(Debug, Clone, Copy)]
pub struct Topix;

impl Endpoint for Topix {
    const PATH: &'static str = "/indices/topix";
    const PAYLOAD_KEY: &'static str = "topix";
    type Record = TopixQuote;
}

impl JqClient {
    /// Index four values. Requires `.code(..)` (index code) or `.date(..)`.
    #[must_use]
    pub fn indices(&self) -> EndpointRequest<'_, Indices> {
        self.endpoint()
    }

    /// TOPIX daily values; narrow with `.between(from, to)`.
    #[must_use]
    pub fn topix(&self) -> EndpointRequest<'_, Topix> {
        self.endpoint()
    }
}
