//! Listed-issue master data.

mod model;

pub use model::ListedIssue;

use crate::core::{Endpoint, EndpointRequest, JqClient};

/// `GET /listed/info`: issues listed on a given date (defaults to the latest).
#[derive(Debug, Clone, Copy)]
pub struct ListedInfo;

impl Endpoint for ListedInfo {
    const PATH: &'static str = "/listed/info";
    const PAYLOAD_KEY: &'static str = "info";
    type Record = ListedIssue;
}

impl JqClient {
    /// Listed-issue information. Filter with `.code(..)` and/or `.date(..)`.
    #[must_use]
    pub fn listed_info(&self) -> EndpointRequest<'_, ListedInfo> {
        self.endpoint()
    }
}
