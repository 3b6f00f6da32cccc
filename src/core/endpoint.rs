//! The uniform binding shape shared by every endpoint.
//!
//! An endpoint is described once, as a zero-sized type implementing [`Endpoint`]. The
//! generic [`EndpointRequest`] builder then provides the three call shapes for it:
//! page-at-a-time ([`EndpointRequest::fetch_page`]), fully paginated
//! ([`EndpointRequest::fetch`]) and streamed ([`EndpointRequest::pages`]).

use std::fmt;
use std::marker::PhantomData;

use futures::Stream;
use serde::de::DeserializeOwned;

use crate::core::params::{DateFormat, DateParam, Params, Selector};
use crate::core::wire;
use crate::core::{CancelToken, JqClient, JqError, Page, PageOptions, Query};

/// Static description of one upstream endpoint.
pub trait Endpoint {
    /// Path below the API base, starting with `/`.
    const PATH: &'static str;
    /// Name of the array field holding the records in each response.
    const PAYLOAD_KEY: &'static str;
    /// Parameters the endpoint insists on.
    const SELECTOR: Selector = Selector::Optional;
    /// Spelling of date parameters sent to this endpoint.
    const DATE_FORMAT: DateFormat = DateFormat::Dashed;
    /// The decoded record type.
    type Record: DeserializeOwned;
}

/// A builder for one call against endpoint `E`.
///
/// Obtained from [`JqClient::endpoint`] or one of the named shortcuts such as
/// [`JqClient::daily_quotes`](crate::JqClient::daily_quotes).
pub struct EndpointRequest<'a, E: Endpoint> {
    client: &'a JqClient,
    params: Params,
    options: PageOptions,
    _endpoint: PhantomData<fn() -> E>,
}

impl<E: Endpoint> fmt::Debug for EndpointRequest<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointRequest")
            .field("path", &E::PATH)
            .field("params", &self.params)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<E: Endpoint> Clone for EndpointRequest<'_, E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            params: self.params.clone(),
            options: self.options.clone(),
            _endpoint: PhantomData,
        }
    }
}

impl<'a, E: Endpoint> EndpointRequest<'a, E> {
    /// Creates a new request with no parameters set.
    #[must_use]
    pub fn new(client: &'a JqClient) -> Self {
        Self {
            client,
            params: Params::new(),
            options: PageOptions::new(),
            _endpoint: PhantomData,
        }
    }

    /// Filter by security code (4- or 5-digit form).
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set_code(code);
        self
    }

    /// Filter to a single date (`YYYYMMDD` or `YYYY-MM-DD`, or a `NaiveDate`).
    #[must_use]
    pub fn date(mut self, date: impl Into<DateParam>) -> Self {
        self.params.set_date(date);
        self
    }

    /// Lower bound of the date range (inclusive).
    #[must_use]
    pub fn from(mut self, from: impl Into<DateParam>) -> Self {
        self.params.set_from(from);
        self
    }

    /// Upper bound of the date range (inclusive).
    #[must_use]
    pub fn to(mut self, to: impl Into<DateParam>) -> Self {
        self.params.set_to(to);
        self
    }

    /// Shorthand for `.from(from).to(to)`.
    #[must_use]
    pub fn between(self, from: impl Into<DateParam>, to: impl Into<DateParam>) -> Self {
        self.from(from).to(to)
    }

    /// Stop after `n` requests. Records from those pages are returned without error.
    #[must_use]
    pub const fn max_pages(mut self, n: usize) -> Self {
        self.options.max_pages = Some(n);
        self
    }

    /// Abort the call when `token` is cancelled.
    #[must_use]
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.options.cancel = Some(token);
        self
    }

    /// Set an endpoint-specific text parameter.
    #[must_use]
    pub(crate) fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.set_text(name, value);
        self
    }

    /// Set an endpoint-specific date parameter.
    #[must_use]
    pub(crate) fn date_field(mut self, name: &'static str, value: impl Into<DateParam>) -> Self {
        self.params.set_date_field(name, value);
        self
    }

    /// The query this request would send, without a continuation token.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] when the parameters fail validation.
    pub fn query(&self) -> Result<Query, JqError> {
        self.params.encode(E::DATE_FORMAT, E::SELECTOR)
    }

    /// Fetch one page. Pass the token from a previous page to continue.
    ///
    /// A token set with [`EndpointRequest::cancel_on`] is honoured; the page cap is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// [`JqError::InvalidArgument`] before any request if the parameters are invalid;
    /// [`JqError::Cancelled`] if the token fires before or during the request;
    /// otherwise any transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, pagination_key), err, fields(path = E::PATH)))]
    pub async fn fetch_page(&self, pagination_key: Option<&str>) -> Result<Page<E::Record>, JqError> {
        let query = self.query()?;
        self.client
            .fetch_page_cancellable(
                E::PATH,
                &query,
                E::PAYLOAD_KEY,
                pagination_key,
                wire::from_value::<E::Record>,
                self.options.cancel.as_ref(),
            )
            .await
    }

    /// Fetch every page and return the records in server order.
    ///
    /// # Errors
    ///
    /// [`JqError::InvalidArgument`] before any request if the parameters are invalid;
    /// otherwise the first transport, decode or cancellation error. Partial results are
    /// discarded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(path = E::PATH)))]
    pub async fn fetch(self) -> Result<Vec<E::Record>, JqError> {
        let query = self.query()?;
        self.client
            .paginate(E::PATH, query, E::PAYLOAD_KEY, &self.options)
            .await
    }

    /// Stream pages as they arrive.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] up front if the parameters are invalid.
    pub fn pages(self) -> Result<impl Stream<Item = Result<Page<E::Record>, JqError>> + 'a, JqError>
    where
        E: 'a,
        E::Record: 'a,
    {
        let query = self.query()?;
        Ok(self
            .client
            .pages(E::PATH, query, E::PAYLOAD_KEY, self.options))
    }
}

impl JqClient {
    /// A request builder for any [`Endpoint`].
    #[must_use]
    pub fn endpoint<E: Endpoint>(&self) -> EndpointRequest<'_, E> {
        EndpointRequest::new(self)
    }
}
