//! Pagination driver: follows the server's opaque continuation token until exhausted.

use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::wire::{self, decode_page, parse_page};
use crate::core::{CancelToken, JqClient, JqError, Query};

/// One decoded page plus the continuation token the server returned with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in server order.
    pub records: Vec<T>,
    /// Opaque token for the next page; `None` once the result set is exhausted.
    pub pagination_key: Option<String>,
}

impl<T> Page<T> {
    /// Whether this is the final page.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.pagination_key.is_none()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            pagination_key: None,
        }
    }
}

/// Caller controls for a paginated call.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Stop after this many requests and return what was collected, without error.
    pub max_pages: Option<usize>,
    /// Abort between pages, or during an in-flight request, once cancelled.
    pub cancel: Option<CancelToken>,
}

impl PageOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_pages: None,
            cancel: None,
        }
    }

    #[must_use]
    pub const fn max_pages(mut self, n: usize) -> Self {
        self.max_pages = Some(n);
        self
    }

    #[must_use]
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn validate(&self) -> Result<(), JqError> {
        if self.max_pages == Some(0) {
            return Err(JqError::InvalidArgument(
                "max_pages must be at least 1".into(),
            ));
        }
        Ok(())
    }

    fn cap_reached(&self, pages_fetched: usize) -> bool {
        self.max_pages.is_some_and(|cap| pages_fetched >= cap)
    }
}

impl JqClient {
    /// Fetch a single page and hand the continuation token back to the caller.
    ///
    /// Pass the token from a previous page as `pagination_key` to continue a walk the
    /// caller drives itself.
    ///
    /// # Errors
    ///
    /// Any transport error, or [`JqError::Decode`] if the body is not the expected shape.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        payload_key: &str,
        pagination_key: Option<&str>,
    ) -> Result<Page<T>, JqError> {
        self.fetch_page_with(path, query, payload_key, pagination_key, wire::from_value::<T>)
            .await
    }

    /// [`JqClient::fetch_page`] with a caller-supplied element decoder.
    ///
    /// A single-page call does not know its position in a walk the caller drives, so
    /// [`JqError::Decode`] errors from it always report `page: 0`.
    ///
    /// # Errors
    ///
    /// See [`JqClient::fetch_page`].
    pub async fn fetch_page_with<T, F>(
        &self,
        path: &str,
        query: &Query,
        payload_key: &str,
        pagination_key: Option<&str>,
        decode: F,
    ) -> Result<Page<T>, JqError>
    where
        F: FnMut(Value) -> Result<T, serde_json::Error>,
    {
        self.fetch_page_cancellable(path, query, payload_key, pagination_key, decode, None)
            .await
    }

    pub(crate) async fn fetch_page_cancellable<T, F>(
        &self,
        path: &str,
        query: &Query,
        payload_key: &str,
        pagination_key: Option<&str>,
        mut decode: F,
        cancel: Option<&CancelToken>,
    ) -> Result<Page<T>, JqError>
    where
        F: FnMut(Value) -> Result<T, serde_json::Error>,
    {
        let mut query = query.clone();
        query.set_pagination_key(pagination_key);
        self.fetch_one(path, &query, 0, payload_key, &mut decode, cancel)
            .await
    }

    /// Fetch every page and return the concatenated records in server order.
    ///
    /// # Errors
    ///
    /// The first error encountered; records from earlier pages are discarded.
    /// [`JqError::Cancelled`] if the options' token fires.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
        payload_key: &str,
        options: &PageOptions,
    ) -> Result<Vec<T>, JqError> {
        self.paginate_with(path, query, payload_key, wire::from_value::<T>, options)
            .await
    }

    /// [`JqClient::paginate`] with a caller-supplied element decoder.
    ///
    /// # Errors
    ///
    /// See [`JqClient::paginate`].
    pub async fn paginate_with<T, F>(
        &self,
        path: &str,
        query: Query,
        payload_key: &str,
        mut decode: F,
        options: &PageOptions,
    ) -> Result<Vec<T>, JqError>
    where
        F: FnMut(Value) -> Result<T, serde_json::Error>,
    {
        options.validate()?;
        let mut query = query;
        let mut out = Vec::new();
        let mut page_index = 0;

        loop {
            let page = self
                .fetch_one(
                    path,
                    &query,
                    page_index,
                    payload_key,
                    &mut decode,
                    options.cancel.as_ref(),
                )
                .await?;
            out.extend(page.records);
            page_index += 1;

            let Some(token) = page.pagination_key else {
                break;
            };
            if options.cap_reached(page_index) {
                #[cfg(feature = "tracing")]
                tracing::debug!(path, pages = page_index, "page cap reached; stopping early");
                break;
            }
            query.set_pagination_key(Some(token.as_str()));
        }

        Ok(out)
    }

    /// A stream of pages, fetched lazily as the stream is polled.
    ///
    /// The stream ends after the last page or the page cap. An error is yielded at most
    /// once and ends the stream.
    pub fn pages<'a, T>(
        &'a self,
        path: &'a str,
        query: Query,
        payload_key: &'a str,
        options: PageOptions,
    ) -> impl Stream<Item = Result<Page<T>, JqError>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        let initial = Some((query, 0_usize));
        futures::stream::try_unfold(initial, move |state| {
            let options = options.clone();
            async move {
                let Some((mut query, page_index)) = state else {
                    return Ok(None);
                };
                if page_index == 0 {
                    options.validate()?;
                }
                let page: Page<T> = self
                    .fetch_one(
                        path,
                        &query,
                        page_index,
                        payload_key,
                        &mut wire::from_value::<T>,
                        options.cancel.as_ref(),
                    )
                    .await?;

                let fetched = page_index + 1;
                let next = match page.pagination_key.as_deref() {
                    Some(token) if !options.cap_reached(fetched) => {
                        query.set_pagination_key(Some(token));
                        Some((query, fetched))
                    }
                    _ => None,
                };
                Ok::<_, JqError>(Some((page, next)))
            }
        })
    }

    async fn fetch_one<T, F>(
        &self,
        path: &str,
        query: &Query,
        page_index: usize,
        payload_key: &str,
        decode: &mut F,
        cancel: Option<&CancelToken>,
    ) -> Result<Page<T>, JqError>
    where
        F: FnMut(Value) -> Result<T, serde_json::Error>,
    {
        let body = match cancel {
            Some(token) => {
                if token.is_cancelled() {
                    return Err(JqError::Cancelled);
                }
                tokio::select! {
                    biased;
                    () = token.cancelled() => return Err(JqError::Cancelled),
                    res = self.request(path, query) => res?,
                }
            }
            None => self.request(path, query).await?,
        };

        let raw = parse_page(&body, path, page_index, payload_key)?;
        let page = decode_page(raw, path, page_index, decode)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path,
            page = page_index,
            records = page.records.len(),
            has_next = page.pagination_key.is_some(),
            "decoded page"
        );

        Ok(page)
    }
}
