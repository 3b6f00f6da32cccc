//! Transport: one authenticated GET, status handling and error translation.

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::core::{JqClient, JqError, Query};

/// Stable substring of the server's plan-tier denial message.
const SUBSCRIPTION_PHRASE: &str = "not available on your subscription";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl JqClient {
    /// Issue one authenticated GET for `path` (which must start with `/`) and return the
    /// raw body of a 2xx response.
    ///
    /// No retry is performed and redirects are not followed.
    ///
    /// # Errors
    ///
    /// - [`JqError::InvalidArgument`] if `path` does not start with `/`.
    /// - [`JqError::Network`] if no response was received or the body could not be read.
    /// - [`JqError::SubscriptionDenied`] for a 4xx whose message names the subscription.
    /// - [`JqError::Status`] for any other non-2xx status.
    pub async fn request(&self, path: &str, query: &Query) -> Result<Vec<u8>, JqError> {
        let url = self.endpoint_url(path, query)?;

        let resp = self
            .http()
            .get(url.clone())
            .bearer_auth(self.id_token())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = status.as_u16(), url = %redacted(&url), "non-success response");
            return Err(status_error(status, &body, &url));
        }

        Ok(body.to_vec())
    }

    pub(crate) fn endpoint_url(&self, path: &str, query: &Query) -> Result<Url, JqError> {
        if !path.starts_with('/') {
            return Err(JqError::InvalidArgument(format!(
                "endpoint path must start with '/': {path:?}"
            )));
        }
        let mut url = self.base_url().clone();
        let full = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&full);
        url.set_query(None);
        query.append_to(&mut url);
        Ok(url)
    }
}

/// Translate a non-2xx response into the error taxonomy.
///
/// This is the only place that interprets the server's prose.
pub(crate) fn status_error(status: StatusCode, body: &[u8], url: &Url) -> JqError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    let url = redacted(url);

    if status.is_client_error() {
        let haystack = message
            .clone()
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        if haystack.to_ascii_lowercase().contains(SUBSCRIPTION_PHRASE) {
            return JqError::SubscriptionDenied {
                status: status.as_u16(),
                message: haystack,
                url,
            };
        }
    }

    JqError::Status {
        status: status.as_u16(),
        message,
        url,
    }
}

/// The URL with the continuation token elided, for error messages and logs.
fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == crate::core::query::PAGINATION_KEY) {
        return url.to_string();
    }
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == crate::core::query::PAGINATION_KEY {
                "…".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}
