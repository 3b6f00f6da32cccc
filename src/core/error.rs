use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The variants are mutually exclusive: a subscription denial is never also reported
/// as a plain [`JqError::Status`].
#[derive(Debug, Error)]
pub enum JqError {
    /// The call-site parameters failed a precondition (missing selector, malformed date, ...).
    /// No HTTP request was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No HTTP response was received: connect, TLS, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected response status {status} at {url}{}", status_suffix(.message))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the JSON error body, when present.
        message: Option<String>,
        /// The URL that returned the error.
        url: String,
    },

    /// The authenticated plan does not cover the requested endpoint.
    ///
    /// This is a feature gate rather than a bug; callers are expected to skip the
    /// endpoint and carry on.
    #[error("endpoint not available on this subscription ({status}) at {url}: {message}")]
    SubscriptionDenied {
        /// The HTTP status code (always 4xx).
        status: u16,
        /// The server's explanation.
        message: String,
        /// The URL that was denied.
        url: String,
    },

    /// The response body did not have the expected shape.
    #[error("{}", decode_display(.path, .page, .element, .cause))]
    Decode {
        /// The endpoint path being decoded.
        path: String,
        /// Zero-based index of the page within the paginated call; always `0` for single-page calls.
        page: usize,
        /// Zero-based index of the offending element in the payload array, if any.
        element: Option<usize>,
        /// What went wrong.
        cause: String,
    },

    /// The call was cancelled through a [`CancelToken`](crate::CancelToken).
    #[error("request cancelled")]
    Cancelled,
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

fn decode_display(path: &str, page: &usize, element: &Option<usize>, cause: &str) -> String {
    match element {
        Some(i) => format!("failed to decode {path} (page {page}, element {i}): {cause}"),
        None => format!("failed to decode {path} (page {page}): {cause}"),
    }
}

impl JqError {
    /// Returns `true` for [`JqError::SubscriptionDenied`].
    #[must_use]
    pub const fn is_subscription_denied(&self) -> bool {
        matches!(self, Self::SubscriptionDenied { .. })
    }

    /// The HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::SubscriptionDenied { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn decode(
        path: &str,
        page: usize,
        element: Option<usize>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Decode {
            path: path.to_string(),
            page,
            element,
            cause: cause.to_string(),
        }
    }
}

impl From<url::ParseError> for JqError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidArgument(format!("invalid URL: {e}"))
    }
}
