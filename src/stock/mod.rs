use crate::core::{DateParam, JqClient, JqError};
use crate::fins::{DividendNotice, Statement};
use crate::listed::ListedIssue;
use crate::markets::{DailyMargin, ShortPosition, TradeBreakdown, WeeklyMargin};
use crate::prices::{DailyQuote, MorningQuote};

/// A high-level interface for a single security code.
///
/// A `Stock` is created with a [`JqClient`] and a code. Each method issues the matching
/// endpoint call filtered by that code, follows every continuation token, and returns the
/// records in server order. For finer control (page caps, cancellation, extra
/// filters) use the request builders on [`JqClient`] directly.
///
/// # Example
///
/// ```no_run
/// # use jquants_rs::{JqClient, Stock};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JqClient::new(std::env::var("JQUANTS_ID_TOKEN")?)?;
/// let toyota = Stock::new(&client, "7203");
///
/// let bars = toyota.daily_quotes("2024-01-04", "2024-01-31").await?;
/// println!("fetched {} daily bars", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stock {
    client: JqClient,
    code: String,
}

impl Stock {
    /// Creates a new `Stock` for a given security code (`7203` or `72030`).
    pub fn new(client: &JqClient, code: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
        }
    }

    /// The security code this façade filters by.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Listing information as of the latest date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn info(&self) -> Result<Vec<ListedIssue>, JqError> {
        self.client.listed_info().code(&self.code).fetch().await
    }

    /// Daily bars between `from` and `to`, inclusive.
    ///
    /// # Errors
    ///
    /// [`JqError::InvalidArgument`] for malformed dates or an inverted range; otherwise any
    /// transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, from, to), err, fields(code = %self.code)))]
    pub async fn daily_quotes(
        &self,
        from: impl Into<DateParam>,
        to: impl Into<DateParam>,
    ) -> Result<Vec<DailyQuote>, JqError> {
        self.client
            .daily_quotes()
            .code(&self.code)
            .between(from, to)
            .fetch()
            .await
    }

    /// Morning-session prices of the current trading day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn prices_am(&self) -> Result<Vec<MorningQuote>, JqError> {
        self.client.prices_am().code(&self.code).fetch().await
    }

    /// Every financial statement summary on record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn statements(&self) -> Result<Vec<Statement>, JqError> {
        self.client.statements().code(&self.code).fetch().await
    }

    /// Every dividend notice on record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn dividends(&self) -> Result<Vec<DividendNotice>, JqError> {
        self.client.dividends().code(&self.code).fetch().await
    }

    /// Weekly margin trading outstanding.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn weekly_margin_interest(&self) -> Result<Vec<WeeklyMargin>, JqError> {
        self.client
            .weekly_margin_interest()
            .code(&self.code)
            .fetch()
            .await
    }

    /// Daily margin balances, present only while the issue is under daily publication.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn daily_margin_interest(&self) -> Result<Vec<DailyMargin>, JqError> {
        self.client
            .daily_margin_interest()
            .code(&self.code)
            .fetch()
            .await
    }

    /// Trading breakdown by trade type.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded. Plans
    /// without access yield [`JqError::SubscriptionDenied`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn breakdown(&self) -> Result<Vec<TradeBreakdown>, JqError> {
        self.client.breakdown().code(&self.code).fetch().await
    }

    /// Reported short positions held in this issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn short_selling_positions(&self) -> Result<Vec<ShortPosition>, JqError> {
        self.client
            .short_selling_positions()
            .code(&self.code)
            .fetch()
            .await
    }
}
