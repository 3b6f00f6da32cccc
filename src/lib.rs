//! jquants-rs: typed async client for the J-Quants Japanese equities API.
//!
//! Every endpoint is described once as an [`Endpoint`] and called through the generic
//! [`EndpointRequest`] builder. The shared core handles bearer authentication,
//! follows the server's opaque `pagination_key` until a result set is exhausted, decodes
//! numbers that may arrive as JSON numbers, numeric strings or the withheld marker `"-"`,
//! and reports plan-gated endpoints as [`JqError::SubscriptionDenied`].
//!
//! ```no_run
//! # use jquants_rs::JqClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), jquants_rs::JqError> {
//! let client = JqClient::new("<id token>")?;
//! let bars = client
//!     .daily_quotes()
//!     .code("7203")
//!     .between("20240104", "20240131")
//!     .fetch()
//!     .await?;
//! for bar in &bars {
//!     println!("{} close={:?}", bar.date, bar.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub use crate::core::wire;

pub mod derivatives;
pub mod fins;
pub mod indices;
pub mod listed;
pub mod markets;
pub mod prices;
pub mod stock;

pub use crate::core::{
    CancelToken, DateFormat, DateParam, Endpoint, EndpointRequest, JqClient, JqClientBuilder,
    JqError, Page, PageOptions, Params, Query, Selector,
};
pub use stock::Stock;

pub use derivatives::{FuturesQuote, IndexOptionQuote, OptionQuote, PutCall};
pub use fins::{Announcement, DividendNotice, Statement};
pub use indices::{IndexQuote, TopixQuote};
pub use listed::ListedIssue;
pub use markets::{
    DailyMargin, HolidayDivision, InvestorTrades, PublishReason, ShortPosition,
    ShortSellingValue, TradeBreakdown, TradeFlow, TradingCalendarDay, WeeklyMargin,
};
pub use prices::{DailyQuote, MorningQuote};
