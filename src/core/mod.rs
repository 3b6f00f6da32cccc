//! Core components of the `jquants-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`JqClient`] and its builder.
//! - The primary [`JqError`] type.
//! - The request executor, the pagination driver and lenient record decoding.
//! - The [`Endpoint`] trait every binding is described with.

/// The main client (`JqClient`), builder, and configuration.
pub mod client;
/// The primary error type (`JqError`) for the crate.
pub mod error;
/// Query strings and the reserved continuation-token name.
pub mod query;
/// Decoding helpers for the server's mixed numeric and flag encodings.
pub mod wire;

mod cancel;
mod endpoint;
pub(crate) mod net;
mod paginate;
mod params;

// convenient re-exports so most code can just `use crate::core::JqClient`
pub use cancel::CancelToken;
pub use client::{JqClient, JqClientBuilder};
pub use endpoint::{Endpoint, EndpointRequest};
pub use error::JqError;
pub use paginate::{Page, PageOptions};
pub use params::{DateFormat, DateParam, Params, Selector};
pub use query::Query;
