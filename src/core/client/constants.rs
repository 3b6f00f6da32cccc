//! Centralized constants for the default endpoint and UA.

/// Identifies the library to the upstream service.
pub(crate) const USER_AGENT: &str = concat!("jquants-rs/", env!("CARGO_PKG_VERSION"));

/// J-Quants API v1 base. Endpoint paths (`/prices/daily_quotes`, ...) are appended.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1";
