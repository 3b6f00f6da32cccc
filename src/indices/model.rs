use serde::{Deserialize, Serialize};

use crate::core::wire::lenient;

/// Daily four values of an index (`/indices`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexQuote {
    pub date: String,
    /// Index code, e.g. `0000` for TOPIX, `0028` for TOPIX Core30.
    pub code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub close: Option<f64>,
}

/// Daily TOPIX values (`/indices/topix`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopixQuote {
    pub date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub close: Option<f64>,
}
