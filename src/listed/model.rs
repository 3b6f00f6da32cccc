use serde::{Deserialize, Serialize};

/// One row of the listed-issue master (`/listed/info`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedIssue {
    /// Date the row applies to (`YYYY-MM-DD`).
    pub date: String,
    /// Security code as returned by the server (typically the 5-digit form).
    pub code: String,
    pub company_name: String,
    pub company_name_english: String,
    pub sector17_code: String,
    pub sector17_code_name: String,
    pub sector33_code: String,
    pub sector33_code_name: String,
    /// TOPIX size category, e.g. `TOPIX Core30`, or `-` when not classified.
    pub scale_category: String,
    pub market_code: String,
    pub market_code_name: String,
    /// Margin trading classification. Only returned on Standard plans and above.
    #[serde(default)]
    pub margin_code: Option<String>,
    #[serde(default)]
    pub margin_code_name: Option<String>,
}
