use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::wire::{flag, lenient};

/// A summary of a financial disclosure (`/fins/statements`).
///
/// Monetary amounts are in yen. Every figure is optional: the server sends an empty
/// string for items not covered by the document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub disclosed_date: String,
    pub disclosed_time: String,
    pub local_code: String,
    pub disclosure_number: String,
    /// e.g. `FYFinancialStatements_Consolidated_IFRS`.
    pub type_of_document: String,
    /// `1Q`, `2Q`, `3Q`, `4Q`, `5Q` or `FY`.
    pub type_of_current_period: String,
    pub current_period_start_date: String,
    pub current_period_end_date: String,
    pub current_fiscal_year_start_date: String,
    pub current_fiscal_year_end_date: String,
    #[serde(default)]
    pub next_fiscal_year_start_date: String,
    #[serde(default)]
    pub next_fiscal_year_end_date: String,

    #[serde(default, deserialize_with = "lenient")]
    pub net_sales: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub operating_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub ordinary_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub earnings_per_share: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub diluted_earnings_per_share: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_assets: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub equity: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub equity_to_asset_ratio: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub book_value_per_share: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub cash_flows_from_operating_activities: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub cash_flows_from_investing_activities: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub cash_flows_from_financing_activities: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub cash_and_equivalents: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient")]
    pub result_dividend_per_share_annual: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub result_payout_ratio_annual: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_dividend_per_share_annual: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_net_sales: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_operating_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_ordinary_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub forecast_earnings_per_share: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub next_year_forecast_net_sales: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub next_year_forecast_operating_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub next_year_forecast_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub next_year_forecast_earnings_per_share: Option<Decimal>,

    #[serde(default, deserialize_with = "flag")]
    pub material_changes_in_subsidiaries: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub changes_based_on_revisions_of_accounting_standard: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub changes_other_than_ones_based_on_revisions_of_accounting_standard: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub changes_in_accounting_estimates: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub retrospective_restatement: Option<bool>,

    #[serde(default, deserialize_with = "lenient")]
    pub number_of_issued_and_outstanding_shares_at_the_end_of_fiscal_year_including_treasury_stock:
        Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_treasury_stock_at_the_end_of_fiscal_year: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub average_number_of_shares: Option<u64>,
}

/// A scheduled earnings announcement (`/fins/announcement`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Announcement {
    /// Scheduled date; empty when still undecided.
    pub date: String,
    pub code: String,
    pub company_name: String,
    /// Fiscal year end, e.g. `9月30日`.
    pub fiscal_year: String,
    pub sector_name: String,
    /// e.g. `第１四半期`.
    pub fiscal_quarter: String,
    pub section: String,
}

/// A dividend notice (`/fins/dividend`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DividendNotice {
    pub announcement_date: String,
    pub announcement_time: String,
    pub code: String,
    pub reference_number: String,
    /// `1` new, `2` revised, `3` deleted.
    pub status_code: String,
    pub board_meeting_date: String,
    /// `1` interim, `2` final.
    pub interim_final_code: String,
    /// `1` result, `2` forecast.
    pub forecast_result_code: String,
    pub interim_final_term: String,
    /// Dividend per share; `None` when undetermined (`"-"`) or blank.
    #[serde(default, deserialize_with = "lenient")]
    pub gross_dividend_rate: Option<Decimal>,
    pub record_date: String,
    pub ex_date: String,
    pub actual_record_date: String,
    pub payable_date: String,
    #[serde(rename = "CAReferenceNumber")]
    pub ca_reference_number: String,
    #[serde(default, deserialize_with = "lenient")]
    pub distribution_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub retained_earnings: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub deemed_dividend: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub deemed_capital_gains: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub net_asset_decrease_ratio: Option<Decimal>,
    /// `1` commemorative, `2` special, `3` both, `0` ordinary.
    #[serde(default)]
    pub commemorative_special_code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub commemorative_dividend_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub special_dividend_rate: Option<Decimal>,
}
