use std::str::FromStr;

use httpmock::Method::GET;
use rust_decimal::Decimal;
use serde_json::json;

use crate::common::{self, page_body};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn statements_decode_blank_figures_as_absent() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/fins/statements")
            .query_param("code", "86970");
        then.status(200).json_body(page_body(
            "statements",
            json!([{
                "DisclosedDate": "2023-01-30",
                "DisclosedTime": "12:00:00",
                "LocalCode": "86970",
                "DisclosureNumber": "20230127594871",
                "TypeOfDocument": "3QFinancialStatements_Consolidated_IFRS",
                "TypeOfCurrentPeriod": "3Q",
                "CurrentPeriodStartDate": "2022-04-01",
                "CurrentPeriodEndDate": "2022-12-31",
                "CurrentFiscalYearStartDate": "2022-04-01",
                "CurrentFiscalYearEndDate": "2023-03-31",
                "NextFiscalYearStartDate": "",
                "NextFiscalYearEndDate": "",
                "NetSales": "100529000000",
                "OperatingProfit": "51765000000",
                "OrdinaryProfit": "",
                "Profit": "35175000000",
                "EarningsPerShare": "66.76",
                "DilutedEarningsPerShare": "",
                "TotalAssets": "79205861000000",
                "Equity": "320021000000",
                "EquityToAssetRatio": "0.004",
                "BookValuePerShare": "",
                "ResultDividendPerShareAnnual": "",
                "ForecastDividendPerShareAnnual": "-",
                "MaterialChangesInSubsidiaries": "false",
                "RetrospectiveRestatement": "",
                "NumberOfIssuedAndOutstandingSharesAtTheEndOfFiscalYearIncludingTreasuryStock": "528578441",
                "NumberOfTreasuryStockAtTheEndOfFiscalYear": "1861043",
                "AverageNumberOfShares": "526874759"
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.statements().code("86970").fetch().await.unwrap();

    mock.assert();
    let s = &rows[0];
    assert_eq!(s.local_code, "86970");
    assert_eq!(s.net_sales, Some(dec("100529000000")));
    assert_eq!(s.earnings_per_share, Some(dec("66.76")));
    assert_eq!(s.equity_to_asset_ratio, Some(dec("0.004")));
    assert_eq!(s.ordinary_profit, None);
    assert_eq!(s.forecast_dividend_per_share_annual, None);
    assert_eq!(s.material_changes_in_subsidiaries, Some(false));
    assert_eq!(s.retrospective_restatement, None);
    assert_eq!(s.average_number_of_shares, Some(526_874_759));
    assert_eq!(s.cash_flows_from_operating_activities, None);
}

#[tokio::test]
async fn dividend_rates_may_be_undetermined() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/fins/dividend")
            .query_param("date", "2014-02-24");
        then.status(200).json_body(page_body(
            "dividend",
            json!([{
                "AnnouncementDate": "2014-02-24",
                "AnnouncementTime": "09:21",
                "Code": "15550",
                "ReferenceNumber": "201402241B00002",
                "StatusCode": "1",
                "BoardMeetingDate": "2014-02-24",
                "InterimFinalCode": "2",
                "ForecastResultCode": "2",
                "InterimFinalTerm": "2014-03",
                "GrossDividendRate": "-",
                "RecordDate": "2014-03-10",
                "ExDate": "2014-03-06",
                "ActualRecordDate": "2014-03-10",
                "PayableDate": "-",
                "CAReferenceNumber": "201402241B00002",
                "DistributionAmount": "",
                "RetainedEarnings": "",
                "DeemedDividend": "",
                "DeemedCapitalGains": "",
                "NetAssetDecreaseRatio": "",
                "CommemorativeSpecialCode": "0",
                "CommemorativeDividendRate": "",
                "SpecialDividendRate": "12.5"
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.dividends().date("20140224").fetch().await.unwrap();

    mock.assert();
    let d = &rows[0];
    assert_eq!(d.gross_dividend_rate, None);
    assert_eq!(d.payable_date, "-");
    assert_eq!(d.ca_reference_number, "201402241B00002");
    assert_eq!(d.special_dividend_rate, Some(dec("12.5")));
}

#[tokio::test]
async fn announcements_need_no_parameters() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/fins/announcement");
        then.status(200).json_body(page_body(
            "announcement",
            json!([{
                "Date": "2022-02-14",
                "Code": "43760",
                "CompanyName": "くふうカンパニー",
                "FiscalYear": "9月30日",
                "SectorName": "情報・通信業",
                "FiscalQuarter": "第１四半期",
                "Section": "マザーズ"
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.announcements().fetch().await.unwrap();

    mock.assert();
    assert_eq!(rows[0].code, "43760");
    assert_eq!(rows[0].fiscal_quarter, "第１四半期");
}
