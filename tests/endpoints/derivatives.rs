use httpmock::Method::GET;
use jquants_rs::PutCall;
use serde_json::json;

use crate::common::{self, page_body};

#[tokio::test]
async fn derivatives_dates_are_sent_compact() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/derivatives/futures")
            .query_param("date", "20240104")
            .query_param("category", "NK225F")
            .query_param("contract_flag", "1");
        then.status(200).json_body(page_body(
            "futures",
            json!([{
                "Code": "169060018",
                "DerivativesProductCategory": "NK225F",
                "Date": "2024-01-04",
                "WholeDayOpen": 33390.0,
                "WholeDayHigh": 33520.0,
                "WholeDayLow": 33040.0,
                "WholeDayClose": 33360.0,
                "MorningSessionOpen": "",
                "NightSessionOpen": 33390.0,
                "DaySessionOpen": 33400.0,
                "Volume": 39224.0,
                "OpenInterest": 185395.0,
                "TurnoverValue": 1303345000000.0,
                "ContractMonth": "2024-03",
                "Volume(OnlyAuction)": 1850.0,
                "EmergencyMarginTriggerDivision": "002",
                "LastTradingDay": "2024-03-07",
                "SpecialQuotationDay": "2024-03-08",
                "SettlementPrice": 33360.0,
                "CentralContractMonthFlag": "1"
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client
        .futures()
        .date("2024-01-04")
        .category("NK225F")
        .central_contract_month_only()
        .fetch()
        .await
        .unwrap();

    mock.assert();
    let f = &rows[0];
    assert_eq!(f.volume_only_auction, Some(1850.0));
    assert_eq!(f.morning_session_open, None);
    assert_eq!(f.central_contract_month_flag, Some(true));
    assert_eq!(f.contract_month, "2024-03");
}

#[tokio::test]
async fn derivatives_require_a_date() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/option/index_option");
        then.status(200).json_body(page_body("index_option", json!([]), None));
    });

    let client = common::client_for(&server);
    let err = client.index_option().fetch().await.unwrap_err();

    mock.assert_hits(0);
    match err {
        jquants_rs::JqError::InvalidArgument(msg) => assert!(msg.contains("date"), "{msg}"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn index_options_expose_put_call() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/option/index_option")
            .query_param("date", "20230324");
        then.status(200).json_body(page_body(
            "index_option",
            json!([
                {
                    "Date": "2023-03-24",
                    "Code": "130060018",
                    "WholeDayOpen": 0.0,
                    "WholeDayHigh": 0.0,
                    "WholeDayLow": 0.0,
                    "WholeDayClose": 0.0,
                    "NightSessionOpen": "",
                    "Volume": 0.0,
                    "Volume(OnlyAuction)": 0.0,
                    "OpenInterest": 330.0,
                    "TurnoverValue": 0.0,
                    "ContractMonth": "2025-06",
                    "StrikePrice": 20000.0,
                    "EmergencyMarginTriggerDivision": "002",
                    "PutCallDivision": "1",
                    "LastTradingDay": "2025-06-12",
                    "SpecialQuotationDay": "2025-06-13",
                    "SettlementPrice": 980.0,
                    "TheoreticalPrice": 974.641,
                    "BaseVolatility": 17.93025,
                    "UnderlyingPrice": 27466.61,
                    "ImpliedVolatility": 23.1816,
                    "InterestRate": 0.2336
                },
                {
                    "Date": "2023-03-24",
                    "Code": "140060018",
                    "ContractMonth": "2025-06",
                    "PutCallDivision": "2",
                    "LastTradingDay": "2025-06-12",
                    "SpecialQuotationDay": "2025-06-13"
                }
            ]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.index_option().date("2023-03-24").fetch().await.unwrap();

    mock.assert();
    assert_eq!(rows[0].put_call(), Some(PutCall::Put));
    assert_eq!(rows[1].put_call(), Some(PutCall::Call));
    assert_eq!(rows[0].strike_price, Some(20000.0));
    assert_eq!(rows[0].night_session_open, None);
    assert_eq!(rows[1].settlement_price, None);
}

#[tokio::test]
async fn equity_options_carry_the_underlying() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/derivatives/options")
            .query_param("date", "20240105")
            .query_param("category", "EQOP")
            .query_param("code", "72030");
        then.status(200).json_body(page_body(
            "options",
            json!([{
                "Code": "193012418",
                "DerivativesProductCategory": "EQOP",
                "UnderlyingSSO": "7203",
                "Date": "2024-01-05",
                "ContractMonth": "2024-01",
                "StrikePrice": 2800.0,
                "PutCallDivision": "2",
                "LastTradingDay": "2024-01-11",
                "SpecialQuotationDay": "2024-01-12",
                "ImpliedVolatility": "-",
                "CentralContractMonthFlag": "0"
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client
        .options()
        .date("20240105")
        .category("EQOP")
        .code("72030")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(rows[0].underlying_sso, "7203");
    assert_eq!(rows[0].put_call(), Some(PutCall::Call));
    assert_eq!(rows[0].implied_volatility, None);
    assert_eq!(rows[0].central_contract_month_flag, Some(false));
}
