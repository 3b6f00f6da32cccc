use httpmock::Method::GET;
use serde_json::json;

use crate::common::{self, page_body};

#[tokio::test]
async fn cap_stops_early_and_returns_collected_records() {
    let server = common::setup_server();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/markets/trading_calendar")
            .query_param_missing("pagination_key");
        then.status(200).json_body(page_body(
            "trading_calendar",
            json!([{ "Date": "2024-01-01", "HolidayDivision": "0" }]),
            Some("k1"),
        ));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/markets/trading_calendar")
            .query_param("pagination_key", "k1");
        then.status(200).json_body(page_body(
            "trading_calendar",
            json!([{ "Date": "2024-01-02", "HolidayDivision": "0" }]),
            Some("k2"),
        ));
    });
    let third = server.mock(|when, then| {
        when.method(GET)
            .path("/markets/trading_calendar")
            .query_param("pagination_key", "k2");
        then.status(200).json_body(page_body(
            "trading_calendar",
            json!([{ "Date": "2024-01-04", "HolidayDivision": "1" }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let days = client.trading_calendar().max_pages(2).fetch().await.unwrap();

    first.assert_hits(1);
    second.assert_hits(1);
    third.assert_hits(0);
    assert_eq!(days.len(), 2);
    assert_eq!(days[1].date, "2024-01-02");
}

#[tokio::test]
async fn zero_cap_is_rejected_without_a_request() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/indices/topix");
        then.status(200).json_body(page_body("topix", json!([]), None));
    });

    let client = common::client_for(&server);
    let err = client.topix().max_pages(0).fetch().await.unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, jquants_rs::JqError::InvalidArgument(_)), "got {err:?}");
}

#[tokio::test]
async fn cap_above_page_count_is_harmless() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/indices/topix");
        then.status(200).json_body(page_body(
            "topix",
            json!([{ "Date": "2024-01-04", "Open": 1, "High": 2, "Low": 1, "Close": 2 }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.topix().max_pages(10).fetch().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(rows.len(), 1);
}
