use httpmock::Method::GET;
use serde_json::json;

use crate::common::{self, daily_quote, page_body};

#[tokio::test]
async fn withheld_and_stringly_numbers_decode_uniformly() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/prices/daily_quotes")
            .query_param("code", "86970")
            .query_param("from", "2024-01-04")
            .query_param("to", "2024-01-09");
        then.status(200).json_body(page_body(
            "daily_quotes",
            json!([
                daily_quote("2024-01-04", json!("-")),
                daily_quote("2024-01-05", json!(2045.0)),
                daily_quote("2024-01-09", json!("2045.0"))
            ]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let bars = client
        .daily_quotes()
        .code("86970")
        .between("20240104", "2024-01-09")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    let closes: Vec<Option<f64>> = bars.iter().map(|b| b.close).collect();
    assert_eq!(closes, [None, Some(2045.0), Some(2045.0)]);
    assert_eq!(bars[0].upper_limit, Some(false));
    assert_eq!(bars[0].open, Some(2047.0));
}

#[tokio::test]
async fn null_and_missing_prices_are_absent() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/prices/daily_quotes")
            .query_param("date", "2024-01-04");
        then.status(200).json_body(page_body(
            "daily_quotes",
            json!([
                { "Date": "2024-01-04", "Code": "13010", "Open": null, "Close": "" },
                { "Date": "2024-01-04", "Code": "1301", "UpperLimit": "1", "LowerLimit": true }
            ]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let bars = client.daily_quotes().date("20240104").fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars[0].open, None);
    assert_eq!(bars[0].close, None);
    assert_eq!(bars[0].volume, None);
    assert_eq!(bars[1].code, "1301");
    assert_eq!(bars[1].upper_limit, Some(true));
    assert_eq!(bars[1].lower_limit, Some(true));
}

#[tokio::test]
async fn morning_session_prices_decode() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/prices/prices_am")
            .query_param("code", "39400");
        then.status(200).json_body(page_body(
            "prices_am",
            json!([{
                "Date": "2023-03-20",
                "Code": "39400",
                "MorningOpen": 232.0,
                "MorningHigh": 244.0,
                "MorningLow": 232.0,
                "MorningClose": 240.0,
                "MorningVolume": 52600.0,
                "MorningTurnoverValue": 12518800.0
            }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.prices_am().code("39400").fetch().await.unwrap();

    mock.assert();
    assert_eq!(rows[0].morning_close, Some(240.0));
    assert_eq!(rows[0].morning_turnover_value, Some(12_518_800.0));
}

#[tokio::test]
async fn index_values_decode() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/indices").query_param("code", "0028");
        then.status(200).json_body(page_body(
            "indices",
            json!([{ "Date": "2023-12-01", "Code": "0028", "Open": 1199.18, "High": 1221.2, "Low": 1191.38, "Close": 1205.52 }]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let rows = client.indices().code("0028").fetch().await.unwrap();

    mock.assert();
    assert_eq!(rows[0].code, "0028");
    assert_eq!(rows[0].high, Some(1221.2));
}
