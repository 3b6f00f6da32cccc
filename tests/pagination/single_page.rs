use httpmock::Method::GET;
use serde_json::json;

use crate::common::{self, page_body};

#[tokio::test]
async fn one_page_without_token_issues_exactly_one_request() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/listed/info")
            .query_param("code", "86970")
            .header("authorization", format!("Bearer {}", common::TOKEN));
        then.status(200).json_body(page_body(
            "info",
            json!([common::listed_issue("86970", "日本取引所グループ")]),
            None,
        ));
    });

    let client = common::client_for(&server);
    let issues = client.listed_info().code("86970").fetch().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "86970");
    assert_eq!(issues[0].company_name, "日本取引所グループ");
    assert_eq!(issues[0].margin_code, None);
}

#[tokio::test]
async fn empty_token_is_treated_as_last_page() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/indices/topix");
        then.status(200).json_body(json!({
            "topix": [
                { "Date": "2024-01-04", "Open": 2361.28, "High": 2381.79, "Low": 2358.1, "Close": 2378.79 }
            ],
            "pagination_key": ""
        }));
    });

    let client = common::client_for(&server);
    let rows = client.topix().fetch().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].close, Some(2378.79));
}

#[tokio::test]
async fn empty_payload_is_an_empty_result() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices/daily_quotes");
        then.status(200)
            .json_body(page_body("daily_quotes", json!([]), None));
    });

    let client = common::client_for(&server);
    let bars = client.daily_quotes().date("20240106").fetch().await.unwrap();

    mock.assert();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/indices/topix");
        then.status(200).json_body(page_body("topix", json!([]), None));
    });

    let client = jquants_rs::JqClient::builder()
        .id_token(common::TOKEN)
        .base_url(url::Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap();
    let rows = client.topix().fetch().await.unwrap();

    mock.assert();
    assert!(rows.is_empty());
}
