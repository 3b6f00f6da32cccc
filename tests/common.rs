#![allow(dead_code)]

use httpmock::MockServer;
use jquants_rs::JqClient;
use serde_json::{Map, Value, json};
use url::Url;

pub const TOKEN: &str = "test-id-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> JqClient {
    JqClient::builder()
        .id_token(TOKEN)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// A response body: `{ "<key>": [records...], "pagination_key": token? }`.
pub fn page_body(key: &str, records: Value, token: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), records);
    if let Some(t) = token {
        body.insert("pagination_key".to_string(), Value::String(t.to_string()));
    }
    Value::Object(body)
}

pub fn daily_quote(date: &str, close: Value) -> Value {
    json!({
        "Date": date,
        "Code": "86970",
        "Open": 2047.0,
        "High": 2069.0,
        "Low": 2035.0,
        "Close": close,
        "UpperLimit": "0",
        "LowerLimit": "0",
        "Volume": 2202500.0,
        "TurnoverValue": 4507051850.0,
        "AdjustmentFactor": 1.0,
        "AdjustmentOpen": 2047.0,
        "AdjustmentHigh": 2069.0,
        "AdjustmentLow": 2035.0,
        "AdjustmentClose": 2045.0,
        "AdjustmentVolume": 2202500.0
    })
}

pub fn listed_issue(code: &str, name: &str) -> Value {
    json!({
        "Date": "2024-01-04",
        "Code": code,
        "CompanyName": name,
        "CompanyNameEnglish": name,
        "Sector17Code": "16",
        "Sector17CodeName": "金融（除く銀行）",
        "Sector33Code": "7200",
        "Sector33CodeName": "その他金融業",
        "ScaleCategory": "TOPIX Large70",
        "MarketCode": "0111",
        "MarketCodeName": "プライム"
    })
}

pub fn live_token() -> Option<String> {
    std::env::var("JQUANTS_ID_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty())
}
