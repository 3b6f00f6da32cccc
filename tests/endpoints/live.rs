use jquants_rs::{JqClient, JqError};

use crate::common;

fn live_client() -> Option<JqClient> {
    common::live_token().map(|t| JqClient::new(t).unwrap())
}

#[tokio::test]
#[ignore]
async fn live_listed_info_smoke() {
    let Some(client) = live_client() else {
        return;
    };

    let issues = client.listed_info().code("86970").fetch().await.unwrap();
    assert!(!issues.is_empty());
    assert!(issues[0].code.starts_with("8697"));
}

#[tokio::test]
#[ignore]
async fn live_daily_quotes_smoke() {
    let Some(client) = live_client() else {
        return;
    };

    let bars = client
        .daily_quotes()
        .code("86970")
        .between("2023-01-04", "2023-01-31")
        .fetch()
        .await
        .unwrap();
    assert!(!bars.is_empty());
    assert!(bars.windows(2).all(|w| w[0].date <= w[1].date));
}

#[tokio::test]
#[ignore]
async fn live_gated_endpoint_is_either_data_or_denied() {
    let Some(client) = live_client() else {
        return;
    };

    match client.breakdown().code("86970").max_pages(1).fetch().await {
        Ok(_) => {}
        Err(e @ JqError::SubscriptionDenied { .. }) => assert_eq!(e.status(), Some(403)),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
