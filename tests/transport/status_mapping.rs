use httpmock::Method::GET;
use jquants_rs::JqError;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn subscription_phrase_maps_to_subscription_denied() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets/breakdown");
        then.status(403).json_body(json!({
            "message": "This API is not available on your subscription."
        }));
    });

    let client = common::client_for(&server);
    let err = client.breakdown().code("86970").fetch().await.unwrap_err();

    mock.assert_hits(1);
    assert!(err.is_subscription_denied());
    match err {
        JqError::SubscriptionDenied { status, message, url } => {
            assert_eq!(status, 403);
            assert!(message.contains("subscription"));
            assert!(url.contains("/markets/breakdown"));
        }
        other => panic!("expected SubscriptionDenied, got {other:?}"),
    }
}

#[tokio::test]
async fn phrase_match_ignores_case() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/fins/announcement");
        then.status(400).json_body(json!({
            "message": "NOT AVAILABLE ON YOUR SUBSCRIPTION"
        }));
    });

    let client = common::client_for(&server);
    let err = client.announcements().fetch().await.unwrap_err();

    mock.assert();
    assert!(err.is_subscription_denied(), "got {err:?}");
}

#[tokio::test]
async fn other_client_errors_stay_status_errors() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/listed/info");
        then.status(401).json_body(json!({
            "message": "The incoming token is invalid or expired."
        }));
    });

    let client = common::client_for(&server);
    let err = client.listed_info().fetch().await.unwrap_err();

    mock.assert();
    match err {
        JqError::Status { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(
                message.as_deref(),
                Some("The incoming token is invalid or expired.")
            );
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices/daily_quotes");
        then.status(500).body("Internal Server Error");
    });

    let client = common::client_for(&server);
    let err = client.daily_quotes().code("86970").fetch().await.unwrap_err();

    mock.assert_hits(1);
    match err {
        JqError::Status { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, None);
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn subscription_phrase_on_a_server_error_is_still_a_status() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets/breakdown");
        then.status(502).json_body(json!({
            "message": "not available on your subscription"
        }));
    });

    let client = common::client_for(&server);
    let err = client.breakdown().date("2024-01-04").fetch().await.unwrap_err();

    mock.assert();
    assert!(!err.is_subscription_denied());
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn redirects_are_surfaced_not_followed() {
    let server = common::setup_server();

    let redirect = server.mock(|when, then| {
        when.method(GET).path("/indices/topix");
        then.status(302).header("location", "/elsewhere");
    });
    let target = server.mock(|when, then| {
        when.method(GET).path("/elsewhere");
        then.status(200).body("{}");
    });

    let client = common::client_for(&server);
    let err = client.topix().fetch().await.unwrap_err();

    redirect.assert_hits(1);
    target.assert_hits(0);
    assert_eq!(err.status(), Some(302));
}

#[tokio::test]
async fn missing_selector_is_rejected_without_a_request() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices/daily_quotes");
        then.status(200).body("{}");
    });

    let client = common::client_for(&server);
    let err = client.daily_quotes().fetch().await.unwrap_err();

    mock.assert_hits(0);
    match err {
        JqError::InvalidArgument(msg) => assert!(msg.contains("code"), "{msg}"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_date_is_rejected_without_a_request() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices/daily_quotes");
        then.status(200).body("{}");
    });

    let client = common::client_for(&server);
    for bad in ["2024/01/04", "2024-13-01", "20240230"] {
        let err = client.daily_quotes().date(bad).fetch().await.unwrap_err();
        assert!(matches!(err, JqError::InvalidArgument(_)), "{bad}: {err:?}");
    }
    let err = client
        .daily_quotes()
        .code("86970")
        .between("2024-02-01", "2024-01-01")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, JqError::InvalidArgument(_)), "{err:?}");

    mock.assert_hits(0);
}
