mod common;

use httpmock::Method::GET;
use stockboard::Ticker;
use stockboard::core::{Action, Interval, MarketError, Range};

#[tokio::test]
async fn history_assembles_candles_and_actions() {
    let server = common::setup_server();
    let mock = common::mock_chart(&server, "TEST", common::chart_body());
    let client = common::preauth_client(&server);

    let resp = Ticker::new(&client, "TEST")
        .history_full(Range::Ytd, Interval::D1)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.candles.len(), 3);
    assert_eq!(resp.candles[0].ts, 1000);
    assert_eq!(resp.candles[2].close, 102.5);
    assert_eq!(resp.candles[0].volume, Some(1000));
    assert!(resp.adjusted);

    assert_eq!(resp.actions.len(), 2);
    assert!(matches!(
        resp.actions[0],
        Action::Dividend { ts: 2000, amount } if (amount - 0.25).abs() < 1e-9
    ));
    assert!(matches!(
        resp.actions[1],
        Action::Split {
            ts: 3000,
            numerator: 2,
            denominator: 1
        }
    ));

    let meta = resp.meta.unwrap();
    assert_eq!(meta.timezone.as_deref(), Some("America/New_York"));
    assert_eq!(meta.gmtoffset, Some(-14400));
}

#[tokio::test]
async fn rows_with_missing_closes_are_dropped() {
    let server = common::setup_server();
    let body = r#"{
      "chart":{
        "result":[
          {
            "timestamp":[1000,2000,3000],
            "indicators":{
              "quote":[{
                "open":[100.0,null,102.0],
                "high":[101.0,null,103.0],
                "low":[99.0,null,101.0],
                "close":[100.5,null,102.5],
                "volume":[1000,null,1200]
              }]
            }
          }
        ],
        "error":null
      }
    }"#
    .to_string();
    let _mock = common::mock_chart(&server, "GAPPY", body);
    let client = common::preauth_client(&server);

    let candles = Ticker::new(&client, "GAPPY")
        .history(Range::M1, Interval::D1)
        .await
        .unwrap();

    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].ts, 1000);
    assert_eq!(candles[1].ts, 3000);
}

#[tokio::test]
async fn empty_chart_is_not_an_error() {
    let server = common::setup_server();
    let body = r#"{
      "chart":{
        "result":[
          {"timestamp":[],"indicators":{"quote":[{}]}}
        ],
        "error":null
      }
    }"#
    .to_string();
    let _mock = common::mock_chart(&server, "EMPTY", body);
    let client = common::preauth_client(&server);

    let resp = Ticker::new(&client, "EMPTY")
        .history_full(Range::Ytd, Interval::D1)
        .await
        .unwrap();
    assert!(resp.candles.is_empty());
    assert!(resp.actions.is_empty());
}

#[tokio::test]
async fn yahoo_chart_errors_are_surfaced() {
    let server = common::setup_server();
    let body = r#"{
      "chart":{
        "result":null,
        "error":{"code":"Not Found","description":"No data found, symbol may be delisted"}
      }
    }"#
    .to_string();
    let _mock = common::mock_chart(&server, "GONE", body);
    let client = common::preauth_client(&server);

    let err = Ticker::new(&client, "GONE")
        .history(Range::Ytd, Interval::D1)
        .await
        .unwrap_err();
    match err {
        MarketError::Data(msg) => {
            assert!(msg.contains("Not Found"));
            assert!(msg.contains("delisted"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn http_failures_carry_the_status() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/DOWN");
        then.status(502).body("bad gateway");
    });
    let client = common::preauth_client(&server);

    let err = Ticker::new(&client, "DOWN")
        .history(Range::Ytd, Interval::D1)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Status { status: 502, .. }));
}

#[tokio::test]
async fn inverted_period_is_rejected_before_the_request() {
    let server = common::setup_server();
    let client = common::preauth_client(&server);

    let start = chrono::DateTime::from_timestamp(2000, 0).unwrap();
    let end = chrono::DateTime::from_timestamp(1000, 0).unwrap();
    let err = Ticker::new(&client, "TEST")
        .history_builder()
        .between(start, end)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidDates));
}
