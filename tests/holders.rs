mod common;

use stockboard::Ticker;

fn holders_body() -> String {
    r#"{
      "quoteSummary":{
        "result":[
          {
            "institutionOwnership":{
              "ownershipList":[
                {
                  "organization":"Vanguard Group Inc",
                  "reportDate":{"raw":1696032000},
                  "pctHeld":{"raw":0.0785},
                  "position":{"raw":198000000},
                  "value":{"raw":59400000000}
                },
                {
                  "organization":"Blackrock Inc.",
                  "reportDate":{"raw":1696032000},
                  "pctHeld":{"raw":0.0642},
                  "position":{"raw":162000000},
                  "value":{"raw":48600000000}
                }
              ]
            },
            "majorHoldersBreakdown":{
              "insidersPercentHeld":{"raw":0.1342},
              "institutionsPercentHeld":{"raw":0.7821},
              "institutionsFloatPercentHeld":{"raw":0.9033},
              "institutionsCount":{"raw":4510}
            }
          }
        ],
        "error":null
      }
    }"#
    .to_string()
}

#[tokio::test]
async fn institutional_holders_map_the_ownership_list() {
    let server = common::setup_server();
    let _mock = common::mock_quote_summary(
        &server,
        "META",
        "institutionOwnership,majorHoldersBreakdown",
        holders_body(),
    );
    let client = common::preauth_client(&server);

    let holders = Ticker::new(&client, "META")
        .institutional_holders()
        .await
        .unwrap();

    assert_eq!(holders.len(), 2);
    assert_eq!(holders[0].holder, "Vanguard Group Inc");
    assert_eq!(holders[0].shares, 198_000_000);
    assert_eq!(holders[0].date_reported, 1_696_032_000);
    assert!((holders[0].pct_held - 0.0785).abs() < 1e-9);
    assert_eq!(holders[1].value, 48_600_000_000);
}

#[tokio::test]
async fn major_holders_become_labelled_percentages() {
    let server = common::setup_server();
    let _mock = common::mock_quote_summary(
        &server,
        "META",
        "institutionOwnership,majorHoldersBreakdown",
        holders_body(),
    );
    let client = common::preauth_client(&server);

    let rows = Ticker::new(&client, "META").major_holders().await.unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].category, "% of Shares Held by All Insider");
    assert_eq!(rows[0].value, "13.42%");
    assert_eq!(rows[1].value, "78.21%");
    assert_eq!(rows[3].category, "Number of Institutions Holding Shares");
    assert_eq!(rows[3].value, "4510");
}

#[tokio::test]
async fn missing_ownership_list_is_just_empty() {
    let server = common::setup_server();
    let body = r#"{
      "quoteSummary":{
        "result":[{"institutionOwnership":{},"majorHoldersBreakdown":{}}],
        "error":null
      }
    }"#
    .to_string();
    let _mock = common::mock_quote_summary(
        &server,
        "THIN",
        "institutionOwnership,majorHoldersBreakdown",
        body,
    );
    let client = common::preauth_client(&server);

    let holders = Ticker::new(&client, "THIN")
        .institutional_holders()
        .await
        .unwrap();
    assert!(holders.is_empty());
}
