mod common;

use stockboard::Ticker;

fn balance_body() -> String {
    r#"{
      "quoteSummary":{
        "result":[
          {
            "balanceSheetHistoryQuarterly":{
              "balanceSheetStatements":[
                {
                  "endDate":{"raw":1696032000},
                  "totalAssets":{"raw":216274000000.0},
                  "totalLiab":{"raw":79263000000.0},
                  "totalStockholderEquity":{"raw":137011000000.0},
                  "cash":{"raw":36884000000.0},
                  "longTermDebt":{"raw":18177000000.0}
                },
                {
                  "endDate":{"raw":1688083200},
                  "totalAssets":{"raw":206000000000.0},
                  "totalLiab":{"raw":76000000000.0},
                  "totalStockholderEquity":{"raw":130000000000.0}
                }
              ]
            }
          }
        ],
        "error":null
      }
    }"#
    .to_string()
}

fn cashflow_body() -> String {
    r#"{
      "quoteSummary":{
        "result":[
          {
            "cashflowStatementHistoryQuarterly":{
              "cashflowStatements":[
                {
                  "endDate":{"raw":1696032000},
                  "totalCashFromOperatingActivities":{"raw":20402000000.0},
                  "capitalExpenditures":{"raw":-6763000000.0},
                  "netIncome":{"raw":11583000000.0}
                },
                {
                  "endDate":{"raw":1688083200},
                  "totalCashFromOperatingActivities":{"raw":20402000000.0},
                  "capitalExpenditures":{"raw":6763000000.0},
                  "netIncome":{"raw":11583000000.0}
                }
              ]
            }
          }
        ],
        "error":null
      }
    }"#
    .to_string()
}

#[tokio::test]
async fn quarterly_balance_sheet_maps_every_row() {
    let server = common::setup_server();
    let _mock = common::mock_quote_summary(
        &server,
        "META",
        "balanceSheetHistoryQuarterly",
        balance_body(),
    );
    let client = common::preauth_client(&server);

    let rows = Ticker::new(&client, "META")
        .quarterly_balance_sheet()
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period_end, 1_696_032_000);
    assert_eq!(rows[0].total_assets, Some(216_274_000_000.0));
    assert_eq!(rows[0].long_term_debt, Some(18_177_000_000.0));
    // Second row omits cash and debt; they stay None rather than zero.
    assert_eq!(rows[1].cash, None);
    assert_eq!(rows[1].long_term_debt, None);
}

#[tokio::test]
async fn free_cash_flow_is_derived_from_ocf_and_capex() {
    let server = common::setup_server();
    let _mock = common::mock_quote_summary(
        &server,
        "META",
        "cashflowStatementHistoryQuarterly",
        cashflow_body(),
    );
    let client = common::preauth_client(&server);

    let rows = Ticker::new(&client, "META")
        .quarterly_cashflow()
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].operating_cashflow, Some(20_402_000_000.0));
    assert_eq!(rows[0].capital_expenditures, Some(-6_763_000_000.0));
    assert_eq!(rows[0].free_cash_flow, Some(13_639_000_000.0));
    assert_eq!(rows[0].net_income, Some(11_583_000_000.0));
    // A positive capex value derives the same free cash flow.
    assert_eq!(rows[1].capital_expenditures, Some(6_763_000_000.0));
    assert_eq!(rows[1].free_cash_flow, Some(13_639_000_000.0));
}

#[tokio::test]
async fn annual_statements_use_the_annual_module() {
    let server = common::setup_server();
    let mock = common::mock_quote_summary(
        &server,
        "META",
        "balanceSheetHistory",
        r#"{
          "quoteSummary":{
            "result":[{"balanceSheetHistory":{"balanceSheetStatements":[]}}],
            "error":null
          }
        }"#
        .to_string(),
    );
    let client = common::preauth_client(&server);

    let rows = Ticker::new(&client, "META").balance_sheet().await.unwrap();

    mock.assert();
    assert!(rows.is_empty());
}
