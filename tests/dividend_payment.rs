//! A cash dividend accrues between the ex date and the payment date, then
//! settles into the cash balance.

mod common;

use common::{StandIn, action_dates, cash, position, uk_equity_portfolio};
use rust_decimal_macros::dec;
use scenarios::assertions::{accrual, cash_balance, units_of};
use scenarios::corporate_actions::dividend_payment;
use scenarios::{Cleanup, DemoPortfolio};
use serde_json::json;

#[tokio::test]
async fn dividend_accrues_after_ex_date_and_is_paid_on_payment_date() {
    let platform = StandIn::start().await;
    let spec = uk_equity_portfolio(&platform.ctx, "UK-EQUITY-DIV");
    platform.demo_portfolio(&spec, "LUID_UKEQ").await;
    platform.accept_deletes().await;

    let portfolio = core_types::ResourceId::new(platform.scope(), "UK-EQUITY");
    platform
        .holdings(
            &portfolio,
            "2018-01-05T00:00:00Z",
            vec![cash("B", 2_960_000), position("LUID_UKEQ", 132_000, 132_000)],
        )
        .await;
    platform
        .holdings(
            &portfolio,
            "2018-01-11T00:00:00Z",
            vec![
                cash("B", 2_960_000),
                cash("A", 66_000),
                position("LUID_UKEQ", 132_000, 132_000),
            ],
        )
        .await;
    platform
        .holdings(
            &portfolio,
            "2018-01-21T00:00:00Z",
            vec![cash("B", 3_026_000), position("LUID_UKEQ", 132_000, 132_000)],
        )
        .await;

    let client = platform.ctx.client();
    let mut cleanup = Cleanup::new();
    let demo = DemoPortfolio::setup(client, &spec, &mut cleanup).await.unwrap();
    let outcome = dividend_payment(client, &demo, "UK-EQUITY-DIV-2018", dec!(0.5), action_dates())
        .await
        .unwrap();

    let before = &outcome.before.holdings;
    assert_eq!(cash_balance(before, "GBP").unwrap().units, dec!(2960000));
    assert_eq!(units_of(before, &demo.equity_uid), dec!(132000));
    assert!(accrual(before, "GBP").is_none());

    let after_ex = &outcome.after_ex.holdings;
    assert_eq!(cash_balance(after_ex, "GBP").unwrap().units, dec!(2960000));
    assert_eq!(accrual(after_ex, "GBP").unwrap().units, dec!(66000));

    let after_payment = &outcome.after_payment.holdings;
    assert_eq!(cash_balance(after_payment, "GBP").unwrap().units, dec!(3026000));
    assert!(accrual(after_payment, "GBP").is_none());
    assert_eq!(units_of(after_payment, &demo.equity_uid), dec!(132000));

    let source = spec.corporate_action_source.clone().unwrap();
    let actions = platform
        .bodies_sent_to(&format!(
            "/api/corporateactionsources/{}/{}/corporateactions",
            source.scope, source.code
        ))
        .await;
    assert_eq!(actions.len(), 1);
    let transition = &actions[0][0]["transitions"][0];
    assert_eq!(
        transition["outputTransitions"][1],
        json!({
            "instrumentIdentifiers": { "Instrument/default/Currency": "GBP" },
            "unitsFactor": 0.5,
            "costFactor": 0
        })
    );
    assert_eq!(actions[0][0]["exDate"], "2018-01-10T00:00:00Z");

    assert_eq!(
        platform.holdings_dates().await,
        vec!["2018-01-05T00:00:00Z", "2018-01-11T00:00:00Z", "2018-01-21T00:00:00Z"]
    );

    let report = cleanup.run(client).await;
    assert!(report.is_clean());
    assert_eq!(report.deleted, 3);
}

#[tokio::test]
async fn announced_dividends_are_listed_from_the_source() {
    let platform = StandIn::start().await;
    let source = core_types::ResourceId::new(platform.scope(), "UK-CORP-ACTIONS");
    platform
        .respond(
            "GET",
            &format!(
                "/api/corporateactionsources/{}/{}/corporateactions",
                source.scope, source.code
            ),
            wiremock::ResponseTemplate::new(200).set_body_json(json!({
                "values": [{
                    "corporateActionCode": "UK-EQUITY-DIV-2018",
                    "announcementDate": "2018-01-05T00:00:00Z",
                    "exDate": "2018-01-10T00:00:00Z",
                    "recordDate": "2018-01-11T00:00:00Z",
                    "paymentDate": "2018-01-20T00:00:00Z"
                }]
            })),
        )
        .await;

    let actions = scenarios::corporate_actions::announced(platform.ctx.client(), &source)
        .await
        .unwrap();

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].corporate_action_code, "UK-EQUITY-DIV-2018");
    assert!(actions[0].transitions.is_empty());
}
