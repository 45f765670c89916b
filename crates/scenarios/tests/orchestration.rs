//! Call ordering, abort-on-failure and teardown behaviour of the scenarios,
//! checked against a wiremock stand-in platform.

use api_client::HttpPlatformClient;
use chrono::NaiveDate;
use configuration::ApiConfig;
use core_types::ResourceId;
use fixtures::CorporateActionDates;
use rust_decimal_macros::dec;
use scenarios::corporate_actions::dividend_payment;
use scenarios::{Cleanup, DemoPortfolio, DemoPortfolioSpec, Resource, ScenarioError};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// TEST HELPERS
// ============================================================================

const SCOPE: &str = "tutorials-test";

fn client_for(server: &MockServer) -> HttpPlatformClient {
    HttpPlatformClient::new(&ApiConfig::new(format!("{}/api", server.uri()))).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn spec() -> DemoPortfolioSpec {
    DemoPortfolioSpec {
        scope: SCOPE.to_string(),
        code: "PF-1".to_string(),
        currency: "GBP".to_string(),
        created: date(2019, 1, 1),
        corporate_action_source: Some(ResourceId::new(SCOPE, "CA-1")),
        equity_name: "Acme Plc".to_string(),
        equity_client_internal: "ACME".to_string(),
        sector: None,
        funds_in: dec!(3290000),
        units: dec!(132000),
        price: dec!(2.5),
        trade_date: date(2019, 1, 2),
        settle_days: 0,
    }
}

fn platform_error(status: u16, name: &str, code: i64) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "name": name,
        "code": code,
        "title": name,
        "detail": format!("{} raised by test", name),
    }))
}

fn version() -> Value {
    json!({
        "version": {
            "effectiveFrom": "2019-01-01T00:00:00Z",
            "asAtDate": "2019-01-03T09:00:00Z"
        }
    })
}

async fn mount(server: &MockServer, verb: &str, route: &str, response: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_setup(server: &MockServer) {
    mount(
        server,
        "POST",
        "/api/corporateactionsources",
        ResponseTemplate::new(201).set_body_json(json!({
            "id": { "scope": SCOPE, "code": "CA-1" },
            "displayName": "Tutorial corporate actions"
        })),
    )
    .await;
    mount(
        server,
        "POST",
        "/api/instruments",
        ResponseTemplate::new(201).set_body_json(json!({
            "values": {
                "ACME": { "lusidInstrumentId": "LUID_ACME", "name": "Acme Plc" }
            }
        })),
    )
    .await;
    mount(
        server,
        "POST",
        "/api/transactionportfolios/tutorials-test",
        ResponseTemplate::new(201).set_body_json(json!({
            "id": { "scope": SCOPE, "code": "PF-1" },
            "displayName": "Tutorial portfolio PF-1",
            "created": "2019-01-01T00:00:00Z"
        })),
    )
    .await;
    mount(
        server,
        "POST",
        "/api/transactionportfolios/tutorials-test/PF-1/transactions",
        ResponseTemplate::new(200).set_body_json(version()),
    )
    .await;
}

/// Method and path of every request the stand-in received, in order.
async fn calls(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn setup_creates_resources_in_order_and_books_transactions() {
    let server = MockServer::start().await;
    mount_setup(&server).await;

    let client = client_for(&server);
    let mut cleanup = Cleanup::new();
    let demo = DemoPortfolio::setup(&client, &spec(), &mut cleanup).await.unwrap();

    assert_eq!(demo.equity_uid, "LUID_ACME");
    assert_eq!(demo.portfolio, ResourceId::new(SCOPE, "PF-1"));
    assert_eq!(
        calls(&server).await,
        vec![
            "POST /api/corporateactionsources",
            "POST /api/instruments",
            "POST /api/transactionportfolios/tutorials-test",
            "POST /api/transactionportfolios/tutorials-test/PF-1/transactions",
        ]
    );
    assert_eq!(
        cleanup.resources(),
        &[
            Resource::CorporateActionSource(ResourceId::new(SCOPE, "CA-1")),
            Resource::Instrument {
                identifier_type: "ClientInternal".to_string(),
                identifier: "ACME".to_string(),
            },
            Resource::Portfolio(ResourceId::new(SCOPE, "PF-1")),
        ]
    );

    let requests = server.received_requests().await.unwrap();
    let booked: Value = serde_json::from_slice(&requests[3].body).unwrap();
    assert_eq!(booked[0]["type"], "FundsIn");
    assert_eq!(booked[1]["type"], "Buy");
    assert_eq!(booked[1]["totalConsideration"]["amount"], 330000.0);
}

#[tokio::test]
async fn setup_reuses_an_existing_portfolio() {
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/api/transactionportfolios/tutorials-test",
        platform_error(409, "PortfolioWithIdAlreadyExists", 112),
    )
    .await;
    mount_setup(&server).await;

    let client = client_for(&server);
    let mut cleanup = Cleanup::new();
    DemoPortfolio::setup(&client, &spec(), &mut cleanup).await.unwrap();

    assert!(calls(&server).await.last().unwrap().ends_with("/transactions"));
}

#[tokio::test]
async fn setup_stops_at_the_first_failing_call() {
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/api/instruments",
        platform_error(400, "ValidationError", 104),
    )
    .await;
    mount_setup(&server).await;

    let client = client_for(&server);
    let mut cleanup = Cleanup::new();
    let err = DemoPortfolio::setup(&client, &spec(), &mut cleanup).await.unwrap_err();

    assert!(matches!(err, ScenarioError::Api(_)));
    assert_eq!(calls(&server).await.len(), 2);
    assert_eq!(cleanup.len(), 1);
}

#[tokio::test]
async fn rejected_corporate_action_is_reported_before_holdings_are_read() {
    let server = MockServer::start().await;
    mount_setup(&server).await;
    mount(
        &server,
        "POST",
        "/api/corporateactionsources/tutorials-test/CA-1/corporateactions",
        ResponseTemplate::new(200).set_body_json(json!({
            "values": [],
            "failed": { "DIV-1": { "id": "DIV-1", "type": "InvalidTransition", "detail": "bad" } }
        })),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/transactionportfolios/tutorials-test/PF-1/holdings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut cleanup = Cleanup::new();
    let demo = DemoPortfolio::setup(&client, &spec(), &mut cleanup).await.unwrap();
    let dates = CorporateActionDates {
        announcement: date(2019, 1, 3),
        ex: date(2019, 1, 15),
        record: date(2019, 1, 16),
        payment: date(2019, 2, 1),
    };

    let err = dividend_payment(&client, &demo, "DIV-1", dec!(0.5), dates)
        .await
        .unwrap_err();
    match err {
        ScenarioError::PartialFailure { operation, failed } => {
            assert_eq!(operation, "upsert corporate actions");
            assert_eq!(failed, vec!["DIV-1".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn corporate_actions_need_a_source() {
    let server = MockServer::start().await;
    mount_setup(&server).await;

    let client = client_for(&server);
    let mut cleanup = Cleanup::new();
    let mut no_source = spec();
    no_source.corporate_action_source = None;
    let demo = DemoPortfolio::setup(&client, &no_source, &mut cleanup).await.unwrap();

    let dates = CorporateActionDates {
        announcement: date(2019, 1, 3),
        ex: date(2019, 1, 15),
        record: date(2019, 1, 16),
        payment: date(2019, 2, 1),
    };
    let err = dividend_payment(&client, &demo, "DIV-1", dec!(0.5), dates)
        .await
        .unwrap_err();
    assert!(matches!(err, ScenarioError::MissingPrerequisite(_)));
}

#[tokio::test]
async fn cleanup_runs_newest_first_and_survives_failures() {
    let server = MockServer::start().await;
    mount(
        &server,
        "DELETE",
        "/api/recipes/tutorials-test/R-1",
        platform_error(404, "RecipeNotFound", 323),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/api/portfolios/tutorials-test/PF-1",
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/api/instruments/ClientInternal/ACME",
        ResponseTemplate::new(200),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/api/corporateactionsources/tutorials-test/CA-1",
        ResponseTemplate::new(200),
    )
    .await;

    let mut cleanup = Cleanup::new();
    cleanup.track(Resource::CorporateActionSource(ResourceId::new(SCOPE, "CA-1")));
    cleanup.track(Resource::Instrument {
        identifier_type: "ClientInternal".to_string(),
        identifier: "ACME".to_string(),
    });
    cleanup.track(Resource::Portfolio(ResourceId::new(SCOPE, "PF-1")));
    cleanup.track(Resource::Recipe(ResourceId::new(SCOPE, "R-1")));

    let report = cleanup.run(&client_for(&server)).await;

    assert_eq!(report.deleted, 2);
    assert_eq!(report.already_gone, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, Resource::Portfolio(ResourceId::new(SCOPE, "PF-1")));
    assert!(!report.is_clean());
    assert_eq!(
        calls(&server).await,
        vec![
            "DELETE /api/recipes/tutorials-test/R-1",
            "DELETE /api/portfolios/tutorials-test/PF-1",
            "DELETE /api/instruments/ClientInternal/ACME",
            "DELETE /api/corporateactionsources/tutorials-test/CA-1",
        ]
    );
}
