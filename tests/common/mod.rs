//! A wiremock stand-in for the platform, shared by the tutorial tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use configuration::{ApiConfig, Config, LoggingConfig, TutorialSettings};
use core_types::ResourceId;
use fixtures::CorporateActionDates;
use platform_tutorials::TestContext;
use rust_decimal::Decimal;
use scenarios::DemoPortfolioSpec;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct StandIn {
    pub server: MockServer,
    pub ctx: TestContext,
}

impl StandIn {
    pub async fn start() -> Self {
        Self::start_with(TutorialSettings::default()).await
    }

    pub async fn start_with(tutorials: TutorialSettings) -> Self {
        let server = MockServer::start().await;
        let config = Config {
            api: ApiConfig::new(format!("{}/api", server.uri())),
            tutorials,
            logging: LoggingConfig::default(),
        };
        let ctx = TestContext::from_config(config).unwrap();
        Self { server, ctx }
    }

    pub fn scope(&self) -> &str {
        &self.ctx.scope
    }

    /// Method and path of every request received so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap()
    }

    /// JSON bodies of every request sent to `route`, in order.
    pub async fn bodies_sent_to(&self, route: &str) -> Vec<Value> {
        self.requests()
            .await
            .iter()
            .filter(|r| r.url.path() == route)
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }

    /// The `effectiveAt` of every holdings request, in the order they were sent.
    pub async fn holdings_dates(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .filter(|r| r.method.as_str() == "GET" && r.url.path().ends_with("/holdings"))
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "effectiveAt")
                    .map(|(_, v)| v.into_owned())
            })
            .collect()
    }

    pub async fn respond(&self, verb: &str, route: &str, response: ResponseTemplate) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Accepts any delete, so teardown always succeeds.
    pub async fn accept_deletes(&self) {
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// Answers an instrument upsert for `client_internal` with `uid`.
    pub async fn instrument(&self, client_internal: &str, uid: &str) {
        Mock::given(method("POST"))
            .and(path("/api/instruments"))
            .and(body_partial_json(json!({ client_internal: {} })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "values": {
                    client_internal: { "lusidInstrumentId": uid, "name": client_internal }
                },
                "failed": {}
            })))
            .mount(&self.server)
            .await;
    }

    /// Everything `DemoPortfolio::setup` calls, for the portfolio in `spec`.
    pub async fn demo_portfolio(&self, spec: &DemoPortfolioSpec, uid: &str) {
        if let Some(source) = &spec.corporate_action_source {
            self.respond(
                "POST",
                "/api/corporateactionsources",
                ResponseTemplate::new(201).set_body_json(json!({
                    "id": { "scope": source.scope, "code": source.code },
                    "displayName": "Tutorial corporate actions"
                })),
            )
            .await;
            self.respond(
                "POST",
                &format!(
                    "/api/corporateactionsources/{}/{}/corporateactions",
                    source.scope, source.code
                ),
                ResponseTemplate::new(200).set_body_json(json!({ "values": [], "failed": {} })),
            )
            .await;
        }
        self.instrument(&spec.equity_client_internal, uid).await;
        self.respond(
            "POST",
            &format!("/api/transactionportfolios/{}", spec.scope),
            ResponseTemplate::new(201).set_body_json(json!({
                "id": { "scope": spec.scope, "code": spec.code },
                "displayName": format!("Tutorial portfolio {}", spec.code),
                "baseCurrency": spec.currency,
                "created": "2018-01-01T00:00:00Z"
            })),
        )
        .await;
        self.respond(
            "POST",
            &format!("/api/transactionportfolios/{}/{}/transactions", spec.scope, spec.code),
            ResponseTemplate::new(200).set_body_json(json!({
                "version": {
                    "effectiveFrom": "2018-01-01T00:00:00Z",
                    "asAtDate": "2018-01-02T09:00:00Z"
                }
            })),
        )
        .await;
    }

    /// Answers a holdings request for `portfolio` as of `effective_at`.
    pub async fn holdings(&self, portfolio: &ResourceId, effective_at: &str, holdings: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/api/transactionportfolios/{}/{}/holdings",
                portfolio.scope, portfolio.code
            )))
            .and(query_param("effectiveAt", effective_at))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": holdings })))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Dates of the corporate actions in the tutorials.
pub fn action_dates() -> CorporateActionDates {
    CorporateActionDates {
        announcement: date(2018, 1, 5),
        ex: date(2018, 1, 10),
        record: date(2018, 1, 11),
        payment: date(2018, 1, 20),
    }
}

/// The UK equity portfolio of the corporate action tutorials: 132,000
/// shares bought for 330,000 out of 3,290,000 paid in, leaving 2,960,000.
pub fn uk_equity_portfolio(ctx: &TestContext, equity_client_internal: &str) -> DemoPortfolioSpec {
    DemoPortfolioSpec {
        scope: ctx.scope.clone(),
        code: "UK-EQUITY".to_string(),
        currency: ctx.currency().to_string(),
        created: date(2018, 1, 1),
        corporate_action_source: Some(ResourceId::new(&ctx.scope, "UK-CORP-ACTIONS")),
        equity_name: "UK Equity Plc".to_string(),
        equity_client_internal: equity_client_internal.to_string(),
        sector: None,
        funds_in: Decimal::from(3_290_000),
        units: Decimal::from(132_000),
        price: Decimal::new(25, 1),
        trade_date: date(2018, 1, 2),
        settle_days: 0,
    }
}

pub fn position(uid: &str, units: u64, settled_units: u64) -> Value {
    json!({
        "instrumentUid": uid,
        "holdingType": "P",
        "units": units,
        "settledUnits": settled_units,
        "cost": { "amount": 330000, "currency": "GBP" }
    })
}

/// A GBP cash holding of the given holding type code.
pub fn cash(holding_type: &str, amount: u64) -> Value {
    json!({
        "instrumentUid": "CCY_GBP",
        "holdingType": holding_type,
        "units": amount,
        "settledUnits": amount,
        "cost": { "amount": amount, "currency": "GBP" }
    })
}
