//! A market data rule specific to USD instruments overrides the generic rule
//! when pricing an equity option.

mod common;

use common::{StandIn, date};
use rust_decimal_macros::dec;
use scenarios::Cleanup;
use scenarios::valuation::{OptionPvSetup, option_pv_with_rules};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn pv_row(pv: f64) -> Value {
    json!({
        "data": [{
            "Holding/default/HoldingIdentifier": "equity-option",
            "Analytic/default/ValuationDate": "2020-06-01T00:00:00Z",
            "Valuation/PV": pv
        }]
    })
}

#[tokio::test]
async fn usd_specific_rule_reprices_the_option() {
    let platform = StandIn::start().await;
    let scope = platform.scope().to_string();
    let override_scope = platform.ctx.override_scope.clone();

    platform.instrument("TUT-UNDERLYING", "LUID_UNDERLYING").await;
    for s in [&scope, &override_scope] {
        platform
            .respond(
                "POST",
                &format!("/api/quotes/{}", s),
                ResponseTemplate::new(200).set_body_json(json!({ "values": {}, "failed": {} })),
            )
            .await;
    }
    platform
        .respond(
            "POST",
            "/api/recipes",
            ResponseTemplate::new(200).set_body_json(json!({ "value": "2020-06-01T09:00:00Z" })),
        )
        .await;
    Mock::given(method("POST"))
        .and(path("/api/aggregation/$valuationinlined"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pv_row(10.0)))
        .up_to_n_times(1)
        .mount(&platform.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/aggregation/$valuationinlined"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pv_row(30.0)))
        .mount(&platform.server)
        .await;
    platform.accept_deletes().await;

    let setup = OptionPvSetup {
        scope: scope.clone(),
        override_scope: override_scope.clone(),
        recipe_code: "option-recipe".to_string(),
        underlying_name: "Tutorial Underlying Inc".to_string(),
        underlying_client_internal: "TUT-UNDERLYING".to_string(),
        currency: "USD".to_string(),
        strike: dec!(90),
        generic_price: dec!(100),
        override_price: dec!(120),
        start: date(2020, 1, 1),
        valuation_date: date(2020, 6, 1),
        maturity: date(2021, 1, 1),
    };

    let client = platform.ctx.client();
    let mut cleanup = Cleanup::new();
    let outcome = option_pv_with_rules(client, &setup, &mut cleanup).await.unwrap();

    assert_eq!(outcome.generic_pv, dec!(10));
    assert_eq!(outcome.override_pv, dec!(30));

    // Each price lands in its own scope.
    let generic_quotes = platform.bodies_sent_to(&format!("/api/quotes/{}", scope)).await;
    assert_eq!(generic_quotes[0]["quote-0"]["metricValue"]["value"], 100.0);
    let override_quotes = platform.bodies_sent_to(&format!("/api/quotes/{}", override_scope)).await;
    assert_eq!(override_quotes[0]["quote-0"]["metricValue"]["value"], 120.0);

    // The second recipe adds the USD rule pointing at the override scope.
    let recipes = platform.bodies_sent_to("/api/recipes").await;
    assert_eq!(recipes.len(), 2);
    assert!(recipes[0]["configurationRecipe"]["market"].get("specificRules").is_none());
    assert_eq!(
        recipes[1]["configurationRecipe"]["market"]["specificRules"][0]["dependencySourceFilter"],
        json!({ "domCcy": "USD" })
    );
    assert_eq!(
        recipes[1]["configurationRecipe"]["market"]["specificRules"][0]["dataScope"],
        override_scope.as_str()
    );

    // Both valuations price the same strike-90 call against the same recipe.
    let valuations = platform.bodies_sent_to("/api/aggregation/$valuationinlined").await;
    assert_eq!(valuations.len(), 2);
    assert_eq!(valuations[0], valuations[1]);
    assert_eq!(valuations[0]["instruments"][0]["instrument"]["strike"], 90.0);
    assert_eq!(
        valuations[0]["recipeId"],
        json!({ "scope": scope, "code": "option-recipe" })
    );

    // Recipes are upserted before each valuation that depends on them.
    let calls = platform.calls().await;
    let order: Vec<&str> = calls
        .iter()
        .filter(|c| c.contains("/recipes") || c.contains("$valuationinlined"))
        .map(|c| if c.contains("/recipes") { "recipe" } else { "value" })
        .collect();
    assert_eq!(order, vec!["recipe", "value", "recipe", "value"]);

    let report = cleanup.run(client).await;
    assert!(report.is_clean());
    assert_eq!(report.deleted, 2);
}
