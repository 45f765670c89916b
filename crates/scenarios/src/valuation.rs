//! Valuations against recipes, both inline and for booked portfolios.

use crate::error::ScenarioError;
use crate::market_data::upload_quotes;
use crate::teardown::{Cleanup, Resource};
use crate::instruments::upsert_instrument;
use api_client::PlatformClient;
use chrono::NaiveDate;
use core_types::valuation::metrics;
use core_types::{CashFlow, ConfigurationRecipe, ResourceId, ValuationRow, identifier_types};
use fixtures::dates::midnight;
use fixtures::{instruments, quotes, recipes, valuation};
use rust_decimal::Decimal;

/// The literals of the recipe-override walkthrough.
#[derive(Debug, Clone)]
pub struct OptionPvSetup {
    /// Scope for the recipe, the underlying and its generic quote.
    pub scope: String,
    /// Scope holding the quote only the currency-specific rule resolves to.
    pub override_scope: String,
    pub recipe_code: String,
    pub underlying_name: String,
    pub underlying_client_internal: String,
    pub currency: String,
    pub strike: Decimal,
    pub generic_price: Decimal,
    pub override_price: Decimal,
    pub start: NaiveDate,
    pub valuation_date: NaiveDate,
    pub maturity: NaiveDate,
}

/// Present values of the same option under the two recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPvOutcome {
    pub generic_pv: Decimal,
    pub override_pv: Decimal,
}

/// Values an equity call inline, first with a recipe whose only market rule
/// reads quotes from `scope`, then with the same recipe plus a specific rule
/// sending instruments in `currency` to `override_scope`.
pub async fn option_pv_with_rules(
    client: &dyn PlatformClient,
    setup: &OptionPvSetup,
    cleanup: &mut Cleanup,
) -> Result<OptionPvOutcome, ScenarioError> {
    upsert_instrument(
        client,
        instruments::equity(&setup.underlying_name, &setup.underlying_client_internal, None),
        cleanup,
    )
    .await?;

    let series = quotes::price_series(
        quotes::DEFAULT_PROVIDER,
        &setup.underlying_client_internal,
        identifier_types::CLIENT_INTERNAL,
    );
    let date = setup.valuation_date;
    let generic_quote = quotes::quote(series.clone(), date, setup.generic_price, &setup.currency);
    let override_quote = quotes::quote(series, date, setup.override_price, &setup.currency);
    upload_quotes(client, &setup.scope, vec![generic_quote]).await?;
    upload_quotes(client, &setup.override_scope, vec![override_quote]).await?;

    let recipe_id = ResourceId::new(&setup.scope, &setup.recipe_code);
    let option = valuation::weighted(
        "equity-option",
        Decimal::ONE,
        instruments::equity_call_option(
            &setup.underlying_client_internal,
            setup.strike,
            &setup.currency,
            setup.start,
            setup.maturity,
        ),
    );
    let request =
        valuation::inline_valuation_request(&recipe_id, setup.valuation_date, vec![option]);

    let generic_rule = recipes::quote_rule(recipes::CLIENT_INTERNAL_QUOTES, &setup.scope);
    let generic = recipes::recipe(
        &setup.scope,
        &setup.recipe_code,
        &setup.scope,
        vec![generic_rule.clone()],
        vec![],
        vec![recipes::intrinsic_option_model()],
    );
    upsert_recipe(client, &generic, cleanup).await?;
    let generic_pv = single_pv(client.get_valuation_inlined(&request).await?.data)?;
    tracing::info!(%recipe_id, pv = %generic_pv, "Valued option with the generic rule.");

    let overridden = recipes::recipe(
        &setup.scope,
        &setup.recipe_code,
        &setup.scope,
        vec![generic_rule],
        vec![recipes::specific_rule_for_currency(
            recipes::CLIENT_INTERNAL_QUOTES,
            &setup.override_scope,
            &setup.currency,
        )],
        vec![recipes::intrinsic_option_model()],
    );
    upsert_recipe(client, &overridden, cleanup).await?;
    let override_pv = single_pv(client.get_valuation_inlined(&request).await?.data)?;
    tracing::info!(%recipe_id, pv = %override_pv, "Valued option with the currency-specific rule.");

    Ok(OptionPvOutcome {
        generic_pv,
        override_pv,
    })
}

/// Upserts a recipe and registers it for cleanup.
pub async fn upsert_recipe(
    client: &dyn PlatformClient,
    recipe: &ConfigurationRecipe,
    cleanup: &mut Cleanup,
) -> Result<(), ScenarioError> {
    let response = client.upsert_recipe(recipe).await?;
    tracing::debug!(
        scope = %recipe.scope,
        code = %recipe.code,
        as_at = %response.value,
        "Recipe upserted."
    );
    cleanup.track(Resource::Recipe(ResourceId::new(&recipe.scope, &recipe.code)));
    Ok(())
}

fn single_pv(rows: Vec<ValuationRow>) -> Result<Decimal, ScenarioError> {
    match rows.as_slice() {
        [row] => Ok(row.present_value()?),
        _ => Err(ScenarioError::MissingResponse {
            operation: "inline valuation",
            key: metrics::PV.to_string(),
        }),
    }
}

/// Values a booked portfolio as of `date`, one row per holding currency.
pub async fn portfolio_valuation(
    client: &dyn PlatformClient,
    recipe: &ResourceId,
    portfolio: &ResourceId,
    date: NaiveDate,
) -> Result<Vec<ValuationRow>, ScenarioError> {
    let request = valuation::portfolio_valuation_request(recipe, portfolio, date);
    let response = client.get_valuation(&request).await?;
    tracing::info!(%portfolio, %recipe, rows = response.data.len(), "Valued portfolio.");
    Ok(response.data)
}

/// Cash flows of a portfolio paid between two dates, inclusive.
pub async fn cash_flows(
    client: &dyn PlatformClient,
    portfolio: &ResourceId,
    from: NaiveDate,
    to: NaiveDate,
    recipe: Option<&ResourceId>,
) -> Result<Vec<CashFlow>, ScenarioError> {
    let flows = client
        .get_cash_flows(portfolio, midnight(from), midnight(to), recipe)
        .await?;
    tracing::debug!(%portfolio, count = flows.len(), "Fetched cash flows.");
    Ok(flows)
}
