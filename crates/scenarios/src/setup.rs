use crate::error::ScenarioError;
use crate::instruments::upsert_instrument;
use crate::teardown::{Cleanup, Resource};
use api_client::PlatformClient;
use api_client::idempotent::{
    ensure_corporate_action_source, ensure_portfolio, ensure_property_definition,
};
use chrono::NaiveDate;
use core_types::{PropertyDomain, ResourceId};
use fixtures::dates::midnight;
use fixtures::{corporate_actions, instruments, portfolios, properties, transactions};
use rust_decimal::Decimal;

/// What to book into a demo portfolio.
#[derive(Debug, Clone)]
pub struct DemoPortfolioSpec {
    pub scope: String,
    pub code: String,
    pub currency: String,
    pub created: NaiveDate,
    /// Subscribes the portfolio to a new corporate action source when set.
    pub corporate_action_source: Option<ResourceId>,
    pub equity_name: String,
    pub equity_client_internal: String,
    /// Labels the equity with an instrument-scoped `Sector` property when set.
    pub sector: Option<String>,
    pub funds_in: Decimal,
    pub units: Decimal,
    pub price: Decimal,
    pub trade_date: NaiveDate,
    pub settle_days: u64,
}

/// A transaction portfolio holding cash and a single equity.
#[derive(Debug, Clone)]
pub struct DemoPortfolio {
    pub portfolio: ResourceId,
    pub currency: String,
    pub corporate_action_source: Option<ResourceId>,
    pub equity_client_internal: String,
    /// The platform's id for the equity, as it appears on holdings.
    pub equity_uid: String,
}

impl DemoPortfolio {
    /// Creates everything the portfolio needs, then books a funds-in and a
    /// purchase of the equity. Every resource is registered with `cleanup`
    /// as soon as it exists.
    pub async fn setup(
        client: &dyn PlatformClient,
        spec: &DemoPortfolioSpec,
        cleanup: &mut Cleanup,
    ) -> Result<Self, ScenarioError> {
        tracing::info!(scope = %spec.scope, code = %spec.code, "Setting up demo portfolio.");

        if let Some(source) = &spec.corporate_action_source {
            let request = corporate_actions::source(
                &source.scope,
                &source.code,
                "Tutorial corporate actions",
            );
            let outcome = ensure_corporate_action_source(client, &request).await?;
            tracing::debug!(%source, ?outcome, "Corporate action source ready.");
            cleanup.track(Resource::CorporateActionSource(source.clone()));
        }

        let mut equity = instruments::equity(&spec.equity_name, &spec.equity_client_internal, None);
        if let Some(sector) = &spec.sector {
            let definition = properties::string_property(
                PropertyDomain::Instrument,
                &spec.scope,
                "Sector",
                "Sector",
            );
            ensure_property_definition(client, &definition).await?;
            cleanup.track(Resource::PropertyDefinition {
                domain: PropertyDomain::Instrument,
                scope: spec.scope.clone(),
                code: "Sector".to_string(),
            });
            equity = instruments::with_label(equity, &definition.key(), sector);
        }

        let equity_uid = upsert_instrument(client, equity, cleanup).await?;

        let portfolio = ResourceId::new(&spec.scope, &spec.code);
        let request = portfolios::transaction_portfolio(
            &spec.code,
            &format!("Tutorial portfolio {}", spec.code),
            &spec.currency,
            spec.created,
            spec.corporate_action_source.as_ref(),
        );
        ensure_portfolio(client, &spec.scope, &request).await?;
        cleanup.track(Resource::Portfolio(portfolio.clone()));

        let booked = [
            transactions::funds_in("txn-funds-in", &spec.currency, spec.funds_in, spec.created),
            transactions::buy(
                "txn-buy",
                &spec.equity_client_internal,
                spec.units,
                spec.price,
                &spec.currency,
                spec.trade_date,
                spec.settle_days,
            ),
        ];
        let version = client.upsert_transactions(&portfolio, &booked).await?;
        tracing::info!(
            %portfolio,
            as_at = %version.version.as_at_date,
            "Booked opening transactions."
        );

        Ok(Self {
            portfolio,
            currency: spec.currency.clone(),
            corporate_action_source: spec.corporate_action_source.clone(),
            equity_client_internal: spec.equity_client_internal.clone(),
            equity_uid,
        })
    }

    /// Overwrites the equity holding as of `date` with `units` bought for
    /// `cost`, bypassing the transaction history.
    pub async fn set_equity_holding(
        &self,
        client: &dyn PlatformClient,
        date: NaiveDate,
        units: Decimal,
        cost: Decimal,
    ) -> Result<(), ScenarioError> {
        let adjustment = portfolios::holding_adjustment(
            &self.equity_client_internal,
            units,
            cost,
            &self.currency,
        );
        let version = client
            .adjust_holdings(&self.portfolio, midnight(date), std::slice::from_ref(&adjustment))
            .await?;
        tracing::info!(
            portfolio = %self.portfolio,
            %units,
            as_at = %version.version.as_at_date,
            "Adjusted equity holding."
        );
        Ok(())
    }
}
