//! Corporate actions applied to a [`DemoPortfolio`] and observed through
//! holdings snapshots.
//!
//! The platform applies the action; these drivers only upsert it and read
//! holdings back at fixed points: the announcement date, the day after the
//! ex date and the day after the payment date.

use crate::check_failed;
use crate::error::ScenarioError;
use crate::instruments::upsert_instrument;
use crate::setup::DemoPortfolio;
use crate::teardown::Cleanup;
use api_client::PlatformClient;
use chrono::{DateTime, Utc};
use core_types::{CorporateAction, PortfolioHolding, ResourceId, UpsertCorporateActionRequest};
use fixtures::dates::{midnight, plus_days};
use fixtures::{CorporateActionDates, corporate_actions, instruments};
use rust_decimal::Decimal;

/// The holdings of a portfolio as of one effective date.
#[derive(Debug, Clone)]
pub struct HoldingsSnapshot {
    pub effective_at: DateTime<Utc>,
    pub holdings: Vec<PortfolioHolding>,
}

/// Holdings before, during and after a corporate action.
#[derive(Debug, Clone)]
pub struct CorporateActionOutcome {
    pub before: HoldingsSnapshot,
    /// Between the ex date and the payment date.
    pub after_ex: HoldingsSnapshot,
    pub after_payment: HoldingsSnapshot,
}

/// The effective dates at which an action's holdings are snapshotted.
pub fn snapshot_dates(dates: &CorporateActionDates) -> [DateTime<Utc>; 3] {
    [
        midnight(dates.announcement),
        midnight(plus_days(dates.ex, 1)),
        midnight(plus_days(dates.payment, 1)),
    ]
}

/// Every corporate action currently held by `source`.
pub async fn announced(
    client: &dyn PlatformClient,
    source: &ResourceId,
) -> Result<Vec<CorporateAction>, ScenarioError> {
    let actions = client.get_corporate_actions(source).await?;
    tracing::debug!(%source, count = actions.len(), "Listed corporate actions.");
    Ok(actions)
}

/// Upserts `action` into `source`, then fetches the holdings of `portfolio`
/// at each date in `effective_dates`, in order.
pub async fn apply_and_snapshot(
    client: &dyn PlatformClient,
    source: &ResourceId,
    portfolio: &ResourceId,
    action: &UpsertCorporateActionRequest,
    effective_dates: &[DateTime<Utc>],
) -> Result<Vec<HoldingsSnapshot>, ScenarioError> {
    tracing::info!(%source, code = %action.corporate_action_code, "Upserting corporate action.");
    let response = client
        .batch_upsert_corporate_actions(source, std::slice::from_ref(action))
        .await?;
    check_failed("upsert corporate actions", &response.failed)?;

    let mut snapshots = Vec::with_capacity(effective_dates.len());
    for effective_at in effective_dates {
        let holdings = client.get_holdings(portfolio, *effective_at).await?;
        tracing::debug!(%portfolio, %effective_at, count = holdings.len(), "Fetched holdings.");
        snapshots.push(HoldingsSnapshot {
            effective_at: *effective_at,
            holdings,
        });
    }
    Ok(snapshots)
}

async fn run(
    client: &dyn PlatformClient,
    demo: &DemoPortfolio,
    action: &UpsertCorporateActionRequest,
    dates: &CorporateActionDates,
) -> Result<CorporateActionOutcome, ScenarioError> {
    let source = demo
        .corporate_action_source
        .as_ref()
        .ok_or(ScenarioError::MissingPrerequisite(
            "portfolio is not subscribed to a corporate action source",
        ))?;

    let snapshots =
        apply_and_snapshot(client, source, &demo.portfolio, action, &snapshot_dates(dates)).await?;
    let [before, after_ex, after_payment]: [HoldingsSnapshot; 3] = snapshots
        .try_into()
        .map_err(|_| ScenarioError::MissingPrerequisite("one holdings snapshot per date"))?;

    Ok(CorporateActionOutcome {
        before,
        after_ex,
        after_payment,
    })
}

/// Pays a cash dividend of `rate` per unit of the demo equity.
pub async fn dividend_payment(
    client: &dyn PlatformClient,
    demo: &DemoPortfolio,
    code: &str,
    rate: Decimal,
    dates: CorporateActionDates,
) -> Result<CorporateActionOutcome, ScenarioError> {
    let action = corporate_actions::cash_dividend(
        code,
        &demo.equity_client_internal,
        &demo.currency,
        rate,
        dates,
    );
    run(client, demo, &action, &dates).await
}

/// Splits each unit of the demo equity into `ratio` units.
pub async fn stock_split(
    client: &dyn PlatformClient,
    demo: &DemoPortfolio,
    code: &str,
    ratio: Decimal,
    dates: CorporateActionDates,
) -> Result<CorporateActionOutcome, ScenarioError> {
    let action = corporate_actions::stock_split(code, &demo.equity_client_internal, ratio, dates);
    run(client, demo, &action, &dates).await
}

/// The holdings around a name change, plus the platform id of the new instrument.
#[derive(Debug, Clone)]
pub struct NameChangeOutcome {
    pub new_uid: String,
    pub snapshots: CorporateActionOutcome,
}

/// Creates the renamed instrument, then moves the demo equity holding onto it.
pub async fn name_change(
    client: &dyn PlatformClient,
    demo: &DemoPortfolio,
    code: &str,
    new_name: &str,
    new_client_internal: &str,
    dates: CorporateActionDates,
    cleanup: &mut Cleanup,
) -> Result<NameChangeOutcome, ScenarioError> {
    let new_uid = upsert_instrument(
        client,
        instruments::equity(new_name, new_client_internal, None),
        cleanup,
    )
    .await?;

    let action = corporate_actions::name_change(
        code,
        &demo.equity_client_internal,
        new_client_internal,
        dates,
    );
    let snapshots = run(client, demo, &action, &dates).await?;
    Ok(NameChangeOutcome { new_uid, snapshots })
}
