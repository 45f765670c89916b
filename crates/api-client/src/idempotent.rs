//! Setup and teardown calls that tolerate "already exists" and "not found".
//!
//! Each helper names exactly the error codes it swallows for its operation;
//! every other error is returned to the caller unchanged.

use crate::PlatformClient;
use crate::error::{ApiError, ErrorCode};
use core_types::{
    CreateCorporateActionSourceRequest, CreateTransactionPortfolioRequest,
    PropertyDefinitionRequest, PropertyDomain, ResourceId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

const PORTFOLIO_EXISTS: &[ErrorCode] = &[ErrorCode::PortfolioWithIdAlreadyExists];
const SOURCE_EXISTS: &[ErrorCode] = &[ErrorCode::CorporateActionSourceAlreadyExists];
const PROPERTY_EXISTS: &[ErrorCode] = &[ErrorCode::PropertyAlreadyExists];

const PORTFOLIO_MISSING: &[ErrorCode] = &[ErrorCode::PortfolioNotFound];
const INSTRUMENT_MISSING: &[ErrorCode] = &[
    ErrorCode::InstrumentNotFound,
    ErrorCode::InstrumentByCodeNotFound,
];
const SOURCE_MISSING: &[ErrorCode] = &[ErrorCode::CorporateActionSourceNotFound];
const RECIPE_MISSING: &[ErrorCode] = &[ErrorCode::RecipeNotFound];
const PROPERTY_MISSING: &[ErrorCode] = &[ErrorCode::PropertyNotDefined];

fn tolerate_create<T>(
    result: Result<T, ApiError>,
    benign: &[ErrorCode],
    what: &str,
) -> Result<CreateOutcome, ApiError> {
    match result {
        Ok(_) => Ok(CreateOutcome::Created),
        Err(e) if benign.iter().any(|code| e.is(*code)) => {
            tracing::debug!(resource = what, "Already exists, reusing it.");
            Ok(CreateOutcome::AlreadyExisted)
        }
        Err(e) => Err(e),
    }
}

fn tolerate_delete(
    result: Result<(), ApiError>,
    benign: &[ErrorCode],
    what: &str,
) -> Result<DeleteOutcome, ApiError> {
    match result {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        Err(e) if benign.iter().any(|code| e.is(*code)) => {
            tracing::debug!(resource = what, "Nothing to delete.");
            Ok(DeleteOutcome::NotFound)
        }
        Err(e) => Err(e),
    }
}

pub async fn ensure_portfolio<C: PlatformClient + ?Sized>(
    client: &C,
    scope: &str,
    request: &CreateTransactionPortfolioRequest,
) -> Result<CreateOutcome, ApiError> {
    let result = client.create_portfolio(scope, request).await;
    tolerate_create(result, PORTFOLIO_EXISTS, "portfolio")
}

pub async fn ensure_corporate_action_source<C: PlatformClient + ?Sized>(
    client: &C,
    request: &CreateCorporateActionSourceRequest,
) -> Result<CreateOutcome, ApiError> {
    let result = client.create_corporate_action_source(request).await;
    tolerate_create(result, SOURCE_EXISTS, "corporate action source")
}

pub async fn ensure_property_definition<C: PlatformClient + ?Sized>(
    client: &C,
    request: &PropertyDefinitionRequest,
) -> Result<CreateOutcome, ApiError> {
    let result = client.create_property_definition(request).await;
    tolerate_create(result, PROPERTY_EXISTS, "property definition")
}

pub async fn delete_portfolio_if_exists<C: PlatformClient + ?Sized>(
    client: &C,
    portfolio: &ResourceId,
) -> Result<DeleteOutcome, ApiError> {
    let result = client.delete_portfolio(portfolio).await;
    tolerate_delete(result, PORTFOLIO_MISSING, "portfolio")
}

pub async fn delete_instrument_if_exists<C: PlatformClient + ?Sized>(
    client: &C,
    identifier_type: &str,
    identifier: &str,
) -> Result<DeleteOutcome, ApiError> {
    let result = client.delete_instrument(identifier_type, identifier).await;
    tolerate_delete(result, INSTRUMENT_MISSING, "instrument")
}

pub async fn delete_corporate_action_source_if_exists<C: PlatformClient + ?Sized>(
    client: &C,
    source: &ResourceId,
) -> Result<DeleteOutcome, ApiError> {
    let result = client.delete_corporate_action_source(source).await;
    tolerate_delete(result, SOURCE_MISSING, "corporate action source")
}

pub async fn delete_recipe_if_exists<C: PlatformClient + ?Sized>(
    client: &C,
    recipe: &ResourceId,
) -> Result<DeleteOutcome, ApiError> {
    let result = client.delete_recipe(recipe).await;
    tolerate_delete(result, RECIPE_MISSING, "recipe")
}

pub async fn delete_property_definition_if_exists<C: PlatformClient + ?Sized>(
    client: &C,
    domain: PropertyDomain,
    scope: &str,
    code: &str,
) -> Result<DeleteOutcome, ApiError> {
    let result = client.delete_property_definition(domain, scope, code).await;
    tolerate_delete(result, PROPERTY_MISSING, "property definition")
}
