//! Best-effort removal of everything a scenario created.

use api_client::PlatformClient;
use api_client::idempotent::{
    delete_corporate_action_source_if_exists, delete_instrument_if_exists,
    delete_portfolio_if_exists, delete_property_definition_if_exists, delete_recipe_if_exists,
};
use api_client::{DeleteOutcome, error::ApiError};
use core_types::{PropertyDomain, ResourceId};
use std::fmt;

/// A remote resource a scenario created and owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Portfolio(ResourceId),
    Instrument {
        identifier_type: String,
        identifier: String,
    },
    CorporateActionSource(ResourceId),
    Recipe(ResourceId),
    PropertyDefinition {
        domain: PropertyDomain,
        scope: String,
        code: String,
    },
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Portfolio(id) => write!(f, "portfolio {}", id),
            Resource::Instrument {
                identifier_type,
                identifier,
            } => write!(f, "instrument {}={}", identifier_type, identifier),
            Resource::CorporateActionSource(id) => write!(f, "corporate action source {}", id),
            Resource::Recipe(id) => write!(f, "recipe {}", id),
            Resource::PropertyDefinition {
                domain,
                scope,
                code,
            } => write!(f, "property {}/{}/{}", domain.as_str(), scope, code),
        }
    }
}

/// What happened when a [`Cleanup`] ran.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub deleted: usize,
    pub already_gone: usize,
    /// Resources left behind, with the error that stopped their deletion.
    pub failures: Vec<(Resource, String)>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Records resources as they are created and deletes them again, newest
/// first, when [`Cleanup::run`] is called.
///
/// Deletion is not transactional. A failed delete is logged and the rest of
/// the list is still attempted; nothing is retried.
#[derive(Debug, Default)]
pub struct Cleanup {
    created: Vec<Resource>,
}

impl Cleanup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, resource: Resource) {
        if !self.created.contains(&resource) {
            self.created.push(resource);
        }
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.created
    }

    pub async fn run(self, client: &dyn PlatformClient) -> CleanupReport {
        let mut report = CleanupReport::default();

        for resource in self.created.into_iter().rev() {
            match delete(client, &resource).await {
                Ok(DeleteOutcome::Deleted) => {
                    tracing::debug!(%resource, "Deleted.");
                    report.deleted += 1;
                }
                Ok(DeleteOutcome::NotFound) => report.already_gone += 1,
                Err(e) => {
                    tracing::warn!(%resource, error = %e, "Cleanup failed, resource left behind.");
                    report.failures.push((resource, e.to_string()));
                }
            }
        }

        tracing::info!(
            deleted = report.deleted,
            already_gone = report.already_gone,
            failed = report.failures.len(),
            "Cleanup finished."
        );
        report
    }
}

async fn delete(
    client: &dyn PlatformClient,
    resource: &Resource,
) -> Result<DeleteOutcome, ApiError> {
    match resource {
        Resource::Portfolio(id) => delete_portfolio_if_exists(client, id).await,
        Resource::Instrument {
            identifier_type,
            identifier,
        } => delete_instrument_if_exists(client, identifier_type, identifier).await,
        Resource::CorporateActionSource(id) => {
            delete_corporate_action_source_if_exists(client, id).await
        }
        Resource::Recipe(id) => delete_recipe_if_exists(client, id).await,
        Resource::PropertyDefinition {
            domain,
            scope,
            code,
        } => delete_property_definition_if_exists(client, *domain, scope, code).await,
    }
}
