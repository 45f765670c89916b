use crate::error::ApiError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use configuration::ApiConfig;
use core_types::{
    AdjustHoldingRequest, CashFlow, ConfigurationRecipe, CorporateAction, CorporateActionSource,
    CreateCorporateActionSourceRequest, CreateTransactionPortfolioRequest, IdentifierScheme,
    InlineValuationRequest, Instrument, InstrumentDefinition, Portfolio, PortfolioHolding,
    PropertyDefinition, PropertyDefinitionRequest, PropertyDomain, QuoteSeriesId, ResourceId,
    TransactionRequest, UpsertComplexMarketDataRequest, UpsertCorporateActionRequest,
    UpsertQuoteRequest, ValuationRequest,
};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::time::Duration;

mod auth;
pub mod error;
pub mod idempotent;
pub mod responses;
// --- Public API ---
pub use auth::APPLICATION_HEADER;
pub use error::ErrorCode;
pub use idempotent::{CreateOutcome, DeleteOutcome};
pub use responses::{
    ApiErrorResponse, ErrorDetail, GetQuotesResponse, ListAggregationResponse, ResourceListOf,
    UpsertComplexMarketDataResponse, UpsertCorporateActionsResponse, UpsertInstrumentsResponse,
    UpsertQuotesResponse, UpsertRecipeResponse, VersionedResponse,
};

/// The abstract interface to the remote platform.
///
/// Every tutorial talks to the platform through this trait, so the HTTP
/// implementation can be pointed at a real deployment or at a local stand-in.
/// Failures are returned as-is; nothing here retries.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    // --- Instruments ---

    /// Upserts instruments keyed by correlation id, optionally into a scope.
    async fn upsert_instruments(
        &self,
        scope: Option<&str>,
        definitions: &HashMap<String, InstrumentDefinition>,
    ) -> Result<UpsertInstrumentsResponse, ApiError>;

    async fn get_instrument(
        &self,
        identifier_type: &str,
        identifier: &str,
    ) -> Result<Instrument, ApiError>;

    async fn delete_instrument(&self, identifier_type: &str, identifier: &str)
    -> Result<(), ApiError>;

    async fn list_identifier_schemes(&self) -> Result<Vec<IdentifierScheme>, ApiError>;

    // --- Portfolios ---

    async fn create_portfolio(
        &self,
        scope: &str,
        request: &CreateTransactionPortfolioRequest,
    ) -> Result<Portfolio, ApiError>;

    async fn delete_portfolio(&self, portfolio: &ResourceId) -> Result<(), ApiError>;

    async fn upsert_transactions(
        &self,
        portfolio: &ResourceId,
        transactions: &[TransactionRequest],
    ) -> Result<VersionedResponse, ApiError>;

    async fn adjust_holdings(
        &self,
        portfolio: &ResourceId,
        effective_at: DateTime<Utc>,
        adjustments: &[AdjustHoldingRequest],
    ) -> Result<VersionedResponse, ApiError>;

    async fn get_holdings(
        &self,
        portfolio: &ResourceId,
        effective_at: DateTime<Utc>,
    ) -> Result<Vec<PortfolioHolding>, ApiError>;

    /// Projected cash flows paid inside `[window_start, window_end]`.
    async fn get_cash_flows(
        &self,
        portfolio: &ResourceId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        recipe: Option<&ResourceId>,
    ) -> Result<Vec<CashFlow>, ApiError>;

    // --- Market data ---

    async fn upsert_quotes(
        &self,
        scope: &str,
        quotes: &HashMap<String, UpsertQuoteRequest>,
    ) -> Result<UpsertQuotesResponse, ApiError>;

    async fn get_quotes(
        &self,
        scope: &str,
        effective_at: DateTime<Utc>,
        series: &HashMap<String, QuoteSeriesId>,
    ) -> Result<GetQuotesResponse, ApiError>;

    async fn upsert_complex_market_data(
        &self,
        scope: &str,
        items: &HashMap<String, UpsertComplexMarketDataRequest>,
    ) -> Result<UpsertComplexMarketDataResponse, ApiError>;

    // --- Corporate actions ---

    async fn create_corporate_action_source(
        &self,
        request: &CreateCorporateActionSourceRequest,
    ) -> Result<CorporateActionSource, ApiError>;

    async fn list_corporate_action_sources(&self) -> Result<Vec<CorporateActionSource>, ApiError>;

    async fn delete_corporate_action_source(&self, source: &ResourceId) -> Result<(), ApiError>;

    async fn batch_upsert_corporate_actions(
        &self,
        source: &ResourceId,
        actions: &[UpsertCorporateActionRequest],
    ) -> Result<UpsertCorporateActionsResponse, ApiError>;

    async fn get_corporate_actions(
        &self,
        source: &ResourceId,
    ) -> Result<Vec<CorporateAction>, ApiError>;

    // --- Valuation ---

    async fn upsert_recipe(
        &self,
        recipe: &ConfigurationRecipe,
    ) -> Result<UpsertRecipeResponse, ApiError>;

    async fn delete_recipe(&self, recipe: &ResourceId) -> Result<(), ApiError>;

    async fn get_valuation(
        &self,
        request: &ValuationRequest,
    ) -> Result<ListAggregationResponse, ApiError>;

    async fn get_valuation_inlined(
        &self,
        request: &InlineValuationRequest,
    ) -> Result<ListAggregationResponse, ApiError>;

    // --- Properties ---

    async fn create_property_definition(
        &self,
        request: &PropertyDefinitionRequest,
    ) -> Result<PropertyDefinition, ApiError>;

    async fn delete_property_definition(
        &self,
        domain: PropertyDomain,
        scope: &str,
        code: &str,
    ) -> Result<(), ApiError>;
}

/// The `PlatformClient` backed by the platform's REST API.
#[derive(Clone)]
pub struct HttpPlatformClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EffectiveAtQuery {
    effective_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CashFlowQuery<'a> {
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe_id_scope: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe_id_code: Option<&'a str>,
}

#[derive(Serialize)]
struct ScopeQuery<'a> {
    scope: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsertRecipeBody<'a> {
    configuration_recipe: &'a ConfigurationRecipe,
}

/// Stand-in for "no query string" and "no body".
#[derive(Serialize)]
struct Empty {}

impl HttpPlatformClient {
    pub fn new(api_config: &ApiConfig) -> Result<Self, ApiError> {
        let headers = auth::default_headers(api_config)?;
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(api_config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: api_config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and decodes the response.
    ///
    /// Non-2xx responses are decoded into the platform's error body when
    /// possible, so callers can match on error codes.
    async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<String, ApiError>
    where
        Q: Serialize,
        B: Serialize + ?Sized,
    {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            let query_string = serde_qs::to_string(query)
                .map_err(|e| ApiError::InvalidConfig(format!("query string: {}", e)))?;
            if !query_string.is_empty() {
                url.push('?');
                url.push_str(&query_string);
            }
        }

        tracing::debug!(%method, %url, "Sending platform request.");
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(api_error) => {
                tracing::warn!(
                    %method,
                    path,
                    status = status.as_u16(),
                    name = %api_error.name,
                    code = ?api_error.code,
                    "Platform rejected request."
                );
                Err(ApiError::Platform {
                    status: status.as_u16(),
                    name: api_error.name,
                    code: api_error.code,
                    detail: api_error
                        .detail
                        .or(api_error.title)
                        .unwrap_or_default(),
                })
            }
            Err(_) => {
                tracing::warn!(
                    %method,
                    path,
                    status = status.as_u16(),
                    "Platform returned an undecodable error body."
                );
                Err(ApiError::Http {
                    status: status.as_u16(),
                    body: text,
                })
            }
        }
    }

    async fn _get<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, ApiError> {
        let text = self.send::<Q, Empty>(Method::GET, path, query, None).await?;
        decode(&text)
    }

    async fn _post<T: DeserializeOwned, Q: Serialize, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.send(Method::POST, path, query, Some(body)).await?;
        decode(&text)
    }

    /// Deletes discard the response body; only the status matters.
    async fn _delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<Empty, Empty>(Method::DELETE, path, None, None)
            .await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(text).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn portfolio_path(portfolio: &ResourceId) -> String {
    format!("/transactionportfolios/{}/{}", portfolio.scope, portfolio.code)
}

fn source_path(source: &ResourceId) -> String {
    format!("/corporateactionsources/{}/{}", source.scope, source.code)
}

#[async_trait]
impl PlatformClient for HttpPlatformClient {
    async fn upsert_instruments(
        &self,
        scope: Option<&str>,
        definitions: &HashMap<String, InstrumentDefinition>,
    ) -> Result<UpsertInstrumentsResponse, ApiError> {
        let query = scope.map(|scope| ScopeQuery { scope });
        self._post("/instruments", query.as_ref(), definitions).await
    }

    async fn get_instrument(
        &self,
        identifier_type: &str,
        identifier: &str,
    ) -> Result<Instrument, ApiError> {
        self._get::<_, Empty>(&format!("/instruments/{}/{}", identifier_type, identifier), None)
            .await
    }

    async fn delete_instrument(
        &self,
        identifier_type: &str,
        identifier: &str,
    ) -> Result<(), ApiError> {
        self._delete(&format!("/instruments/{}/{}", identifier_type, identifier))
            .await
    }

    async fn list_identifier_schemes(&self) -> Result<Vec<IdentifierScheme>, ApiError> {
        let list: ResourceListOf<IdentifierScheme> =
            self._get::<_, Empty>("/instruments/identifierTypes", None).await?;
        Ok(list.values)
    }

    async fn create_portfolio(
        &self,
        scope: &str,
        request: &CreateTransactionPortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        self._post::<_, Empty, _>(&format!("/transactionportfolios/{}", scope), None, request)
            .await
    }

    async fn delete_portfolio(&self, portfolio: &ResourceId) -> Result<(), ApiError> {
        self._delete(&format!("/portfolios/{}/{}", portfolio.scope, portfolio.code))
            .await
    }

    async fn upsert_transactions(
        &self,
        portfolio: &ResourceId,
        transactions: &[TransactionRequest],
    ) -> Result<VersionedResponse, ApiError> {
        let path = format!("{}/transactions", portfolio_path(portfolio));
        self._post::<_, Empty, _>(&path, None, transactions).await
    }

    async fn adjust_holdings(
        &self,
        portfolio: &ResourceId,
        effective_at: DateTime<Utc>,
        adjustments: &[AdjustHoldingRequest],
    ) -> Result<VersionedResponse, ApiError> {
        let path = format!("{}/holdings", portfolio_path(portfolio));
        self._post(&path, Some(&EffectiveAtQuery { effective_at }), adjustments)
            .await
    }

    async fn get_holdings(
        &self,
        portfolio: &ResourceId,
        effective_at: DateTime<Utc>,
    ) -> Result<Vec<PortfolioHolding>, ApiError> {
        let path = format!("{}/holdings", portfolio_path(portfolio));
        let list: ResourceListOf<PortfolioHolding> =
            self._get(&path, Some(&EffectiveAtQuery { effective_at })).await?;
        Ok(list.values)
    }

    async fn get_cash_flows(
        &self,
        portfolio: &ResourceId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        recipe: Option<&ResourceId>,
    ) -> Result<Vec<CashFlow>, ApiError> {
        let path = format!("{}/cashflows", portfolio_path(portfolio));
        let query = CashFlowQuery {
            window_start,
            window_end,
            recipe_id_scope: recipe.map(|r| r.scope.as_str()),
            recipe_id_code: recipe.map(|r| r.code.as_str()),
        };
        let list: ResourceListOf<CashFlow> = self._get(&path, Some(&query)).await?;
        Ok(list.values)
    }

    async fn upsert_quotes(
        &self,
        scope: &str,
        quotes: &HashMap<String, UpsertQuoteRequest>,
    ) -> Result<UpsertQuotesResponse, ApiError> {
        self._post::<_, Empty, _>(&format!("/quotes/{}", scope), None, quotes)
            .await
    }

    async fn get_quotes(
        &self,
        scope: &str,
        effective_at: DateTime<Utc>,
        series: &HashMap<String, QuoteSeriesId>,
    ) -> Result<GetQuotesResponse, ApiError> {
        self._post(
            &format!("/quotes/{}/$get", scope),
            Some(&EffectiveAtQuery { effective_at }),
            series,
        )
        .await
    }

    async fn upsert_complex_market_data(
        &self,
        scope: &str,
        items: &HashMap<String, UpsertComplexMarketDataRequest>,
    ) -> Result<UpsertComplexMarketDataResponse, ApiError> {
        self._post::<_, Empty, _>(&format!("/complexmarketdata/{}", scope), None, items)
            .await
    }

    async fn create_corporate_action_source(
        &self,
        request: &CreateCorporateActionSourceRequest,
    ) -> Result<CorporateActionSource, ApiError> {
        self._post::<_, Empty, _>("/corporateactionsources", None, request)
            .await
    }

    async fn list_corporate_action_sources(&self) -> Result<Vec<CorporateActionSource>, ApiError> {
        let list: ResourceListOf<CorporateActionSource> =
            self._get::<_, Empty>("/corporateactionsources", None).await?;
        Ok(list.values)
    }

    async fn delete_corporate_action_source(&self, source: &ResourceId) -> Result<(), ApiError> {
        self._delete(&source_path(source)).await
    }

    async fn batch_upsert_corporate_actions(
        &self,
        source: &ResourceId,
        actions: &[UpsertCorporateActionRequest],
    ) -> Result<UpsertCorporateActionsResponse, ApiError> {
        let path = format!("{}/corporateactions", source_path(source));
        self._post::<_, Empty, _>(&path, None, actions).await
    }

    async fn get_corporate_actions(
        &self,
        source: &ResourceId,
    ) -> Result<Vec<CorporateAction>, ApiError> {
        let path = format!("{}/corporateactions", source_path(source));
        let list: ResourceListOf<CorporateAction> = self._get::<_, Empty>(&path, None).await?;
        Ok(list.values)
    }

    async fn upsert_recipe(
        &self,
        recipe: &ConfigurationRecipe,
    ) -> Result<UpsertRecipeResponse, ApiError> {
        let body = UpsertRecipeBody {
            configuration_recipe: recipe,
        };
        self._post::<_, Empty, _>("/recipes", None, &body).await
    }

    async fn delete_recipe(&self, recipe: &ResourceId) -> Result<(), ApiError> {
        self._delete(&format!("/recipes/{}/{}", recipe.scope, recipe.code))
            .await
    }

    async fn get_valuation(
        &self,
        request: &ValuationRequest,
    ) -> Result<ListAggregationResponse, ApiError> {
        self._post::<_, Empty, _>("/aggregation/$valuation", None, request)
            .await
    }

    async fn get_valuation_inlined(
        &self,
        request: &InlineValuationRequest,
    ) -> Result<ListAggregationResponse, ApiError> {
        self._post::<_, Empty, _>("/aggregation/$valuationinlined", None, request)
            .await
    }

    async fn create_property_definition(
        &self,
        request: &PropertyDefinitionRequest,
    ) -> Result<PropertyDefinition, ApiError> {
        self._post::<_, Empty, _>("/propertydefinitions", None, request)
            .await
    }

    async fn delete_property_definition(
        &self,
        domain: PropertyDomain,
        scope: &str,
        code: &str,
    ) -> Result<(), ApiError> {
        self._delete(&format!("/propertydefinitions/{}/{}/{}", domain.as_str(), scope, code))
            .await
    }
}
