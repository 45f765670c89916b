//! # Core Types
//!
//! Request and response records for every platform resource the tutorials
//! touch: instruments, portfolios, transactions, holdings, quotes, complex
//! market data, corporate actions, recipes, valuations and property
//! definitions.
//!
//! These types hold no invariants of their own. They are shaped after the
//! platform's JSON contract (camelCase field names) and are constructed in
//! memory, serialized, sent, and discarded.

pub mod corporate_actions;
pub mod enums;
pub mod error;
pub mod holdings;
pub mod identifiers;
pub mod instruments;
pub mod market_data;
pub mod portfolios;
pub mod properties;
pub mod quotes;
pub mod recipes;
pub mod transactions;
pub mod valuation;

// Re-export the core types to provide a clean public API.
pub use corporate_actions::{
    CorporateAction, CorporateActionSource, CorporateActionTransition,
    CorporateActionTransitionComponent, CreateCorporateActionSourceRequest,
    UpsertCorporateActionRequest,
};
pub use enums::{AggregationOp, HoldingType, PortfolioEntityType, PropertyDomain, QuoteType};
pub use error::CoreError;
pub use holdings::{AdjustHoldingRequest, CashFlow, PortfolioHolding, TargetTaxLot};
pub use identifiers::{InstrumentIdValue, ResourceId, identifier_types};
pub use instruments::{IdentifierScheme, Instrument, InstrumentDefinition, InstrumentEconomics};
pub use market_data::{ComplexMarketData, ComplexMarketDataId, UpsertComplexMarketDataRequest};
pub use portfolios::{CreateTransactionPortfolioRequest, Portfolio};
pub use properties::{
    DataTypeId, PerpetualProperty, PropertyDefinition, PropertyDefinitionRequest, PropertyValue,
};
pub use quotes::{MetricValue, Quote, QuoteId, QuoteSeriesId, UpsertQuoteRequest};
pub use recipes::{
    ConfigurationRecipe, DependencySourceFilter, MarketContext, MarketDataKeyRule,
    MarketDataSpecificRule, PricingContext, VendorModelRule,
};
pub use transactions::{CurrencyAmount, TransactionPrice, TransactionRequest};
pub use valuation::{
    AggregateSpec, InlineValuationRequest, PortfolioEntityId, ValuationRequest,
    ValuationRow, ValuationSchedule, WeightedInstrument,
};
