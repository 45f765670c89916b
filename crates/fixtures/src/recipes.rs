use core_types::recipes::{MarketOptions, ModelSelection, PricingOptions};
use core_types::{
    ConfigurationRecipe, DependencySourceFilter, MarketContext, MarketDataKeyRule,
    MarketDataSpecificRule, PricingContext, QuoteType, VendorModelRule,
};

/// Supplier name for market data the tutorials upload themselves.
pub const SUPPLIER: &str = "Lusid";

/// Matches the quote of any instrument looked up by client-internal code.
pub const CLIENT_INTERNAL_QUOTES: &str = "Quote.ClientInternal.*";

/// Reads `mid` prices for instruments matching `key` from `data_scope`.
pub fn quote_rule(key: &str, data_scope: &str) -> MarketDataKeyRule {
    MarketDataKeyRule {
        key: key.to_string(),
        supplier: SUPPLIER.to_string(),
        data_scope: data_scope.to_string(),
        quote_type: QuoteType::Price,
        field: "mid".to_string(),
        quote_interval: Some("1D.0D".to_string()),
        price_source: None,
    }
}

/// Like [`quote_rule`], but only for dependencies of instruments denominated
/// in `dom_ccy`.
pub fn specific_rule_for_currency(
    key: &str,
    data_scope: &str,
    dom_ccy: &str,
) -> MarketDataSpecificRule {
    let rule = quote_rule(key, data_scope);
    MarketDataSpecificRule {
        key: rule.key,
        supplier: rule.supplier,
        data_scope: rule.data_scope,
        quote_type: rule.quote_type,
        field: rule.field,
        quote_interval: rule.quote_interval,
        price_source: rule.price_source,
        dependency_source_filter: DependencySourceFilter {
            dom_ccy: Some(dom_ccy.to_string()),
            ..DependencySourceFilter::default()
        },
    }
}

/// Prices equity options at intrinsic value.
pub fn intrinsic_option_model() -> VendorModelRule {
    VendorModelRule {
        supplier: SUPPLIER.to_string(),
        model_name: "Intrinsic".to_string(),
        instrument_type: "EquityOption".to_string(),
        parameters: "{}".to_string(),
    }
}

/// Falls back to plain price-times-units for anything without a model rule.
fn simple_static_pricing() -> PricingOptions {
    PricingOptions {
        model_selection: ModelSelection {
            library: SUPPLIER.to_string(),
            model: "SimpleStatic".to_string(),
        },
        use_instrument_type_to_determine_pricer: true,
    }
}

/// A recipe over the given market rules and model rules.
///
/// Market data not covered by a rule defaults to client-internal quotes in
/// `default_scope`.
pub fn recipe(
    scope: &str,
    code: &str,
    default_scope: &str,
    market_rules: Vec<MarketDataKeyRule>,
    specific_rules: Vec<MarketDataSpecificRule>,
    model_rules: Vec<VendorModelRule>,
) -> ConfigurationRecipe {
    ConfigurationRecipe {
        scope: scope.to_string(),
        code: code.to_string(),
        market: MarketContext {
            market_rules,
            specific_rules,
            options: Some(MarketOptions {
                default_supplier: SUPPLIER.to_string(),
                default_instrument_code_type: "ClientInternal".to_string(),
                default_scope: default_scope.to_string(),
            }),
        },
        pricing: PricingContext {
            model_rules,
            options: Some(simple_static_pricing()),
        },
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specific_rule_filters_on_currency_only() {
        let rule = specific_rule_for_currency(CLIENT_INTERNAL_QUOTES, "override", "USD");
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["dependencySourceFilter"], json!({ "domCcy": "USD" }));
        assert_eq!(value["dataScope"], "override");
        assert_eq!(value["quoteType"], "Price");
    }

    #[test]
    fn recipe_without_specific_rules_omits_them() {
        let r = recipe(
            "s",
            "generic",
            "s",
            vec![quote_rule(CLIENT_INTERNAL_QUOTES, "s")],
            vec![],
            vec![intrinsic_option_model()],
        );
        let value = serde_json::to_value(&r).unwrap();
        assert!(value["market"].get("specificRules").is_none());
        assert_eq!(value["pricing"]["modelRules"][0]["modelName"], "Intrinsic");
        assert_eq!(value["market"]["options"]["defaultScope"], "s");
    }

    #[test]
    fn recipe_is_deterministic() {
        let build = || {
            recipe(
                "s",
                "c",
                "s",
                vec![quote_rule(CLIENT_INTERNAL_QUOTES, "s")],
                vec![specific_rule_for_currency(CLIENT_INTERNAL_QUOTES, "o", "USD")],
                vec![intrinsic_option_model()],
            )
        };
        assert_eq!(build(), build());
    }
}
