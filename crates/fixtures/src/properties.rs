use core_types::{DataTypeId, PropertyDefinitionRequest, PropertyDomain};

/// An optional, perpetual string property, e.g. an instrument sector.
pub fn string_property(
    domain: PropertyDomain,
    scope: &str,
    code: &str,
    display_name: &str,
) -> PropertyDefinitionRequest {
    PropertyDefinitionRequest {
        domain,
        scope: scope.to_string(),
        code: code.to_string(),
        value_required: false,
        display_name: display_name.to_string(),
        data_type_id: DataTypeId::new("system", "string"),
        life_time: "Perpetual".to_string(),
    }
}
