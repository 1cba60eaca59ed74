use choropleth_rs::core::{
    AttributeDescriptor, AttributeRegistry, GeometryFeature, SourceBundle, TabularRecord,
};
use choropleth_rs::error::ChoroplethError;
use indexmap::IndexMap;
use serde_json::json;

#[test]
fn display_name_replaces_separators_with_spaces() {
    let descriptor = AttributeDescriptor::new("thunderstorm_wind_count");

    assert_eq!(descriptor.display_name, "thunderstorm wind count");
    assert_eq!(descriptor.domain_max, None);
}

#[test]
fn registry_preserves_registration_order() {
    let mut registry = AttributeRegistry::new();
    registry.register(AttributeDescriptor::new("hail_count"));
    registry.register(AttributeDescriptor::new("flood_count"));
    registry.register(AttributeDescriptor::new("dust_devil_count"));

    let ids: Vec<_> = registry.ids().collect();
    assert_eq!(ids, vec!["hail_count", "flood_count", "dust_devil_count"]);
    assert_eq!(registry.first().expect("non-empty").id, "hail_count");
}

#[test]
fn severe_weather_registry_carries_static_bounds() {
    let registry = AttributeRegistry::severe_weather();

    assert_eq!(registry.len(), 6);
    assert_eq!(
        registry.first().expect("non-empty").id,
        "dust_devil_count"
    );
    assert_eq!(
        registry.get("hail_count").expect("registered").domain_max,
        Some(9_961.0)
    );
    assert_eq!(
        registry
            .get("thunderstorm_wind_count")
            .expect("registered")
            .domain_max,
        Some(17_885.0)
    );
}

#[test]
fn resolve_rejects_unregistered_ids() {
    let registry = AttributeRegistry::severe_weather();

    let err = registry.resolve("tornado_count").expect_err("unknown id");
    assert!(matches!(err, ChoroplethError::UnknownAttribute { .. }));
}

#[test]
fn source_bundle_requires_all_three_sources() {
    let tabular = vec![TabularRecord::new(IndexMap::new())];
    let regions = vec![GeometryFeature::new(IndexMap::new(), json!(null))];

    let bundle = SourceBundle::gather(
        Ok(tabular.clone()),
        Ok(regions.clone()),
        Ok(json!({ "type": "Topology" })),
    )
    .expect("all sources available");
    assert_eq!(bundle.tabular.len(), 1);
    assert_eq!(bundle.regions.len(), 1);

    let failed = SourceBundle::gather(
        Ok(tabular),
        Err(ChoroplethError::InvalidData(
            "regional boundaries unavailable".to_owned(),
        )),
        Ok(json!(null)),
    );
    assert!(failed.is_err());
}
