use choropleth_rs::api::{SyncEngine, SyncEngineConfig};
use choropleth_rs::core::{
    AttributeDescriptor, AttributeRegistry, ChartFrame, Entity, GeometryFeature, TabularRecord,
    join_data,
};
use choropleth_rs::error::ChoroplethError;
use choropleth_rs::render::{ColorClass, NullRenderer, ViewEmission};
use indexmap::IndexMap;
use serde_json::json;

const ATTRS: &[&str] = &["hail_count", "flood_count"];

fn entities(rows: &[(&str, &str, &str)]) -> Vec<Entity> {
    let mut features = Vec::new();
    let mut records = Vec::new();
    for (key, hail, flood) in rows {
        let mut properties = IndexMap::new();
        properties.insert("STATE_NAME".to_owned(), (*key).to_owned());
        features.push(GeometryFeature::new(properties, json!(null)));

        let mut fields = IndexMap::new();
        fields.insert("STATE_NAME".to_owned(), (*key).to_owned());
        fields.insert("hail_count".to_owned(), (*hail).to_owned());
        fields.insert("flood_count".to_owned(), (*flood).to_owned());
        records.push(TabularRecord::new(fields));
    }
    join_data(&features, &records, "STATE_NAME", "STATE_NAME", ATTRS).expect("join succeeds")
}

fn registry() -> AttributeRegistry {
    let mut registry = AttributeRegistry::new();
    registry.register(AttributeDescriptor::new("hail_count").with_domain_max(100.0));
    registry.register(AttributeDescriptor::new("flood_count").with_domain_max(50.0));
    registry
}

fn engine(rows: &[(&str, &str, &str)]) -> SyncEngine<NullRenderer> {
    SyncEngine::new(
        NullRenderer::default(),
        registry(),
        entities(rows),
        SyncEngineConfig::new().with_color_class_count(2),
    )
    .expect("engine init")
}

fn bar_keys(emission: &ViewEmission) -> Vec<&str> {
    emission
        .entities
        .iter()
        .map(|visual| visual.key.as_str())
        .collect()
}

#[test]
fn initial_emission_uses_first_registered_attribute() {
    let engine = engine(&[("A", "10", "1"), ("B", "20", "2")]);

    assert_eq!(engine.selection().active_attribute(), "hail_count");
    assert_eq!(engine.emission().title, "hail count in each state");
    assert_eq!(engine.emission().axis.domain, (0.0, 100.0));
    assert_eq!(engine.renderer().last_entity_count, 2);
}

#[test]
fn end_to_end_scenario_classifies_sorts_and_labels() {
    let engine = engine(&[("A", "10", "1"), ("B", "20", "2"), ("C", "", "3")]);
    let emission = engine.emission();

    // Descending bar order with the missing entity last.
    assert_eq!(bar_keys(emission), vec!["B", "A", "C"]);

    let a = emission.visual("A").expect("A emitted");
    let b = emission.visual("B").expect("B emitted");
    let c = emission.visual("C").expect("C emitted");
    assert_eq!(a.color_class, ColorClass::Class(0));
    assert_eq!(b.color_class, ColorClass::Class(1));
    assert_eq!(c.color_class, ColorClass::NoData);
    assert_eq!(a.label_text, "10");
    assert_eq!(b.label_text, "20");
    assert_eq!(c.label_text, "no data");
    assert_eq!(c.bar.height, 0.0);
}

#[test]
fn same_entity_gets_same_class_in_both_views() {
    // The emission is the single source both views consume; one lookup per
    // key serves map fill and bar fill alike.
    let engine = engine(&[("A", "10", "1"), ("B", "20", "2")]);
    let emission = engine.emission();

    for visual in &emission.entities {
        assert_eq!(
            emission.visual(&visual.key).expect("indexed").color_class,
            visual.color_class
        );
    }
}

#[test]
fn bar_ties_keep_original_entity_order() {
    let engine = engine(&[("A", "10", "1"), ("B", "10", "2"), ("C", "10", "3")]);

    assert_eq!(bar_keys(engine.emission()), vec!["A", "B", "C"]);
}

#[test]
fn select_attribute_rebuilds_every_bar_with_the_new_scale() {
    // Entity A holds the same raw value in both attributes; the bar height
    // must still change because the domain bound differs (100 vs 50).
    let mut engine = engine(&[("A", "10", "10"), ("B", "20", "5")]);

    let hail_height = engine.emission().visual("A").expect("A emitted").bar.height;
    engine
        .select_attribute("flood_count")
        .expect("valid selection");
    let flood_height = engine.emission().visual("A").expect("A emitted").bar.height;

    let extent = ChartFrame::default().axis_extent();
    assert!((hail_height - extent * 10.0 / 100.0).abs() < 1e-9);
    assert!((flood_height - extent * 10.0 / 50.0).abs() < 1e-9);
    assert_eq!(engine.emission().axis.domain, (0.0, 50.0));
    assert_eq!(engine.emission().title, "flood count in each state");
    // Sort order follows the newly expressed attribute.
    assert_eq!(bar_keys(engine.emission()), vec!["A", "B"]);
}

#[test]
fn reselecting_the_same_attribute_is_idempotent() {
    let mut engine = engine(&[("A", "10", "1"), ("B", "20", "2")]);

    let before = engine.emission().clone();
    engine.select_attribute("hail_count").expect("reselect");
    engine.select_attribute("hail_count").expect("reselect");

    assert_eq!(*engine.emission(), before);
}

#[test]
fn unknown_attribute_is_rejected_and_state_retained() {
    let mut engine = engine(&[("A", "10", "1")]);
    let before = engine.emission().clone();

    let err = engine
        .select_attribute("tornado_count")
        .expect_err("unknown attribute");

    assert!(matches!(err, ChoroplethError::UnknownAttribute { .. }));
    assert_eq!(engine.selection().active_attribute(), "hail_count");
    assert_eq!(*engine.emission(), before);
}

#[test]
fn hover_emits_deltas_without_touching_the_emission() {
    let mut engine = engine(&[("A", "10", "1"), ("B", "20", "2")]);
    let before = engine.emission().clone();

    let enter = engine.hover_enter("A").expect("hover enter");
    assert_eq!(enter.len(), 1);
    assert_eq!(enter[0].key, "A");
    assert!(enter[0].highlighted);

    let switch = engine.hover_enter("B").expect("hover switch");
    assert_eq!(switch.len(), 2);
    assert_eq!(switch[0].key, "A");
    assert!(!switch[0].highlighted);
    assert_eq!(switch[1].key, "B");
    assert!(switch[1].highlighted);

    let leave = engine.hover_leave("B").expect("hover leave");
    assert_eq!(leave.len(), 1);
    assert!(!leave[0].highlighted);

    assert_eq!(*engine.emission(), before);
    assert_eq!(engine.renderer().highlight_deltas_seen, 4);
}

#[test]
fn hover_enter_on_highlighted_entity_is_a_no_op() {
    let mut engine = engine(&[("A", "10", "1")]);

    engine.hover_enter("A").expect("hover enter");
    let repeat = engine.hover_enter("A").expect("repeat enter");

    assert!(repeat.is_empty());
    assert_eq!(engine.selection().highlighted_key(), Some("A"));
}

#[test]
fn hover_leave_for_a_stale_key_is_a_no_op() {
    let mut engine = engine(&[("A", "10", "1"), ("B", "20", "2")]);

    engine.hover_enter("A").expect("hover enter");
    let stale = engine.hover_leave("B").expect("stale leave");

    assert!(stale.is_empty());
    assert_eq!(engine.selection().highlighted_key(), Some("A"));
}

#[test]
fn all_missing_attribute_recovers_with_no_data_view() {
    let mut engine = engine(&[("A", "10", ""), ("B", "20", "")]);

    engine
        .select_attribute("flood_count")
        .expect("recoverable selection");
    let emission = engine.emission();

    for visual in &emission.entities {
        assert_eq!(visual.color_class, ColorClass::NoData);
        assert_eq!(visual.bar.height, 0.0);
        assert_eq!(visual.label_text, "no data");
    }
    // Static bound keeps the axis stable even with no samples.
    assert_eq!(emission.axis.domain, (0.0, 50.0));
}

#[test]
fn all_missing_attribute_without_static_bound_zeroes_the_axis() {
    let mut registry = AttributeRegistry::new();
    registry.register(AttributeDescriptor::new("hail_count"));
    registry.register(AttributeDescriptor::new("flood_count"));

    let mut engine = SyncEngine::new(
        NullRenderer::default(),
        registry,
        entities(&[("A", "10", ""), ("B", "20", "")]),
        SyncEngineConfig::new().with_color_class_count(2),
    )
    .expect("engine init");

    engine
        .select_attribute("flood_count")
        .expect("recoverable selection");

    assert_eq!(engine.emission().axis.domain, (0.0, 0.0));
    assert!(engine.emission().axis.ticks.is_empty());
}

#[test]
fn axis_ticks_follow_the_configured_count() {
    let engine = SyncEngine::new(
        NullRenderer::default(),
        registry(),
        entities(&[("A", "10", "1"), ("B", "20", "2")]),
        SyncEngineConfig::new()
            .with_color_class_count(2)
            .with_axis_tick_count(5),
    )
    .expect("engine init");

    let ticks = &engine.emission().axis.ticks;
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[4], 100.0);
}

#[test]
fn bars_tile_the_inner_chart_width() {
    let engine = engine(&[("A", "30", "1"), ("B", "20", "2"), ("C", "10", "3")]);
    let frame = ChartFrame::default();
    let slot = frame.inner_width() / 3.0;

    for (rank, visual) in engine.emission().entities.iter().enumerate() {
        assert!((visual.bar.x - (rank as f64 * slot + frame.left_padding)).abs() < 1e-9);
        assert!((visual.bar.width - (slot - 1.0)).abs() < 1e-9);
    }
}

#[test]
fn emission_survives_a_serde_round_trip() {
    let engine = engine(&[("A", "10", "1"), ("B", "", "2")]);

    let encoded = serde_json::to_string(engine.emission()).expect("serialize emission");
    let decoded: ViewEmission = serde_json::from_str(&encoded).expect("deserialize emission");

    assert_eq!(decoded, *engine.emission());
}

#[test]
fn empty_registry_fails_engine_init() {
    let result = SyncEngine::new(
        NullRenderer::default(),
        AttributeRegistry::new(),
        entities(&[("A", "10", "1")]),
        SyncEngineConfig::new(),
    );

    assert!(result.is_err());
}

#[test]
fn degenerate_chart_frame_fails_engine_init() {
    let frame = ChartFrame {
        width: 10.0,
        height: 473.0,
        left_padding: 40.0,
        right_padding: 2.0,
        top_bottom_padding: 5.0,
    };

    let result = SyncEngine::new(
        NullRenderer::default(),
        registry(),
        entities(&[("A", "10", "1")]),
        SyncEngineConfig::new().with_frame(frame),
    );

    assert!(matches!(
        result,
        Err(ChoroplethError::InvalidFrame { .. })
    ));
}
