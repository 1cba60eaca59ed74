use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::core::{
    AttributeRegistry, AttributeValue, ChartFrame, Entity, PositionScale, QuantileClassifier,
    ScaleSet, derive_scales,
};
use crate::error::{ChoroplethError, ChoroplethResult};
use crate::interaction::SelectionState;
use crate::render::{
    AxisEmission, BarGeometry, ColorClass, EntityVisual, HighlightDelta, Renderer, ViewEmission,
};

use super::SyncEngineConfig;

/// Keeps the map and chart views consistent with one shared selection state.
///
/// The engine owns the joined entity set, the selection state, and the
/// renderer; every attribute switch recomputes scales from scratch and emits
/// a complete replacement of derived visual state for both views. Hover only
/// produces highlight deltas and never touches the scales.
#[derive(Debug)]
pub struct SyncEngine<R: Renderer> {
    renderer: R,
    registry: AttributeRegistry,
    entities: Vec<Entity>,
    config: SyncEngineConfig,
    selection: SelectionState,
    emission: ViewEmission,
}

impl<R: Renderer> SyncEngine<R> {
    /// Builds the engine and runs the first full recompute.
    ///
    /// The initial active attribute is the first registered descriptor.
    pub fn new(
        renderer: R,
        registry: AttributeRegistry,
        entities: Vec<Entity>,
        config: SyncEngineConfig,
    ) -> ChoroplethResult<Self> {
        config.frame.validate()?;
        let initial = registry
            .first()
            .map(|descriptor| descriptor.id.clone())
            .ok_or_else(|| {
                ChoroplethError::InvalidData("attribute registry is empty".to_owned())
            })?;

        let mut engine = Self {
            renderer,
            registry,
            entities,
            config,
            selection: SelectionState::new(initial),
            emission: ViewEmission {
                entities: Vec::new(),
                axis: AxisEmission {
                    ticks: Vec::new(),
                    domain: (0.0, 0.0),
                },
                title: String::new(),
            },
        };
        engine.recompute()?;
        engine.renderer.render(&engine.emission)?;
        Ok(engine)
    }

    /// Switches the visualized attribute and emits the rebuilt view state.
    ///
    /// An unregistered id is rejected at this boundary and the prior
    /// selection and emission stay untouched. Re-selection is idempotent;
    /// each call fully supersedes the previous emission.
    pub fn select_attribute(&mut self, attribute_id: &str) -> ChoroplethResult<&ViewEmission> {
        if !self.registry.contains(attribute_id) {
            warn!(attribute_id, "rejecting unknown attribute selection");
            return Err(ChoroplethError::UnknownAttribute {
                id: attribute_id.to_owned(),
            });
        }

        self.selection.set_active_attribute(attribute_id.to_owned());
        debug!(attribute_id, "attribute selected; recomputing scales");
        self.recompute()?;
        self.renderer.render(&self.emission)?;
        Ok(&self.emission)
    }

    /// Signals hover onto an entity, returning the highlight deltas applied.
    ///
    /// Purely presentational: the stored emission and scales are untouched.
    /// Entering the already-highlighted entity yields no deltas.
    pub fn hover_enter(&mut self, key: &str) -> ChoroplethResult<Vec<HighlightDelta>> {
        if self.selection.highlighted_key() == Some(key) {
            return Ok(Vec::new());
        }

        let mut deltas = Vec::with_capacity(2);
        if let Some(displaced) = self.selection.hover_enter(key.to_owned()) {
            deltas.push(HighlightDelta {
                key: displaced,
                highlighted: false,
            });
        }
        deltas.push(HighlightDelta {
            key: key.to_owned(),
            highlighted: true,
        });

        for delta in &deltas {
            self.renderer.apply_highlight(delta)?;
        }
        Ok(deltas)
    }

    /// Signals hover leaving an entity. A leave for a key that is not the
    /// current highlight is a no-op.
    pub fn hover_leave(&mut self, key: &str) -> ChoroplethResult<Vec<HighlightDelta>> {
        if !self.selection.hover_leave(key) {
            return Ok(Vec::new());
        }

        let delta = HighlightDelta {
            key: key.to_owned(),
            highlighted: false,
        };
        self.renderer.apply_highlight(&delta)?;
        Ok(vec![delta])
    }

    #[must_use]
    pub fn emission(&self) -> &ViewEmission {
        &self.emission
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn config(&self) -> SyncEngineConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Rebuilds the whole emission for the active attribute.
    ///
    /// An all-missing distribution is recoverable: every entity receives the
    /// no-data class, bars collapse to the baseline, and the axis falls back
    /// to the static bound when one is configured, else a zero-width domain.
    fn recompute(&mut self) -> ChoroplethResult<()> {
        let descriptor = self
            .registry
            .resolve(self.selection.active_attribute())?
            .clone();
        let frame = self.config.frame;
        let extent = frame.axis_extent();

        let (classifier, position) = match derive_scales(
            &self.entities,
            &descriptor,
            self.config.color_class_count,
            extent,
        ) {
            Ok(ScaleSet { color, position }) => (Some(color), position),
            Err(ChoroplethError::EmptyDistribution { attribute }) => {
                warn!(attribute = %attribute, "no numeric values; emitting no-data view");
                let fallback_max = descriptor.domain_max.unwrap_or(0.0).max(0.0);
                (None, PositionScale::new(fallback_max, extent)?)
            }
            Err(err) => return Err(err),
        };

        let order = bar_order(&self.entities, &descriptor.id);
        let entity_count = self.entities.len();
        let slot_width = if entity_count == 0 {
            0.0
        } else {
            frame.inner_width() / entity_count as f64
        };
        let bar_width = (slot_width - 1.0).max(0.0);

        let mut visuals = Vec::with_capacity(entity_count);
        for (rank, index) in order.into_iter().enumerate() {
            let entity = &self.entities[index];
            let value = entity.value(&descriptor.id);
            visuals.push(entity_visual(
                entity,
                value,
                classifier.as_ref(),
                position,
                frame,
                rank,
                slot_width,
                bar_width,
            )?);
        }

        self.emission = ViewEmission {
            entities: visuals,
            axis: AxisEmission {
                ticks: position.ticks(self.config.axis_tick_count),
                domain: position.domain(),
            },
            title: format!("{} in each state", descriptor.display_name),
        };
        Ok(())
    }
}

/// Entity indices in bar order: attribute value descending, missing last,
/// ties broken by original entity order (the sort is stable).
fn bar_order(entities: &[Entity], attribute_id: &str) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entities.len()).collect();
    order.sort_by(|&lhs, &rhs| {
        let lhs_value = entities[lhs].value(attribute_id).as_f64().map(OrderedFloat);
        let rhs_value = entities[rhs].value(attribute_id).as_f64().map(OrderedFloat);
        match (lhs_value, rhs_value) {
            (Some(lhs_value), Some(rhs_value)) => rhs_value.cmp(&lhs_value),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    order
}

#[allow(clippy::too_many_arguments)]
fn entity_visual(
    entity: &Entity,
    value: AttributeValue,
    classifier: Option<&QuantileClassifier>,
    position: PositionScale,
    frame: ChartFrame,
    rank: usize,
    slot_width: f64,
    bar_width: f64,
) -> ChoroplethResult<EntityVisual> {
    let x = rank as f64 * slot_width + frame.left_padding;

    let (color_class, top, height, label_text) = match (value, classifier) {
        (AttributeValue::Present(raw), Some(classifier)) => (
            ColorClass::Class(classifier.classify(raw)),
            position.position(raw)?,
            position.bar_height(raw)?,
            format_label(raw),
        ),
        // Recovered empty distribution: present values still draw a bar but
        // carry the no-data class.
        (AttributeValue::Present(raw), None) => (
            ColorClass::NoData,
            position.position(raw)?,
            position.bar_height(raw)?,
            format_label(raw),
        ),
        (AttributeValue::Missing, _) => (
            ColorClass::NoData,
            position.extent(),
            0.0,
            "no data".to_owned(),
        ),
    };

    Ok(EntityVisual {
        key: entity.key.clone(),
        color_class,
        bar: BarGeometry {
            x,
            y: top + frame.top_bottom_padding,
            width: bar_width,
            height,
        },
        label_text,
    })
}

fn format_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
