use serde::{Deserialize, Serialize};

use crate::core::{AttributeDescriptor, Entity, PositionScale, QuantileClassifier};
use crate::error::{ChoroplethError, ChoroplethResult};

/// Scales derived from one attribute's value distribution.
///
/// Recomputed from scratch on every attribute switch; a pure, deterministic
/// function of the entity set and the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub color: QuantileClassifier,
    pub position: PositionScale,
}

/// Derives the color classifier and position scale for `descriptor` across
/// `entities`.
///
/// Missing values are excluded from the sample. An all-missing attribute
/// yields `EmptyDistribution`; callers that must not fail (the sync engine)
/// recover by emitting the designated no-data classification instead.
pub fn derive_scales(
    entities: &[Entity],
    descriptor: &AttributeDescriptor,
    class_count: usize,
    pixel_extent: f64,
) -> ChoroplethResult<ScaleSet> {
    let samples: Vec<f64> = entities
        .iter()
        .filter_map(|entity| entity.value(&descriptor.id).as_f64())
        .collect();
    if samples.is_empty() {
        return Err(ChoroplethError::EmptyDistribution {
            attribute: descriptor.id.clone(),
        });
    }

    let color = QuantileClassifier::from_samples(&samples, class_count)?;

    let sample_max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let domain_max = descriptor.domain_max.unwrap_or(sample_max);
    let position = PositionScale::new(domain_max.max(0.0), pixel_extent)?;

    Ok(ScaleSet { color, position })
}
