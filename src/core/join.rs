use tracing::debug;

use crate::core::{Entity, GeometryFeature, TabularRecord};
use crate::error::{ChoroplethError, ChoroplethResult, JoinSide};

/// Merges tabular records into geometry features by exact key equality.
///
/// One entity is produced per feature, in feature order. A feature with no
/// matching record stays in the output with an empty attribute map (a valid
/// "no data" outcome); only an absent key field is an error. Record order
/// does not affect which values are attached except when two records carry
/// the same key, in which case the first wins.
pub fn join_data(
    features: &[GeometryFeature],
    records: &[TabularRecord],
    geometry_key_field: &str,
    tabular_key_field: &str,
    attribute_ids: &[&str],
) -> ChoroplethResult<Vec<Entity>> {
    // Schema check up front so a mismatch surfaces before any entity is built.
    for record in records {
        if record.field(tabular_key_field).is_none() {
            return Err(ChoroplethError::MissingKeyField {
                field: tabular_key_field.to_owned(),
                side: JoinSide::Tabular,
            });
        }
    }

    let mut entities = Vec::with_capacity(features.len());
    let mut matched = 0_usize;

    for feature in features {
        let Some(key) = feature.properties.get(geometry_key_field) else {
            return Err(ChoroplethError::MissingKeyField {
                field: geometry_key_field.to_owned(),
                side: JoinSide::Geometry,
            });
        };

        let mut entity = Entity::new(key.clone(), feature.geometry.clone());

        let record = records
            .iter()
            .find(|record| record.field(tabular_key_field) == Some(key.as_str()));
        if let Some(record) = record {
            matched += 1;
            for attribute_id in attribute_ids {
                // Empty or unparseable fields stay missing, never zero.
                let parsed = record
                    .field(attribute_id)
                    .and_then(|raw| raw.parse::<f64>().ok())
                    .filter(|value| value.is_finite());
                if let Some(value) = parsed {
                    entity.attach(attribute_id, value);
                }
            }
        }

        entities.push(entity);
    }

    debug!(
        features = features.len(),
        matched,
        unmatched = features.len() - matched,
        "joined tabular records into geometry features"
    );
    Ok(entities)
}
