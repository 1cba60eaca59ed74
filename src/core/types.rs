use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, ChoroplethResult};

/// One decoded polygon feature: a property bag plus an opaque geometry
/// payload the core carries through untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryFeature {
    pub properties: IndexMap<String, String>,
    pub geometry: serde_json::Value,
}

impl GeometryFeature {
    #[must_use]
    pub fn new(properties: IndexMap<String, String>, geometry: serde_json::Value) -> Self {
        Self {
            properties,
            geometry,
        }
    }
}

/// One decoded tabular row with string-typed fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TabularRecord {
    fields: IndexMap<String, String>,
}

impl TabularRecord {
    #[must_use]
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Per-entity attribute lookup result.
///
/// `Missing` is a first-class outcome distinguishing "no data" from a
/// recorded zero; it is never coerced downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Present(f64),
    Missing,
}

impl AttributeValue {
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            AttributeValue::Present(value) => Some(value),
            AttributeValue::Missing => None,
        }
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, AttributeValue::Missing)
    }
}

/// A joined geometry+attribute record representing one region.
///
/// Created once by the join; attribute values are attached then and never
/// change afterward. Only present values are stored, so an empty map means
/// the feature matched no tabular record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub key: String,
    pub geometry: serde_json::Value,
    attributes: IndexMap<String, f64>,
}

impl Entity {
    #[must_use]
    pub fn new(key: String, geometry: serde_json::Value) -> Self {
        Self {
            key,
            geometry,
            attributes: IndexMap::new(),
        }
    }

    pub(crate) fn attach(&mut self, attribute_id: &str, value: f64) {
        self.attributes.insert(attribute_id.to_owned(), value);
    }

    #[must_use]
    pub fn value(&self, attribute_id: &str) -> AttributeValue {
        match self.attributes.get(attribute_id) {
            Some(value) => AttributeValue::Present(*value),
            None => AttributeValue::Missing,
        }
    }

    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

/// Bar chart frame dimensions with inner plot paddings.
///
/// Defaults mirror the reference layout: a 473px tall frame with a 40px
/// axis gutter on the left and 5px top/bottom padding, leaving a 463px
/// vertical axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub left_padding: f64,
    pub right_padding: f64,
    pub top_bottom_padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 473.0,
            left_padding: 40.0,
            right_padding: 2.0,
            top_bottom_padding: 5.0,
        }
    }
}

impl ChartFrame {
    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.left_padding - self.right_padding
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - self.top_bottom_padding * 2.0
    }

    /// Pixel extent of the vertical axis, shared by bars and axis ticks.
    #[must_use]
    pub fn axis_extent(self) -> f64 {
        self.inner_height()
    }

    pub fn validate(self) -> ChoroplethResult<()> {
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.left_padding.is_finite()
            && self.right_padding.is_finite()
            && self.top_bottom_padding.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChoroplethError::InvalidFrame {
                width: self.width,
                height: self.height,
            });
        }
        if self.left_padding < 0.0 || self.right_padding < 0.0 || self.top_bottom_padding < 0.0 {
            return Err(ChoroplethError::InvalidData(
                "chart frame paddings must be >= 0".to_owned(),
            ));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ChoroplethError::InvalidFrame {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
