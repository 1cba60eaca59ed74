use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, ChoroplethResult};

/// Classification result for one entity under the active attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorClass {
    /// Quantile class index, `0` being the lowest bucket.
    Class(usize),
    /// Designated "no data" styling; never class 0.
    NoData,
}

impl ColorClass {
    #[must_use]
    pub fn is_no_data(self) -> bool {
        matches!(self, ColorClass::NoData)
    }
}

/// Pixel rectangle for one chart bar, measured from the chart origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    fn validate(self) -> ChoroplethResult<()> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(ChoroplethError::InvalidData(
                "bar geometry must be finite with non-negative size".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Derived visual state for one entity, consumed identically by the map
/// (fill class) and the chart (bar + label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityVisual {
    pub key: String,
    pub color_class: ColorClass,
    pub bar: BarGeometry,
    pub label_text: String,
}

/// Vertical axis description for the chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisEmission {
    pub ticks: Vec<f64>,
    pub domain: (f64, f64),
}

/// Complete derived visual state for both views after a recompute.
///
/// Entities are ordered by bar position (attribute value descending, missing
/// last); every emission fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEmission {
    pub entities: Vec<EntityVisual>,
    pub axis: AxisEmission,
    pub title: String,
}

impl ViewEmission {
    /// Looks up one entity's visual state by key.
    #[must_use]
    pub fn visual(&self, key: &str) -> Option<&EntityVisual> {
        self.entities.iter().find(|visual| visual.key == key)
    }

    pub fn validate(&self) -> ChoroplethResult<()> {
        for visual in &self.entities {
            visual.bar.validate()?;
        }
        if !self.axis.domain.0.is_finite() || !self.axis.domain.1.is_finite() {
            return Err(ChoroplethError::InvalidData(
                "axis domain must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Presentation-only highlight change for one entity; carries no data
/// recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightDelta {
    pub key: String,
    pub highlighted: bool,
}
