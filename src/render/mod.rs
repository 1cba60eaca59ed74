mod frame;
mod null_renderer;

pub use frame::{AxisEmission, BarGeometry, ColorClass, EntityVisual, HighlightDelta, ViewEmission};
pub use null_renderer::NullRenderer;

use crate::error::ChoroplethResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully materialized, deterministic emissions so drawing
/// code remains isolated from join, scale, and selection logic. Highlight
/// deltas arrive separately because hover never triggers a data recompute.
pub trait Renderer {
    fn render(&mut self, emission: &ViewEmission) -> ChoroplethResult<()>;

    fn apply_highlight(&mut self, delta: &HighlightDelta) -> ChoroplethResult<()>;
}
