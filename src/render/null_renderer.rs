use crate::error::ChoroplethResult;
use crate::render::{HighlightDelta, Renderer, ViewEmission};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates emissions so tests can catch invalid geometry before a
/// real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_entity_count: usize,
    pub highlight_deltas_seen: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, emission: &ViewEmission) -> ChoroplethResult<()> {
        emission.validate()?;
        self.last_entity_count = emission.entities.len();
        Ok(())
    }

    fn apply_highlight(&mut self, _delta: &HighlightDelta) -> ChoroplethResult<()> {
        self.highlight_deltas_seen += 1;
        Ok(())
    }
}
