use serde::{Deserialize, Serialize};

/// Shared selection state for both linked views: the attribute being
/// visualized plus the transiently hovered entity.
///
/// One instance is owned by the sync engine; all reads and writes go through
/// it. Validation that `active_attribute` is a registered id happens at the
/// engine's command boundary, so the stored value is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    active_attribute: String,
    highlighted_key: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new(active_attribute: String) -> Self {
        Self {
            active_attribute,
            highlighted_key: None,
        }
    }

    #[must_use]
    pub fn active_attribute(&self) -> &str {
        &self.active_attribute
    }

    #[must_use]
    pub fn highlighted_key(&self) -> Option<&str> {
        self.highlighted_key.as_deref()
    }

    pub(crate) fn set_active_attribute(&mut self, attribute_id: String) {
        self.active_attribute = attribute_id;
    }

    /// Records a hover-enter, returning the key it displaced (if any and
    /// different from the new one).
    pub(crate) fn hover_enter(&mut self, key: String) -> Option<String> {
        let previous = self.highlighted_key.take();
        let displaced = previous.filter(|prev| *prev != key);
        self.highlighted_key = Some(key);
        displaced
    }

    /// Clears the highlight when `key` is the currently hovered entity.
    ///
    /// Returns whether anything was cleared; a leave for a stale key is a
    /// no-op.
    pub(crate) fn hover_leave(&mut self, key: &str) -> bool {
        if self.highlighted_key.as_deref() == Some(key) {
            self.highlighted_key = None;
            true
        } else {
            false
        }
    }
}
