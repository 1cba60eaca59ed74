use serde::{Deserialize, Serialize};

use crate::core::ChartFrame;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load view setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncEngineConfig {
    pub frame: ChartFrame,
    #[serde(default = "default_color_class_count")]
    pub color_class_count: usize,
    #[serde(default = "default_axis_tick_count")]
    pub axis_tick_count: usize,
}

impl Default for SyncEngineConfig {
    fn default() -> Self {
        Self {
            frame: ChartFrame::default(),
            color_class_count: default_color_class_count(),
            axis_tick_count: default_axis_tick_count(),
        }
    }
}

impl SyncEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frame(mut self, frame: ChartFrame) -> Self {
        self.frame = frame;
        self
    }

    #[must_use]
    pub fn with_color_class_count(mut self, color_class_count: usize) -> Self {
        self.color_class_count = color_class_count;
        self
    }

    #[must_use]
    pub fn with_axis_tick_count(mut self, axis_tick_count: usize) -> Self {
        self.axis_tick_count = axis_tick_count;
        self
    }
}

fn default_color_class_count() -> usize {
    5
}

fn default_axis_tick_count() -> usize {
    10
}
