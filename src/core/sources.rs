use tracing::debug;

use crate::core::{GeometryFeature, TabularRecord};
use crate::error::ChoroplethResult;

/// The three decoded inputs the pipeline needs before it may run once:
/// tabular rows, joinable regional boundaries, and a coarse background
/// boundary set carried through for visual context only.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBundle {
    pub tabular: Vec<TabularRecord>,
    pub regions: Vec<GeometryFeature>,
    pub background: serde_json::Value,
}

impl SourceBundle {
    /// Gathers the three load results into one bundle.
    ///
    /// Partial availability is not a valid starting state: if any source
    /// failed, the whole initialization fails and the first error is
    /// surfaced.
    pub fn gather(
        tabular: ChoroplethResult<Vec<TabularRecord>>,
        regions: ChoroplethResult<Vec<GeometryFeature>>,
        background: ChoroplethResult<serde_json::Value>,
    ) -> ChoroplethResult<Self> {
        let tabular = tabular?;
        let regions = regions?;
        let background = background?;
        debug!(
            tabular_rows = tabular.len(),
            region_features = regions.len(),
            "all data sources available"
        );
        Ok(Self {
            tabular,
            regions,
            background,
        })
    }
}
