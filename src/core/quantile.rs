use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, ChoroplethResult};

/// Equal-frequency classifier mapping values to ordered color classes.
///
/// Breakpoints are interpolated quantiles of the sample (the R-7 convention
/// used by d3's `scaleQuantile`). A value tied with a breakpoint classifies
/// into the lower bucket; the top bucket is closed so the sample maximum
/// lands in class `class_count - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileClassifier {
    breaks: Vec<f64>,
    class_count: usize,
}

impl QuantileClassifier {
    pub fn from_samples(samples: &[f64], class_count: usize) -> ChoroplethResult<Self> {
        if class_count == 0 {
            return Err(ChoroplethError::InvalidData(
                "quantile classifier needs at least one class".to_owned(),
            ));
        }
        if samples.is_empty() {
            return Err(ChoroplethError::InvalidData(
                "quantile classifier cannot be built from an empty sample".to_owned(),
            ));
        }
        if samples.iter().any(|value| !value.is_finite()) {
            return Err(ChoroplethError::InvalidData(
                "quantile classifier samples must be finite".to_owned(),
            ));
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|lhs, rhs| lhs.total_cmp(rhs));

        let mut breaks = Vec::with_capacity(class_count.saturating_sub(1));
        for index in 1..class_count {
            let probability = (index as f64) / (class_count as f64);
            breaks.push(interpolated_quantile(&sorted, probability));
        }

        Ok(Self {
            breaks,
            class_count,
        })
    }

    /// Maps a value to its class index in `0..class_count`.
    #[must_use]
    pub fn classify(&self, value: f64) -> usize {
        self.breaks.iter().filter(|brk| value > **brk).count()
    }

    /// Quantile breakpoints between adjacent classes, for legend rendering.
    #[must_use]
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.class_count
    }
}

/// Linear-interpolated quantile of an already sorted, non-empty sample.
fn interpolated_quantile(sorted: &[f64], probability: f64) -> f64 {
    let last_index = sorted.len() - 1;
    let position = (last_index as f64) * probability;
    let lower = position.floor() as usize;
    let fraction = position - position.floor();
    if lower >= last_index {
        return sorted[last_index];
    }
    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}
