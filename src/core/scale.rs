use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, ChoroplethResult};

/// Linear scale from `[0, domain_max]` onto an inverted vertical pixel
/// extent: `0` maps to the baseline (`extent`), `domain_max` maps to `0`.
///
/// Values outside the domain clamp to the nearest endpoint. A zero-width
/// domain (`domain_max == 0`) is allowed as the empty-distribution fallback;
/// it maps every value to the baseline and produces no ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionScale {
    domain_max: f64,
    extent: f64,
}

impl PositionScale {
    pub fn new(domain_max: f64, extent: f64) -> ChoroplethResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChoroplethError::InvalidData(
                "scale domain max must be finite and >= 0".to_owned(),
            ));
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChoroplethError::InvalidData(
                "scale pixel extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { domain_max, extent })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn extent(self) -> f64 {
        self.extent
    }

    /// Maps a domain value to its pixel position measured from the top.
    pub fn position(self, value: f64) -> ChoroplethResult<f64> {
        if !value.is_finite() {
            return Err(ChoroplethError::InvalidData(
                "scaled value must be finite".to_owned(),
            ));
        }
        if self.domain_max == 0.0 {
            return Ok(self.extent);
        }

        let clamped = value.clamp(0.0, self.domain_max);
        Ok(self.extent * (1.0 - clamped / self.domain_max))
    }

    /// Pixel height of a bar spanning from the baseline up to `value`.
    pub fn bar_height(self, value: f64) -> ChoroplethResult<f64> {
        Ok(self.extent - self.position(value)?)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 || self.domain_max == 0.0 {
            return Vec::new();
        }
        if tick_count == 1 {
            return vec![0.0];
        }

        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| self.domain_max * (index as f64) / denominator)
            .collect()
    }
}
