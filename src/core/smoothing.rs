//! Turns the demand trace of a single household into that of a neighbourhood.
//!
//! Households in a neighbourhood do not switch their heating on at exactly the same moment. The
//! aggregate demand is modelled as the single household trace shifted in time by a whole number
//! of hours, with the shifts normally distributed around zero. The expected aggregate is then a
//! circular convolution of the trace with the discretised normal distribution; the trace is
//! treated as wrapping around the end of the year.

use crate::core::insulation::InsulationLevel;
use crate::core::units::HOURS_PER_YEAR;
use crate::errors::HeatDemandError;
use serde::Deserialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// Kernel extends this many standard deviations either side of zero.
const KERNEL_SPREAD_IN_STANDARD_DEVIATIONS: f64 = 3.;

/// Largest spread, in hours, for which the kernel still fits within half a year either side.
pub const MAX_STANDARD_DEVIATION: f64 =
    (HOURS_PER_YEAR / 2) as f64 / KERNEL_SPREAD_IN_STANDARD_DEVIATIONS;

/// Standard deviation, in hours, of the time shift between households, per insulation level.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SmoothingSettings {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        // better insulated houses respond more slowly, so their households drift apart further
        Self {
            low: 2.,
            medium: 3.,
            high: 4.,
        }
    }
}

impl SmoothingSettings {
    pub fn for_level(&self, level: InsulationLevel) -> f64 {
        match level {
            InsulationLevel::Low => self.low,
            InsulationLevel::Medium => self.medium,
            InsulationLevel::High => self.high,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingStage {
    /// weights for shifts of `-half_width..=half_width` hours
    weights: Vec<f64>,
    half_width: usize,
}

impl SmoothingStage {
    /// Arguments:
    /// * `level` - insulation level the stage is for
    /// * `standard_deviation` - spread of the household time shifts, in hours, at most
    ///   [`MAX_STANDARD_DEVIATION`]. Zero leaves traces unchanged.
    pub fn new(level: InsulationLevel, standard_deviation: f64) -> Result<Self, HeatDemandError> {
        let invalid = || HeatDemandError::InvalidSmoothing {
            level: level.to_string(),
            spread: standard_deviation,
        };
        if !(0. ..=MAX_STANDARD_DEVIATION).contains(&standard_deviation) {
            return Err(invalid());
        }
        if standard_deviation == 0. {
            return Ok(Self::identity());
        }

        let normal = Normal::new(0., standard_deviation).map_err(|_| invalid())?;
        let half_width = (KERNEL_SPREAD_IN_STANDARD_DEVIATIONS * standard_deviation).ceil() as usize;
        let weights: Vec<f64> = (-(half_width as i64)..=half_width as i64)
            .map(|shift| {
                let shift = shift as f64;
                normal.cdf(shift + 0.5) - normal.cdf(shift - 0.5)
            })
            .collect();
        let total: f64 = weights.iter().sum();

        Ok(Self {
            weights: weights.into_iter().map(|weight| weight / total).collect(),
            half_width,
        })
    }

    fn identity() -> Self {
        Self {
            weights: vec![1.],
            half_width: 0,
        }
    }

    pub fn for_level(
        level: InsulationLevel,
        settings: &SmoothingSettings,
    ) -> Result<Self, HeatDemandError> {
        Self::new(level, settings.for_level(level))
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Smooths a trace; the output has the same length as the input.
    pub fn smooth(&self, trace: &[f64]) -> Vec<f64> {
        let len = trace.len();
        if len == 0 {
            return vec![];
        }

        (0..len)
            .map(|hour| {
                self.weights
                    .iter()
                    .enumerate()
                    .map(|(i, weight)| {
                        // a household shifted by `shift` hours has at `hour` what the trace has
                        // at `hour - shift`
                        let shift = i as i64 - self.half_width as i64;
                        let source = (hour as i64 - shift).rem_euclid(len as i64) as usize;
                        weight * trace[source]
                    })
                    .sum()
            })
            .collect()
    }
}

/// One smoothing stage per insulation level.
#[derive(Clone, Debug)]
pub struct SmoothingStages {
    low: SmoothingStage,
    medium: SmoothingStage,
    high: SmoothingStage,
}

impl SmoothingStages {
    pub fn new(settings: &SmoothingSettings) -> Result<Self, HeatDemandError> {
        Ok(Self {
            low: SmoothingStage::for_level(InsulationLevel::Low, settings)?,
            medium: SmoothingStage::for_level(InsulationLevel::Medium, settings)?,
            high: SmoothingStage::for_level(InsulationLevel::High, settings)?,
        })
    }

    pub fn for_level(&self, level: InsulationLevel) -> &SmoothingStage {
        match level {
            InsulationLevel::Low => &self.low,
            InsulationLevel::Medium => &self.medium,
            InsulationLevel::High => &self.high,
        }
    }
}
