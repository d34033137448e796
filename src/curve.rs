use crate::core::units::{HOURS_PER_YEAR, SECONDS_PER_HOUR};
use crate::errors::HeatDemandError;
use fsum::FSum;

pub const BUILDINGS_HEATING_KEY: &str = "buildings_heating";
pub const AGRICULTURE_HEATING_KEY: &str = "agriculture_heating";

/// A named hourly profile for one year.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    key: String,
    data: Vec<f64>,
}

impl Curve {
    pub fn new(key: impl Into<String>, data: Vec<f64>) -> Result<Self, HeatDemandError> {
        let key = key.into();
        if data.len() != HOURS_PER_YEAR {
            return Err(HeatDemandError::invalid_length(
                &key,
                HOURS_PER_YEAR,
                data.len(),
            ));
        }
        Ok(Self { key, data })
    }

    /// Normalises a raw demand trace into a curve summing to 1/3600.
    pub fn normalised(key: impl Into<String>, trace: Vec<f64>) -> Result<Self, HeatDemandError> {
        let key = key.into();
        let data = normalise(&key, trace)?;
        Self::new(key, data)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The same data under another key.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: self.data.clone(),
        }
    }

    pub fn sum(&self) -> f64 {
        FSum::with_all(self.data.iter()).value()
    }
}

/// Scales a trace so it sums to 1/3600, the form in which the scenario service expects curves.
///
/// A trace summing to zero cannot be scaled and is reported as a degenerate curve.
pub(crate) fn normalise(key: &str, trace: Vec<f64>) -> Result<Vec<f64>, HeatDemandError> {
    let total = FSum::with_all(trace.iter()).value();
    if total == 0. {
        return Err(HeatDemandError::DegenerateCurve {
            key: key.to_string(),
        });
    }

    Ok(trace
        .into_iter()
        .map(|value| value / total / SECONDS_PER_HOUR as f64)
        .collect())
}
