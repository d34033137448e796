//! Heat demand of non-residential buildings and agriculture, following a simple degree-hour
//! model on a wind-adjusted temperature.

use crate::core::units::HOURS_PER_YEAR;
use crate::errors::HeatDemandError;
use serde::Deserialize;

/// Wind speed (m/s) that lowers the effective temperature by one K.
const WIND_SPEED_PER_KELVIN: f64 = 1.5;

/// Coefficients of the buildings heat demand model for one hour.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct G2ACoefficients {
    /// effective temperature (°C) below which buildings are heated
    pub reference: f64,
    /// additional demand per K below the reference temperature
    pub slope: f64,
    /// base demand, present in every hour
    pub constant: f64,
}

impl G2ACoefficients {
    pub const COLUMNS: [&'static str; 3] = ["reference", "slope", "constant"];

    pub fn heat_demand(&self, effective_temperature: f64) -> f64 {
        if effective_temperature < self.reference {
            (self.reference - effective_temperature) * self.slope + self.constant
        } else {
            self.constant
        }
    }

    fn is_finite(&self) -> bool {
        [self.reference, self.slope, self.constant]
            .iter()
            .all(|value| value.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum G2AParameters {
    /// one set of coefficients used for every hour of the year
    Constant(G2ACoefficients),
    /// coefficients for each hour of the year
    TimeSeries(Vec<G2ACoefficients>),
}

impl G2AParameters {
    pub fn constant(coefficients: G2ACoefficients) -> Result<Self, HeatDemandError> {
        if !coefficients.is_finite() {
            return Err(HeatDemandError::non_numeric("G2A parameters", 0));
        }
        Ok(Self::Constant(coefficients))
    }

    pub fn time_series(rows: Vec<G2ACoefficients>) -> Result<Self, HeatDemandError> {
        if rows.len() != HOURS_PER_YEAR {
            return Err(HeatDemandError::invalid_length(
                "G2A parameters",
                HOURS_PER_YEAR,
                rows.len(),
            ));
        }
        if let Some(index) = rows.iter().position(|row| !row.is_finite()) {
            return Err(HeatDemandError::non_numeric("G2A parameters", index));
        }
        Ok(Self::TimeSeries(rows))
    }

    /// Builds parameters from table rows: a single row is used for every hour, otherwise there
    /// has to be a row for each hour of the year.
    pub fn from_rows(mut rows: Vec<G2ACoefficients>) -> Result<Self, HeatDemandError> {
        if rows.len() == 1 {
            Self::constant(rows.remove(0))
        } else {
            Self::time_series(rows)
        }
    }

    /// Applies the checks of [`Self::constant`] or [`Self::time_series`] to parameters built
    /// from either variant directly.
    pub fn validated(self) -> Result<Self, HeatDemandError> {
        match self {
            Self::Constant(coefficients) => Self::constant(coefficients),
            Self::TimeSeries(rows) => Self::time_series(rows),
        }
    }

    pub fn at_hour(&self, hour: usize) -> G2ACoefficients {
        match self {
            Self::Constant(coefficients) => *coefficients,
            Self::TimeSeries(rows) => rows[hour],
        }
    }
}

/// Outside temperature lowered by the cooling effect of wind, in °C.
pub fn effective_temperature(temperature: f64, wind_speed: f64) -> f64 {
    temperature - wind_speed / WIND_SPEED_PER_KELVIN
}

/// Hourly heat demand of buildings over the year, before normalisation.
pub fn buildings_heat_demand(
    temperature: &[f64],
    wind_speed: &[f64],
    parameters: &G2AParameters,
) -> Vec<f64> {
    temperature
        .iter()
        .zip(wind_speed)
        .enumerate()
        .map(|(hour, (&temperature, &wind_speed))| {
            parameters
                .at_hour(hour)
                .heat_demand(effective_temperature(temperature, wind_speed))
        })
        .collect()
}
