use crate::core::units::HOURS_PER_YEAR;
use crate::errors::HeatDemandError;
use std::ops::Deref;

/// A year of hourly values, checked to hold exactly one finite number per hour.
#[derive(Clone, Debug, PartialEq)]
pub struct HourlySeries(Vec<f64>);

impl HourlySeries {
    /// Arguments:
    /// * `name` - used to identify the series in validation errors
    /// * `values` - one value per hour of a non-leap year
    pub fn new(name: &str, values: Vec<f64>) -> Result<Self, HeatDemandError> {
        if values.len() != HOURS_PER_YEAR {
            return Err(HeatDemandError::invalid_length(
                name,
                HOURS_PER_YEAR,
                values.len(),
            ));
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(HeatDemandError::non_numeric(name, index));
        }

        Ok(Self(values))
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for HourlySeries {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Outside conditions for a full year.
#[derive(Clone, Debug)]
pub struct WeatherSeries {
    /// in °C
    pub temperature: HourlySeries,
    /// in J/cm² per hour
    pub irradiation: HourlySeries,
    /// in m/s
    pub wind_speed: HourlySeries,
}

impl WeatherSeries {
    pub fn new(
        temperature: Vec<f64>,
        irradiation: Vec<f64>,
        wind_speed: Vec<f64>,
    ) -> Result<Self, HeatDemandError> {
        Ok(Self {
            temperature: HourlySeries::new("temperature", temperature)?,
            irradiation: HourlySeries::new("irradiation", irradiation)?,
            wind_speed: HourlySeries::new("wind speed", wind_speed)?,
        })
    }
}
