//! Generation of the full family of normalised heat demand curves from weather inputs.

use crate::core::buildings::{buildings_heat_demand, G2AParameters};
use crate::core::house::ThermalHouseModel;
use crate::core::insulation::{house_combinations, house_curve_key, HouseType, InsulationLevel};
use crate::core::smoothing::{SmoothingSettings, SmoothingStages};
use crate::core::thermostat::ThermostatSchedule;
use crate::core::units::{series_joules_per_cm2_to_kwh_per_m2, HOURS_PER_YEAR};
use crate::core::weather::{HourlySeries, WeatherSeries};
use crate::curve::{Curve, AGRICULTURE_HEATING_KEY, BUILDINGS_HEATING_KEY};
use crate::errors::HeatDemandError;
use rayon::prelude::*;
use std::vec;
use tracing::{debug, info, warn};

const HOUSE_PROFILES: &str = "house heat demand";
const BUILDING_AGRICULTURE_PROFILES: &str = "building and agriculture heat demand";

/// Raw inputs to the generator. Any of them may be absent, in which case only the profiles that
/// do not need it are generated.
#[derive(Clone, Debug, Default)]
pub struct GeneratorInputs {
    /// outside temperature, in °C
    pub temperature: Option<Vec<f64>>,
    /// solar irradiation, in J/cm²
    pub irradiation: Option<Vec<f64>>,
    /// wind speed, in m/s
    pub wind_speed: Option<Vec<f64>>,
    pub thermostat: Option<ThermostatSchedule>,
    pub g2a_parameters: Option<G2AParameters>,
}

impl GeneratorInputs {
    pub fn complete(
        weather: WeatherSeries,
        thermostat: ThermostatSchedule,
        g2a_parameters: G2AParameters,
    ) -> Self {
        Self {
            temperature: Some(weather.temperature.into_inner()),
            irradiation: Some(weather.irradiation.into_inner()),
            wind_speed: Some(weather.wind_speed.into_inner()),
            thermostat: Some(thermostat),
            g2a_parameters: Some(g2a_parameters),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeatDemandGenerator {
    temperature: Option<HourlySeries>,
    /// in kWh/m²
    irradiation: Option<Vec<f64>>,
    wind_speed: Option<HourlySeries>,
    thermostat: Option<ThermostatSchedule>,
    g2a_parameters: Option<G2AParameters>,
    smoothing: SmoothingStages,
}

impl HeatDemandGenerator {
    pub fn new(
        weather: WeatherSeries,
        thermostat: ThermostatSchedule,
        g2a_parameters: G2AParameters,
        smoothing: &SmoothingSettings,
    ) -> Result<Self, HeatDemandError> {
        Self::from_inputs(
            GeneratorInputs::complete(weather, thermostat, g2a_parameters),
            smoothing,
        )
    }

    /// Validates every input that is present. Nothing is calculated here, so an invalid input
    /// fails before any curve is generated.
    pub fn from_inputs(
        inputs: GeneratorInputs,
        smoothing: &SmoothingSettings,
    ) -> Result<Self, HeatDemandError> {
        let GeneratorInputs {
            temperature,
            irradiation,
            wind_speed,
            thermostat,
            g2a_parameters,
        } = inputs;

        let temperature = temperature
            .map(|values| HourlySeries::new("temperature", values))
            .transpose()?;
        let irradiation = irradiation
            .map(|values| HourlySeries::new("irradiation", values))
            .transpose()?
            .map(|series| series_joules_per_cm2_to_kwh_per_m2(&series));
        let wind_speed = wind_speed
            .map(|values| HourlySeries::new("wind speed", values))
            .transpose()?;
        let g2a_parameters = g2a_parameters
            .map(G2AParameters::validated)
            .transpose()?;

        let generator = Self {
            temperature,
            irradiation,
            wind_speed,
            thermostat,
            g2a_parameters,
            smoothing: SmoothingStages::new(smoothing)?,
        };

        if let Err(e) = generator.house_inputs() {
            warn!("{e}; house profiles will be skipped.");
        }
        if let Err(e) = generator.building_agriculture_inputs() {
            warn!("{e}; building and agriculture profiles will be skipped.");
        }

        Ok(generator)
    }

    pub fn can_generate_house_profiles(&self) -> bool {
        self.house_inputs().is_ok()
    }

    pub fn can_generate_building_agriculture_profiles(&self) -> bool {
        self.building_agriculture_inputs().is_ok()
    }

    fn house_inputs(
        &self,
    ) -> Result<(&HourlySeries, &[f64], &ThermostatSchedule), HeatDemandError> {
        let missing = |input| HeatDemandError::MissingInput {
            profiles: HOUSE_PROFILES,
            input,
        };
        Ok((
            self.temperature.as_ref().ok_or_else(|| missing("temperature"))?,
            self.irradiation
                .as_deref()
                .ok_or_else(|| missing("irradiation"))?,
            self.thermostat.as_ref().ok_or_else(|| missing("thermostat"))?,
        ))
    }

    fn building_agriculture_inputs(
        &self,
    ) -> Result<(&HourlySeries, &HourlySeries, &G2AParameters), HeatDemandError> {
        let missing = |input| HeatDemandError::MissingInput {
            profiles: BUILDING_AGRICULTURE_PROFILES,
            input,
        };
        Ok((
            self.temperature.as_ref().ok_or_else(|| missing("temperature"))?,
            self.wind_speed.as_ref().ok_or_else(|| missing("wind speed"))?,
            self.g2a_parameters
                .as_ref()
                .ok_or_else(|| missing("G2A parameters"))?,
        ))
    }

    /// Generates the twelve house profiles, house type outermost and insulation level innermost.
    ///
    /// The combinations are independent of each other and are calculated in parallel.
    pub fn generate_house_profiles(&self) -> Result<Vec<Curve>, HeatDemandError> {
        self.house_inputs()?;
        info!("Generating house heat demand profiles");

        house_combinations()
            .into_par_iter()
            .map(|(house_type, level)| self.house_profile(house_type, level))
            .collect()
    }

    /// Heat demand curve of a neighbourhood of houses of one type and insulation level.
    pub fn house_profile(
        &self,
        house_type: HouseType,
        level: InsulationLevel,
    ) -> Result<Curve, HeatDemandError> {
        let (temperature, irradiation, thermostat) = self.house_inputs()?;
        let key = house_curve_key(house_type, level);

        let mut house = ThermalHouseModel::new(house_type, level, thermostat);
        let household_demand: Vec<f64> = (0..HOURS_PER_YEAR)
            .map(|hour| house.heat_demand_at_hour(hour, temperature[hour], irradiation[hour]))
            .collect();
        let neighbourhood_demand = self.smoothing.for_level(level).smooth(&household_demand);

        let curve = Curve::normalised(key, neighbourhood_demand)?;
        debug!("Generated curve: {}", curve.key());
        Ok(curve)
    }

    /// Generates the buildings heating profile and an agriculture heating profile, which is
    /// assumed to follow the same profile.
    pub fn generate_building_agriculture_profiles(&self) -> Result<Vec<Curve>, HeatDemandError> {
        info!("Generating building and agriculture heat demand profiles");
        let buildings = self.buildings_profile()?;
        let agriculture = buildings.with_key(AGRICULTURE_HEATING_KEY);

        Ok(vec![buildings, agriculture])
    }

    fn buildings_profile(&self) -> Result<Curve, HeatDemandError> {
        let (temperature, wind_speed, g2a_parameters) = self.building_agriculture_inputs()?;
        let demand = buildings_heat_demand(temperature, wind_speed, g2a_parameters);

        let curve = Curve::normalised(BUILDINGS_HEATING_KEY, demand)?;
        debug!("Generated curve: {}", curve.key());
        Ok(curve)
    }

    /// Lazily generates every profile the inputs allow: the house profiles first, then the
    /// building and agriculture profiles. Each curve is calculated when it is requested, and the
    /// sequence ends after the first error.
    pub fn generate_all_profiles(&self) -> Profiles<'_> {
        let house_combinations = if self.can_generate_house_profiles() {
            house_combinations()
        } else {
            info!("Skipping house heat demand profiles generation due to missing data.");
            vec![]
        };
        let buildings_pending = self.can_generate_building_agriculture_profiles();
        if !buildings_pending {
            info!("Skipping building and agriculture heat demand profiles generation due to missing data.");
        }

        Profiles {
            generator: self,
            house_combinations: house_combinations.into_iter(),
            buildings_pending,
            agriculture: None,
            failed: false,
        }
    }

    /// Every profile the inputs allow, in the order of `generate_all_profiles`.
    pub fn collect_all_profiles(&self) -> Result<Vec<Curve>, HeatDemandError> {
        let mut curves = vec![];
        if self.can_generate_house_profiles() {
            curves.extend(self.generate_house_profiles()?);
        }
        if self.can_generate_building_agriculture_profiles() {
            curves.extend(self.generate_building_agriculture_profiles()?);
        }
        Ok(curves)
    }
}

/// Single-pass sequence of generated curves; see [`HeatDemandGenerator::generate_all_profiles`].
#[derive(Debug)]
pub struct Profiles<'a> {
    generator: &'a HeatDemandGenerator,
    house_combinations: vec::IntoIter<(HouseType, InsulationLevel)>,
    buildings_pending: bool,
    agriculture: Option<Curve>,
    failed: bool,
}

impl Iterator for Profiles<'_> {
    type Item = Result<Curve, HeatDemandError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let generator = self.generator;
        let result = if let Some((house_type, level)) = self.house_combinations.next() {
            generator.house_profile(house_type, level)
        } else if let Some(agriculture) = self.agriculture.take() {
            Ok(agriculture)
        } else if self.buildings_pending {
            self.buildings_pending = false;
            generator.buildings_profile().inspect(|buildings| {
                self.agriculture = Some(buildings.with_key(AGRICULTURE_HEATING_KEY));
            })
        } else {
            return None;
        };

        self.failed = result.is_err();
        Some(result)
    }
}
