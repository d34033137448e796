//! This module provides a lumped thermal model of a single house, used to calculate its hourly
//! space heating demand from outside temperature and solar irradiation.

use crate::core::insulation::{HouseType, InsulationLevel, InsulationParameters};
use crate::core::thermostat::ThermostatSchedule;
use crate::core::units::{HOURS_PER_DAY, WATTS_PER_KILOWATT};

/// A house of a given type and insulation level, heated to follow a thermostat programme.
///
/// The house is a single thermal mass: each hour it loses heat through its envelope and gains
/// heat from the sun through its windows. When the resulting inside temperature falls below the
/// temperature the occupants keep, the heating tops it back up and that energy is the demand.
/// Surplus gains are kept in the thermal mass rather than producing a demand.
#[derive(Clone, Debug)]
pub struct ThermalHouseModel<'a> {
    level: InsulationLevel,
    parameters: InsulationParameters,
    thermostat: &'a ThermostatSchedule,
    inside_temperature: f64,
}

impl<'a> ThermalHouseModel<'a> {
    pub fn new(
        house_type: HouseType,
        level: InsulationLevel,
        thermostat: &'a ThermostatSchedule,
    ) -> Self {
        let parameters = InsulationParameters::for_house(house_type, level);
        let inside_temperature = thermostat.setpoint(0, level) - parameters.behaviour;

        Self {
            level,
            parameters,
            thermostat,
            inside_temperature,
        }
    }

    pub fn inside_temperature(&self) -> f64 {
        self.inside_temperature
    }

    /// Heat demand (in kWh) for one hour of the year. Never negative: when solar gains exceed
    /// the envelope loss the surplus warms the thermal mass instead.
    ///
    /// Arguments:
    /// * `hour_index` - index into the yearly series, only its hour of the day is used
    /// * `temperature` - outside temperature, in °C
    /// * `irradiation` - solar irradiation, in kWh/m²
    pub fn heat_demand_at_hour(
        &mut self,
        hour_index: usize,
        temperature: f64,
        irradiation: f64,
    ) -> f64 {
        let hour_of_day = hour_index % HOURS_PER_DAY;
        let target_temperature =
            self.thermostat.setpoint(hour_of_day, self.level) - self.parameters.behaviour;

        let net_loss = self.envelope_loss(temperature) - self.solar_gain(irradiation);
        let free_temperature = self.inside_temperature - net_loss / self.parameters.heat_capacity;

        if free_temperature < target_temperature {
            self.inside_temperature = target_temperature;
            (target_temperature - free_temperature) * self.parameters.heat_capacity
        } else {
            self.inside_temperature = free_temperature;
            0.
        }
    }

    /// Heat lost through the envelope over one hour, in kWh
    fn envelope_loss(&self, outside_temperature: f64) -> f64 {
        let heat_transfer_coefficient = self.parameters.surface_area / self.parameters.r_value; // W/K
        heat_transfer_coefficient * (self.inside_temperature - outside_temperature)
            / WATTS_PER_KILOWATT as f64
    }

    /// Solar energy entering through the windows over one hour, in kWh
    fn solar_gain(&self, irradiation: f64) -> f64 {
        self.parameters.window_area * irradiation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::thermostat::ThermostatSetpoints;
    use approx::assert_relative_eq;
    use rstest::*;

    #[fixture]
    fn thermostat() -> ThermostatSchedule {
        ThermostatSchedule::uniform(20.).unwrap()
    }

    #[rstest]
    fn should_start_at_the_temperature_occupants_keep(thermostat: ThermostatSchedule) {
        let house = ThermalHouseModel::new(HouseType::Terraced, InsulationLevel::Low, &thermostat);

        assert_relative_eq!(house.inside_temperature(), 20. - 0.44224575);
    }

    #[rstest]
    fn should_replace_envelope_loss_in_steady_state(thermostat: ThermostatSchedule) {
        let mut house =
            ThermalHouseModel::new(HouseType::Terraced, InsulationLevel::Low, &thermostat);
        let inside = 20. - 0.44224575;
        let expected_loss = 183. / 0.72608224 * (inside - 10.) / 1000.;

        for hour in 0..48 {
            assert_relative_eq!(
                house.heat_demand_at_hour(hour, 10., 0.),
                expected_loss,
                max_relative = 1e-9
            );
        }
    }

    #[rstest]
    fn should_reduce_demand_by_solar_gain(thermostat: ThermostatSchedule) {
        let mut dark =
            ThermalHouseModel::new(HouseType::Detached, InsulationLevel::Medium, &thermostat);
        let mut sunny =
            ThermalHouseModel::new(HouseType::Detached, InsulationLevel::Medium, &thermostat);

        let demand_dark = dark.heat_demand_at_hour(12, 0., 0.);
        let demand_sunny = sunny.heat_demand_at_hour(12, 0., 0.1);

        assert_relative_eq!(
            demand_dark - demand_sunny,
            6.12774164 * 0.1,
            max_relative = 1e-9
        );
    }

    #[rstest]
    fn should_have_no_demand_when_gains_exceed_losses(thermostat: ThermostatSchedule) {
        let mut house =
            ThermalHouseModel::new(HouseType::Apartment, InsulationLevel::High, &thermostat);
        let start = house.inside_temperature();

        assert_eq!(house.heat_demand_at_hour(0, 25., 0.), 0.);
        assert!(house.inside_temperature() > start);
    }

    #[rstest]
    fn should_store_solar_surplus_instead_of_negative_demand(thermostat: ThermostatSchedule) {
        let mut house =
            ThermalHouseModel::new(HouseType::Detached, InsulationLevel::Low, &thermostat);
        let start = house.inside_temperature();

        // 3 kWh/m² through the windows outweighs the loss at 5°C outside
        assert_eq!(house.heat_demand_at_hour(12, 5., 3.), 0.);
        assert!(house.inside_temperature() > start);
        // the stored heat covers the following dark hour
        assert_eq!(house.heat_demand_at_hour(13, 5., 0.), 0.);
    }

    #[rstest]
    fn should_reheat_after_night_setback() {
        let night = ThermostatSetpoints {
            low: 15.,
            medium: 15.,
            high: 15.,
        };
        let day = ThermostatSetpoints {
            low: 20.,
            medium: 20.,
            high: 20.,
        };
        let thermostat = ThermostatSchedule::new(
            (0..24)
                .map(|hour| if hour < 7 { night } else { day })
                .collect(),
        )
        .unwrap();
        let mut house =
            ThermalHouseModel::new(HouseType::SemiDetached, InsulationLevel::Low, &thermostat);

        let demands: Vec<f64> = (0..24)
            .map(|hour| house.heat_demand_at_hour(hour, 5., 0.))
            .collect();

        // the 5K step back up to the day setting lands on the heating at 7am
        assert!(demands[7] > demands[6] + 5. * house.parameters.heat_capacity * 0.9);
        assert!(demands[7] > demands[8]);
    }

    #[rstest]
    fn should_use_hour_of_day_for_hours_beyond_the_first_day() {
        let mut hours = vec![
            ThermostatSetpoints {
                low: 20.,
                medium: 20.,
                high: 20.,
            };
            24
        ];
        hours[1].high = 30.;
        let thermostat = ThermostatSchedule::new(hours).unwrap();

        let mut first_day =
            ThermalHouseModel::new(HouseType::Terraced, InsulationLevel::High, &thermostat);
        let mut later_day = first_day.clone();

        first_day.heat_demand_at_hour(0, 5., 0.);
        later_day.heat_demand_at_hour(24 * 200, 5., 0.);

        assert_relative_eq!(
            first_day.heat_demand_at_hour(1, 5., 0.),
            later_day.heat_demand_at_hour(24 * 200 + 1, 5., 0.)
        );
    }
}
