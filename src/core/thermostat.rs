use crate::core::insulation::InsulationLevel;
use crate::core::units::HOURS_PER_DAY;
use crate::errors::HeatDemandError;
use serde::Deserialize;

/// Thermostat settings (in °C) for one hour of the day, one per insulation level.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ThermostatSetpoints {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl ThermostatSetpoints {
    pub fn for_level(&self, level: InsulationLevel) -> f64 {
        match level {
            InsulationLevel::Low => self.low,
            InsulationLevel::Medium => self.medium,
            InsulationLevel::High => self.high,
        }
    }
}

/// The daily thermostat programme: 24 rows of setpoints, one per hour of the day.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermostatSchedule {
    hours: Vec<ThermostatSetpoints>,
}

impl ThermostatSchedule {
    pub const COLUMNS: [&'static str; 3] = ["low", "medium", "high"];

    pub fn new(hours: Vec<ThermostatSetpoints>) -> Result<Self, HeatDemandError> {
        if hours.len() != HOURS_PER_DAY {
            return Err(HeatDemandError::invalid_length(
                "thermostat",
                HOURS_PER_DAY,
                hours.len(),
            ));
        }
        if let Some(index) = hours.iter().position(|setpoints| {
            ![setpoints.low, setpoints.medium, setpoints.high]
                .iter()
                .all(|value| value.is_finite())
        }) {
            return Err(HeatDemandError::non_numeric("thermostat", index));
        }

        Ok(Self { hours })
    }

    /// The same setpoint for every hour and every insulation level.
    pub fn uniform(setpoint: f64) -> Result<Self, HeatDemandError> {
        Self::new(vec![
            ThermostatSetpoints {
                low: setpoint,
                medium: setpoint,
                high: setpoint,
            };
            HOURS_PER_DAY
        ])
    }

    pub fn setpoint(&self, hour_of_day: usize, level: InsulationLevel) -> f64 {
        self.hours[hour_of_day % HOURS_PER_DAY].for_level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn day_and_night() -> ThermostatSchedule {
        let night = ThermostatSetpoints {
            low: 15.,
            medium: 16.,
            high: 17.,
        };
        let day = ThermostatSetpoints {
            low: 19.,
            medium: 19.5,
            high: 20.,
        };
        ThermostatSchedule::new(
            (0..24)
                .map(|hour| if (7..23).contains(&hour) { day } else { night })
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    fn should_look_up_setpoint_by_hour_and_level(day_and_night: ThermostatSchedule) {
        assert_eq!(day_and_night.setpoint(3, InsulationLevel::Low), 15.);
        assert_eq!(day_and_night.setpoint(7, InsulationLevel::Medium), 19.5);
        assert_eq!(day_and_night.setpoint(22, InsulationLevel::High), 20.);
        assert_eq!(day_and_night.setpoint(23, InsulationLevel::High), 17.);
    }

    #[rstest]
    fn should_reject_schedule_without_24_hours() {
        let result = ThermostatSchedule::new(vec![
            ThermostatSetpoints {
                low: 20.,
                medium: 20.,
                high: 20.,
            };
            23
        ]);

        assert_eq!(
            result,
            Err(HeatDemandError::InvalidLength {
                input: "thermostat".to_string(),
                expected: 24,
                actual: 23,
            })
        );
    }

    #[rstest]
    fn should_reject_nan_setpoint() {
        let mut hours = vec![
            ThermostatSetpoints {
                low: 20.,
                medium: 20.,
                high: 20.,
            };
            24
        ];
        hours[5].medium = f64::NAN;

        assert_eq!(
            ThermostatSchedule::new(hours),
            Err(HeatDemandError::NonNumeric {
                input: "thermostat".to_string(),
                index: 5
            })
        );
    }
}
