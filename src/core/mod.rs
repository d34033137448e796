pub mod buildings;
pub mod house;
pub mod insulation;
pub mod smoothing;
pub mod thermostat;
pub mod units;
pub mod weather;
