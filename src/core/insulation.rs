//! Fixed thermal and behavioural parameters of the housing archetypes, per insulation level.
//!
//! The values were fitted against the nl2019 dataset and are compiled in; nothing here is
//! mutated at runtime.

use crate::core::units::J_TO_KWH;
use itertools::iproduct;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum HouseType {
    #[strum(serialize = "terraced_houses")]
    Terraced,
    #[strum(serialize = "semi_detached_houses")]
    SemiDetached,
    #[strum(serialize = "apartments")]
    Apartment,
    #[strum(serialize = "detached_houses")]
    Detached,
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum InsulationLevel {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsulationParameters {
    /// thermal resistance of the envelope, in m².K/W
    pub r_value: f64,
    /// in m²
    pub surface_area: f64,
    /// effective window area for solar gains, in m²
    pub window_area: f64,
    /// in kWh/K
    pub heat_capacity: f64,
    /// fitted offset (in K) between the thermostat setting and the temperature occupants
    /// actually keep the house at
    pub behaviour: f64,
}

impl InsulationParameters {
    pub fn for_house(house_type: HouseType, level: InsulationLevel) -> Self {
        Self {
            r_value: r_value(house_type, level),
            surface_area: surface_area(house_type),
            window_area: window_area(house_type),
            heat_capacity: heat_capacity(),
            behaviour: behaviour(house_type, level),
        }
    }
}

fn r_value(house_type: HouseType, level: InsulationLevel) -> f64 {
    use HouseType::*;
    use InsulationLevel::*;

    match (house_type, level) {
        (Terraced, Low) => 0.72608224,
        (Terraced, Medium) => 0.95303516,
        (Terraced, High) => 2.20833951,
        (SemiDetached, Low) => 0.92629934,
        (SemiDetached, Medium) => 1.20779267,
        (SemiDetached, High) => 2.90413756,
        (Apartment, Low) => 0.96937942,
        (Apartment, Medium) => 1.39716924,
        (Apartment, High) => 2.95000949,
        (Detached, Low) => 1.02227109,
        (Detached, Medium) => 1.2962618,
        (Detached, High) => 3.10765405,
    }
}

fn surface_area(house_type: HouseType) -> f64 {
    match house_type {
        HouseType::Terraced => 183.,
        HouseType::SemiDetached => 279.,
        HouseType::Apartment => 187.,
        HouseType::Detached => 405.,
    }
}

fn window_area(house_type: HouseType) -> f64 {
    match house_type {
        HouseType::Terraced => 6.08289109,
        HouseType::SemiDetached => 5.80327128,
        HouseType::Apartment => 5.53039382,
        HouseType::Detached => 6.12774164,
    }
}

fn behaviour(house_type: HouseType, level: InsulationLevel) -> f64 {
    use HouseType::*;
    use InsulationLevel::*;

    match (house_type, level) {
        (Terraced, Low) => 0.44224575,
        (Terraced, Medium) => 2.61042431,
        (Terraced, High) => 0.59483274,
        (SemiDetached, Low) => 1.57962902,
        (SemiDetached, Medium) => 4.43499574,
        (SemiDetached, High) => 0.45485638,
        (Apartment, Low) => -0.11691841,
        (Apartment, Medium) => 0.80467653,
        (Apartment, High) => 2.78210071,
        (Detached, Low) => 3.34031291,
        (Detached, Medium) => 7.76537119,
        (Detached, High) => 2.74614981,
    }
}

/// How much energy it takes to heat a house by one K, in kWh/K. Same for all house types.
///
/// Derived from a square 8m x 8m x 4m concrete shell with a flat roof and 2.5cm walls.
pub fn heat_capacity() -> f64 {
    // https://en.wikipedia.org/wiki/Properties_of_concrete
    let density_concrete = 2400.0; // kg/m³
    let specific_heat_capacity_concrete = 880.0; // J/(kg.K)

    let width = 8.0; // m
    let height = 4.0; // m
    let wall_thickness = 0.025; // m
    let roof_area = width * width;
    let wall_area = width * height;

    let shell_area = wall_area * 4. + roof_area;
    let kg_of_concrete = shell_area * wall_thickness * density_concrete;

    specific_heat_capacity_concrete * J_TO_KWH * kg_of_concrete
}

pub fn house_curve_key(house_type: HouseType, level: InsulationLevel) -> String {
    format!("insulation_{house_type}_{level}")
}

/// All (house type, insulation level) pairs, house type outermost.
pub fn house_combinations() -> Vec<(HouseType, InsulationLevel)> {
    iproduct!(HouseType::iter(), InsulationLevel::iter()).collect()
}

/// Keys of the twelve house curves, in generation order.
pub fn curve_keys() -> Vec<String> {
    house_combinations()
        .into_iter()
        .map(|(house_type, level)| house_curve_key(house_type, level))
        .collect()
}
