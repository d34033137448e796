pub const HOURS_PER_DAY: usize = 24;
pub const HOURS_PER_YEAR: usize = 8_760;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const WATTS_PER_KILOWATT: u32 = 1_000;

/// Joules in a kilowatt hour, as the rounded factor the profile data was fitted with.
pub const J_TO_KWH: f64 = 2.77778e-7;
pub const CM2_TO_M2: f64 = 1e-4;

/// Converts an irradiation value in J/cm² into kWh/m².
pub fn joules_per_cm2_to_kwh_per_m2(value: f64) -> f64 {
    value * J_TO_KWH / CM2_TO_M2
}

pub fn series_joules_per_cm2_to_kwh_per_m2(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&value| joules_per_cm2_to_kwh_per_m2(value))
        .collect()
}
