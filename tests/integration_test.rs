use approx::assert_relative_eq;
use heat_profiles::core::buildings::{G2ACoefficients, G2AParameters};
use heat_profiles::core::house::ThermalHouseModel;
use heat_profiles::core::thermostat::ThermostatSchedule;
use heat_profiles::core::weather::WeatherSeries;
use heat_profiles::output::{FileOutput, SinkOutput};
use heat_profiles::read_curve_file::read_series;
use heat_profiles::{
    run_profile_folder, HeatDemandError, HeatDemandGenerator, HouseType, InsulationLevel,
    ProfileSettings,
};
use std::fs;
use std::path::Path;

const HOURS: usize = 8760;

fn constant_weather(temperature: f64) -> WeatherSeries {
    WeatherSeries::new(vec![temperature; HOURS], vec![0.; HOURS], vec![2.; HOURS]).unwrap()
}

fn g2a_parameters() -> G2AParameters {
    G2AParameters::constant(G2ACoefficients {
        reference: 15.5,
        slope: 1.,
        constant: 0.5,
    })
    .unwrap()
}

fn generator(weather: WeatherSeries) -> HeatDemandGenerator {
    HeatDemandGenerator::new(
        weather,
        ThermostatSchedule::uniform(20.).unwrap(),
        g2a_parameters(),
        &Default::default(),
    )
    .unwrap()
}

#[test]
fn test_terraced_house_in_constant_cold_weather() {
    let thermostat = ThermostatSchedule::uniform(20.).unwrap();
    let mut house = ThermalHouseModel::new(HouseType::Terraced, InsulationLevel::Low, &thermostat);

    let demand: Vec<f64> = (0..HOURS)
        .map(|hour| house.heat_demand_at_hour(hour, 10., 0.))
        .collect();

    assert!(demand.iter().all(|&value| value >= 0.));

    let curve = generator(constant_weather(10.))
        .house_profile(HouseType::Terraced, InsulationLevel::Low)
        .unwrap();
    assert_eq!(curve.key(), "insulation_terraced_houses_low");
    assert!((curve.sum() - 1. / 3600.).abs() < 1e-6);
    for value in curve.data() {
        assert_relative_eq!(*value, 1. / (3600. * HOURS as f64), max_relative = 1e-9);
    }
}

#[test]
fn test_all_profiles_are_normalised_and_deterministic() {
    let temperature: Vec<f64> = (0..HOURS)
        .map(|hour| 8. - 6. * (hour as f64 / HOURS as f64 * std::f64::consts::TAU).cos())
        .collect();
    let irradiation: Vec<f64> = (0..HOURS)
        .map(|hour| if (9..16).contains(&(hour % 24)) { 50. } else { 0. })
        .collect();
    let weather = || {
        WeatherSeries::new(temperature.clone(), irradiation.clone(), vec![3.; HOURS]).unwrap()
    };

    let first: Vec<_> = generator(weather())
        .generate_all_profiles()
        .collect::<Result<_, _>>()
        .unwrap();
    let second = generator(weather()).collect_all_profiles().unwrap();

    assert_eq!(first.len(), 14);
    assert_eq!(first, second);
    for curve in &first {
        assert_eq!(curve.data().len(), HOURS);
        assert!((curve.sum() - 1. / 3600.).abs() < 1e-6, "{}", curve.key());
    }
    assert_eq!(first[12].data(), first[13].data());
}

#[test]
fn test_short_temperature_series_is_rejected() {
    let error = WeatherSeries::new(vec![10.; 100], vec![0.; HOURS], vec![2.; HOURS]).unwrap_err();

    assert_eq!(
        error,
        HeatDemandError::InvalidLength {
            input: "temperature".to_string(),
            expected: HOURS,
            actual: 100,
        }
    );
}

fn write_folder(dir: &Path) {
    let series = |value: &str| format!("{value}\n").repeat(HOURS);
    fs::write(dir.join("temperature.csv"), series("4.5")).unwrap();
    fs::write(dir.join("irradiation.csv"), series("12")).unwrap();
    fs::write(dir.join("wind_speed.csv"), series("3")).unwrap();
    fs::write(
        dir.join("thermostat.csv"),
        format!("low,medium,high\n{}", "19,20,21\n".repeat(24)),
    )
    .unwrap();
    fs::write(
        dir.join("G2A_parameters.csv"),
        "reference,slope,constant\n15.5,1,0.5\n",
    )
    .unwrap();
}

#[test]
fn test_profile_folder_is_generated_once() {
    let dir = tempfile::tempdir().unwrap();
    write_folder(dir.path());
    let settings = ProfileSettings::default();
    let output = FileOutput::csv_in(dir.path().to_path_buf());

    let first_run = run_profile_folder(dir.path(), &output, &settings).unwrap();
    assert_eq!(first_run.generated.len(), 14);

    let exported =
        fs::read_to_string(dir.path().join("insulation_detached_houses_high.csv")).unwrap();
    let exported = read_series(exported.as_bytes(), "detached", b',').unwrap();
    assert_eq!(exported.len(), HOURS);
    assert!((exported.iter().sum::<f64>() - 1. / 3600.).abs() < 1e-6);

    let second_run = run_profile_folder(dir.path(), &output, &settings).unwrap();
    assert_eq!(second_run.existing.len(), 14);
    assert!(second_run.generated.is_empty());
}

#[test]
fn test_profile_folder_with_other_separator_to_sink() {
    let dir = tempfile::tempdir().unwrap();
    write_folder(dir.path());
    let thermostat = fs::read_to_string(dir.path().join("thermostat.csv")).unwrap();
    fs::write(dir.path().join("thermostat.csv"), thermostat.replace(',', ";")).unwrap();
    fs::remove_file(dir.path().join("wind_speed.csv")).unwrap();
    fs::remove_file(dir.path().join("G2A_parameters.csv")).unwrap();
    let settings = ProfileSettings {
        csv_separator: ';',
        ..Default::default()
    };

    let curves = run_profile_folder(dir.path(), SinkOutput, &settings).unwrap();

    assert_eq!(curves.generated.len(), 12);
    assert!(!dir.path().join("insulation_apartments_low.csv").exists());
}
