//! A folder holding the heat demand inputs of a scenario, and possibly curves generated from
//! them earlier.
//!
//! Curve families that are already present in the folder are read back; only the missing
//! families are generated, and only the inputs they need are loaded.

use crate::core::buildings::G2AParameters;
use crate::core::insulation::curve_keys;
use crate::core::smoothing::SmoothingSettings;
use crate::core::thermostat::ThermostatSchedule;
use crate::curve::{Curve, AGRICULTURE_HEATING_KEY, BUILDINGS_HEATING_KEY};
use crate::generator::{GeneratorInputs, HeatDemandGenerator};
use crate::read_curve_file::{read_g2a_parameters, read_series, read_thermostat};
use crate::settings::ProfileSettings;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, warn};

pub const TEMPERATURE_FILE: &str = "temperature";
pub const IRRADIATION_FILE: &str = "irradiation";
pub const WIND_SPEED_FILE: &str = "wind_speed";
pub const THERMOSTAT_FILE: &str = "thermostat";
pub const G2A_PARAMETERS_FILE: &str = "G2A_parameters";

const BUILDING_AGRICULTURE_KEYS: [&str; 2] = [BUILDINGS_HEATING_KEY, AGRICULTURE_HEATING_KEY];

/// Curves for a scenario: those read from the folder, and those generated because they were
/// missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatDemandCurves {
    pub existing: Vec<Curve>,
    pub generated: Vec<Curve>,
}

impl HeatDemandCurves {
    pub fn len(&self) -> usize {
        self.existing.len() + self.generated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.existing.iter().chain(self.generated.iter())
    }
}

#[derive(Debug)]
pub struct ProfileFolder {
    path: PathBuf,
    delimiter: u8,
}

impl ProfileFolder {
    pub fn new(path: impl Into<PathBuf>, settings: &ProfileSettings) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.into(),
            delimiter: settings.delimiter()?,
        })
    }

    fn file_path(&self, stem: &str) -> PathBuf {
        self.path.join(format!("{stem}.csv"))
    }

    fn contains_all(&self, keys: impl IntoIterator<Item = impl AsRef<str>>) -> bool {
        keys.into_iter()
            .all(|key| self.file_path(key.as_ref()).exists())
    }

    /// Whether all twelve house profiles are in the folder.
    pub fn contains_house_profiles(&self) -> bool {
        self.contains_all(curve_keys())
    }

    pub fn contains_building_agriculture_profiles(&self) -> bool {
        self.contains_all(BUILDING_AGRICULTURE_KEYS)
    }

    pub fn read_house_profiles(&self) -> anyhow::Result<Vec<Curve>> {
        curve_keys().iter().map(|key| self.read_curve(key)).collect()
    }

    pub fn read_building_agriculture_profiles(&self) -> anyhow::Result<Vec<Curve>> {
        BUILDING_AGRICULTURE_KEYS
            .iter()
            .map(|key| self.read_curve(key))
            .collect()
    }

    fn read_curve(&self, key: &str) -> anyhow::Result<Curve> {
        let file = self.open(key)?;
        let data = read_series(file, key, self.delimiter)?;
        Curve::new(key, data).with_context(|| format!("Curve in {}", self.path.display()))
    }

    fn open(&self, stem: &str) -> anyhow::Result<BufReader<File>> {
        let path = self.file_path(stem);
        let file =
            File::open(&path).with_context(|| format!("Could not open {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Opens an input file, or gives None when the folder does not have it.
    fn open_input(&self, stem: &str) -> anyhow::Result<Option<BufReader<File>>> {
        if !self.file_path(stem).exists() {
            warn!("File not found: {stem}.csv in {}", self.path.display());
            return Ok(None);
        }
        self.open(stem).map(Some)
    }

    fn load_series(&self, stem: &str) -> anyhow::Result<Option<Vec<f64>>> {
        self.open_input(stem)?
            .map(|file| read_series(file, stem, self.delimiter))
            .transpose()
    }

    fn load_thermostat(&self) -> anyhow::Result<Option<ThermostatSchedule>> {
        self.open_input(THERMOSTAT_FILE)?
            .map(|file| {
                read_thermostat(file, self.delimiter)
                    .with_context(|| format!("Thermostat in {}", self.path.display()))
            })
            .transpose()
    }

    fn load_g2a_parameters(&self) -> anyhow::Result<Option<G2AParameters>> {
        self.open_input(G2A_PARAMETERS_FILE)?
            .map(|file| {
                read_g2a_parameters(file, self.delimiter)
                    .with_context(|| format!("G2A parameters in {}", self.path.display()))
            })
            .transpose()
    }

    /// Reads the curve families present in the folder and generates the missing ones.
    pub fn heat_demand_curves(
        &self,
        smoothing: &SmoothingSettings,
    ) -> anyhow::Result<HeatDemandCurves> {
        let mut curves = HeatDemandCurves::default();

        let has_house_profiles = self.contains_house_profiles();
        if has_house_profiles {
            info!("Found housing heat profiles in {}, reading", self.path.display());
            curves.existing.extend(self.read_house_profiles()?);
        }
        let has_building_profiles = self.contains_building_agriculture_profiles();
        if has_building_profiles {
            info!(
                "Found buildings and agriculture heat profiles in {}, reading",
                self.path.display()
            );
            curves
                .existing
                .extend(self.read_building_agriculture_profiles()?);
        }

        if has_house_profiles && has_building_profiles {
            return Ok(curves);
        }

        let inputs = GeneratorInputs {
            temperature: self.load_series(TEMPERATURE_FILE)?,
            irradiation: match has_house_profiles {
                false => self.load_series(IRRADIATION_FILE)?,
                true => None,
            },
            wind_speed: match has_building_profiles {
                false => self.load_series(WIND_SPEED_FILE)?,
                true => None,
            },
            thermostat: match has_house_profiles {
                false => self.load_thermostat()?,
                true => None,
            },
            g2a_parameters: match has_building_profiles {
                false => self.load_g2a_parameters()?,
                true => None,
            },
        };

        let generator = HeatDemandGenerator::from_inputs(inputs, smoothing)
            .with_context(|| format!("Heat demand inputs in {}", self.path.display()))?;
        curves.generated = generator.collect_all_profiles()?;

        Ok(curves)
    }
}
