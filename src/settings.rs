use crate::core::smoothing::SmoothingSettings;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Settings for reading, generating and exporting heat demand profiles.
///
/// Every field has a default, so a settings file only needs to name what it changes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileSettings {
    /// field separator of all CSV inputs and outputs
    pub csv_separator: char,
    /// whether exported curves replace files that already exist
    pub overwrite_existing: bool,
    pub smoothing: SmoothingSettings,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            csv_separator: ',',
            overwrite_existing: false,
            smoothing: Default::default(),
        }
    }
}

impl ProfileSettings {
    pub fn from_json(json: impl Read) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_reader(BufReader::new(json))
            .context("Could not parse profile settings")?;
        settings.delimiter()?;

        Ok(settings)
    }

    /// The CSV separator as the single byte the CSV reader and writer expect.
    pub fn delimiter(&self) -> anyhow::Result<u8> {
        if !self.csv_separator.is_ascii() {
            bail!(
                "CSV separator must be a single ASCII character, got '{}'",
                self.csv_separator
            );
        }
        Ok(self.csv_separator as u8)
    }
}
