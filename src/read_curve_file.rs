//! Readers for the CSV inputs of the heat demand generator, and for previously exported curves.

use crate::core::buildings::{G2ACoefficients, G2AParameters};
use crate::core::thermostat::{ThermostatSchedule, ThermostatSetpoints};
use crate::errors::HeatDemandError;
use anyhow::{anyhow, Context};
use csv::{ReaderBuilder as CsvReaderBuilder, StringRecord};
use std::io::Read;

/// Reads a single column of numbers without a header, one value per line.
pub fn read_series(file: impl Read, name: &str, delimiter: u8) -> anyhow::Result<Vec<f64>> {
    let mut reader = CsvReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(file);

    reader
        .records()
        .enumerate()
        .map(|(line, record)| {
            let record = record.with_context(|| format!("Could not read line {} of {name}", line + 1))?;
            let field = record
                .get(0)
                .ok_or_else(|| anyhow!("Line {} of {name} is empty", line + 1))?;
            field
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Value '{field}' on line {} of {name} is not a number", line + 1))
        })
        .collect()
}

/// Reads a thermostat programme: a header naming the columns low, medium and high (in any order)
/// and one row per hour of the day.
pub fn read_thermostat(file: impl Read, delimiter: u8) -> anyhow::Result<ThermostatSchedule> {
    let mut reader = CsvReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = normalised_headers(reader.headers()?);
    reader.set_headers(headers.clone());

    let mut columns: Vec<String> = headers.iter().map(str::to_string).collect();
    columns.sort();
    let mut expected: Vec<String> = ThermostatSchedule::COLUMNS
        .iter()
        .map(|column| column.to_string())
        .collect();
    expected.sort();
    if columns != expected {
        return Err(HeatDemandError::InvalidThermostatColumns {
            columns: headers.iter().map(str::to_string).collect(),
        }
        .into());
    }

    let hours = reader
        .deserialize::<ThermostatSetpoints>()
        .enumerate()
        .map(|(row, setpoints)| {
            setpoints.with_context(|| format!("Could not read row {} of thermostat", row + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ThermostatSchedule::new(hours)?)
}

/// Reads G2A parameters: a header including the columns reference, slope and constant, and
/// either a single row or one row per hour of the year. Other columns are ignored.
pub fn read_g2a_parameters(file: impl Read, delimiter: u8) -> anyhow::Result<G2AParameters> {
    let mut reader = CsvReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = normalised_headers(reader.headers()?);
    reader.set_headers(headers.clone());

    let missing: Vec<String> = G2ACoefficients::COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(HeatDemandError::MissingColumns {
            input: "G2A parameters".to_string(),
            missing,
        }
        .into());
    }

    let rows = reader
        .deserialize::<G2ACoefficients>()
        .enumerate()
        .map(|(row, coefficients)| {
            coefficients.with_context(|| format!("Could not read row {} of G2A parameters", row + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(G2AParameters::from_rows(rows)?)
}

fn normalised_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect()
}
