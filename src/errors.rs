use thiserror::Error;

/// Errors raised while validating inputs for, or running, the heat demand profile generation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HeatDemandError {
    #[error("{input} must have exactly {expected} values, but {actual} were given")]
    InvalidLength {
        input: String,
        expected: usize,
        actual: usize,
    },
    #[error("{input} is missing the required column(s): {}", missing.join(", "))]
    MissingColumns { input: String, missing: Vec<String> },
    #[error("{input} contains a value that is not a finite number at index {index}")]
    NonNumeric { input: String, index: usize },
    #[error("Thermostat should be supplied for exactly the columns low, medium and high, but found: {}", columns.join(", "))]
    InvalidThermostatColumns { columns: Vec<String> },
    #[error(
        "Smoothing for insulation level {level} needs a spread between 0 and {max} hours, but got {spread}",
        max = crate::core::smoothing::MAX_STANDARD_DEVIATION
    )]
    InvalidSmoothing { level: String, spread: f64 },
    #[error("Heat demand for curve {key} sums to zero and cannot be normalised")]
    DegenerateCurve { key: String },
    #[error("Cannot generate {profiles} profiles without {input}")]
    MissingInput {
        profiles: &'static str,
        input: &'static str,
    },
}

impl HeatDemandError {
    pub(crate) fn invalid_length(input: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            input: input.to_string(),
            expected,
            actual,
        }
    }

    pub(crate) fn non_numeric(input: &str, index: usize) -> Self {
        Self::NonNumeric {
            input: input.to_string(),
            index,
        }
    }
}
