pub mod core;
pub mod curve;
pub mod errors;
pub mod generator;
pub mod output;
pub mod profile_folder;
pub mod read_curve_file;
pub mod settings;

pub use crate::core::insulation::{HouseType, InsulationLevel};
pub use crate::curve::Curve;
pub use crate::errors::HeatDemandError;
pub use crate::generator::{GeneratorInputs, HeatDemandGenerator, Profiles};
pub use crate::profile_folder::{HeatDemandCurves, ProfileFolder};
pub use crate::settings::ProfileSettings;

use crate::output::{export_curves, Output};
use std::path::Path;
use tracing::info;

/// Reads the heat demand curves of the scenario in `input_folder`, generating whichever are
/// missing, and writes the generated curves to `output`.
pub fn run_profile_folder(
    input_folder: &Path,
    output: impl Output,
    settings: &ProfileSettings,
) -> anyhow::Result<HeatDemandCurves> {
    let folder = ProfileFolder::new(input_folder, settings)?;
    let curves = folder.heat_demand_curves(&settings.smoothing)?;
    info!(
        "{} curve(s) read and {} generated",
        curves.existing.len(),
        curves.generated.len()
    );

    export_curves(&output, &curves.generated, settings.overwrite_existing)?;

    Ok(curves)
}
