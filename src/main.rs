extern crate heat_profiles;

use anyhow::Context;
use clap::Parser;
use heat_profiles::output::FileOutput;
use heat_profiles::{run_profile_folder, ProfileSettings};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct HeatProfilesArgs {
    #[arg(help = "Folder with the weather, thermostat and G2A parameter files")]
    input_folder: PathBuf,
    #[arg(
        long,
        short,
        help = "Folder the generated curves are written to, defaults to the input folder"
    )]
    output_folder: Option<PathBuf>,
    #[arg(long, short, help = "Path to profile settings in .json format")]
    settings: Option<PathBuf>,
    #[arg(long, help = "Field separator of the CSV files, overrides the settings")]
    separator: Option<char>,
    #[clap(
        long,
        default_value_t = false,
        help = "Replace curve files that already exist"
    )]
    overwrite: bool,
    #[clap(long, short, default_value_t = false, help = "Log debug output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = HeatProfilesArgs::parse();

    let tracing_subscriber = tracing_subscriber::fmt::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(tracing_subscriber)
        .context("setting tracing subscriber failed")?;

    let mut settings = match &args.settings {
        Some(path) => ProfileSettings::from_json(
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?,
        )?,
        None => ProfileSettings::default(),
    };
    if let Some(separator) = args.separator {
        settings.csv_separator = separator;
    }
    settings.overwrite_existing |= args.overwrite;
    debug!("Using settings {settings:?}");

    let output_folder = args
        .output_folder
        .unwrap_or_else(|| args.input_folder.clone());
    fs::create_dir_all(&output_folder)?;

    let curves = run_profile_folder(
        &args.input_folder,
        &FileOutput::csv_in(output_folder),
        &settings,
    )?;
    println!("{} heat demand curve(s) available", curves.len());

    Ok(())
}
