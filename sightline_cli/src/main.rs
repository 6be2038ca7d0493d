//! # Sightline CLI Application
//!
//! Command-line front end for seating sightline calculations. Reads the nine
//! section parameters from flags (or a JSON file), builds the model and
//! prints a report, the model as JSON, or the profile points.
//!
//! ```text
//! sightline --rows 20 --minimum-c-value 90
//! sightline --config section.json --format json
//! sightline --mirror --format points
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sightline_core::config::{
    DEFAULT_DISTANCE_TO_FIRST_ROW_X, DEFAULT_DISTANCE_TO_FIRST_ROW_Y, DEFAULT_EYE_HEIGHT,
    DEFAULT_MINIMUM_C_VALUE, DEFAULT_MINIMUM_RISER_HEIGHT, DEFAULT_NUMBER_OF_ROWS,
    DEFAULT_RISER_INCREMENT, DEFAULT_TREAD_SIZE,
};
use sightline_core::geometry::{going_back_points, profile_polyline, ProfilePoint};
use sightline_core::{render_report, CalcError, CalcResult, Configuration, SightlineModel};

/// Compute riser heights and C-values for a tiered seating section.
#[derive(Debug, Parser)]
#[command(name = "sightline", version, about)]
struct Cli {
    /// Seated eye height above the tread
    #[arg(long, default_value_t = DEFAULT_EYE_HEIGHT)]
    eye_height: f64,

    /// Horizontal depth of each tier
    #[arg(long, default_value_t = DEFAULT_TREAD_SIZE)]
    tread_size: f64,

    /// Step added to a riser while searching for clearance
    #[arg(long, default_value_t = DEFAULT_RISER_INCREMENT, allow_negative_numbers = true)]
    riser_increment: f64,

    /// Required clearance over the head of the spectator in front
    #[arg(long, default_value_t = DEFAULT_MINIMUM_C_VALUE, allow_negative_numbers = true)]
    minimum_c_value: f64,

    /// Lowest riser height the search starts from
    #[arg(long, default_value_t = DEFAULT_MINIMUM_RISER_HEIGHT, allow_negative_numbers = true)]
    minimum_riser_height: f64,

    /// Number of rows in the section
    #[arg(long = "rows", default_value_t = DEFAULT_NUMBER_OF_ROWS)]
    number_of_rows: usize,

    /// Horizontal distance from the focus point to the first row's eye
    #[arg(long = "distance-x", default_value_t = DEFAULT_DISTANCE_TO_FIRST_ROW_X, allow_negative_numbers = true)]
    distance_to_first_row_x: f64,

    /// Elevation of the first tread above the focus point
    #[arg(long = "distance-y", default_value_t = DEFAULT_DISTANCE_TO_FIRST_ROW_Y, allow_negative_numbers = true)]
    distance_to_first_row_y: f64,

    /// Mirror the profile about the vertical plane through the focus
    #[arg(long)]
    mirror: bool,

    /// Read the configuration from a JSON file instead of the flags above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Report)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-column text table
    Report,
    /// Configuration and rows as JSON
    Json,
    /// Tread-top and tread-back points as JSON
    Points,
}

impl Cli {
    fn configuration(&self) -> CalcResult<Configuration> {
        if let Some(path) = &self.config {
            tracing::info!(path = %path.display(), "loading configuration file");
            let text = fs::read_to_string(path)
                .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
            return Ok(serde_json::from_str(&text)?);
        }

        Configuration::builder()
            .with_eye_height(self.eye_height)
            .with_tread_size(self.tread_size)
            .with_riser_increment(self.riser_increment)
            .with_minimum_c_value(self.minimum_c_value)
            .with_minimum_riser_height(self.minimum_riser_height)
            .with_number_of_rows(self.number_of_rows)
            .with_distance_to_first_row_x(self.distance_to_first_row_x)
            .with_distance_to_first_row_y(self.distance_to_first_row_y)
            .with_mirror(self.mirror)
            .build()
    }
}

#[derive(serde::Serialize)]
struct PointsOutput {
    going_top: Vec<ProfilePoint>,
    going_back: Vec<ProfilePoint>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CalcResult<String> {
    let config = cli.configuration()?;
    let model = SightlineModel::new(config)?;
    tracing::info!(
        rows = model.number_of_rows(),
        total_rise = model.total_rise(),
        "sightline model ready"
    );

    match cli.format {
        OutputFormat::Report => Ok(render_report(&model)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&model)?),
        OutputFormat::Points => {
            let output = PointsOutput {
                going_top: profile_polyline(&model, None).into_points(),
                going_back: going_back_points(&model),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
