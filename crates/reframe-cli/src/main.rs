//! Command-line front end: trajectory re-origin plus the KITTI/TUM
//! pose-table converters.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use reframe_core::{decimate, ExtrinsicTransform, Real, Trajectory};
use reframe_formats::{
    format_kitti, format_tum, parse_kitti, parse_tum, DEFAULT_CONVERT_PRECISION,
    DEFAULT_POSE_PRECISION,
};
use reframe_reorigin::reorigin;
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[command(author, version, about = "Trajectory re-origin and pose-table conversion")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Re-express a TUM-style trajectory in the frame of another sensor.
    Reorigin {
        /// Input pose file (TUM layout).
        #[arg(long)]
        input: PathBuf,

        /// Output pose file (TUM layout).
        #[arg(long)]
        output: PathBuf,

        /// Path to a JSON `ReoriginConfig`. Defaults (identity extrinsic)
        /// are used if omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write every decimation-th output pose to this file.
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Convert a KITTI pose table to the TUM layout.
    KittiToTum {
        /// Input pose file (KITTI layout).
        #[arg(long)]
        input: PathBuf,

        /// Output pose file (TUM layout).
        #[arg(long)]
        output: PathBuf,

        /// Decimal digits per numeric field.
        #[arg(long, default_value_t = DEFAULT_CONVERT_PRECISION)]
        precision: usize,
    },

    /// Convert a TUM pose table to the KITTI layout.
    TumToKitti {
        /// Input pose file (TUM layout).
        #[arg(long)]
        input: PathBuf,

        /// Output pose file (KITTI layout).
        #[arg(long)]
        output: PathBuf,

        /// Decimal digits per numeric field.
        #[arg(long, default_value_t = DEFAULT_CONVERT_PRECISION)]
        precision: usize,
    },
}

/// Run configuration for the re-origin subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReoriginConfig {
    /// Source-to-target extrinsic as 12 row-major reals (a 3x4 matrix:
    /// `[r11 r12 r13 tx r21 r22 r23 ty r31 r32 r33 tz]`).
    source_to_target: [Real; 12],

    /// Decimal digits per numeric output field.
    #[serde(default = "default_precision")]
    precision: usize,

    /// Stride for the sparse `--preview` export.
    #[serde(default = "default_decimation")]
    decimation: usize,
}

fn default_precision() -> usize {
    DEFAULT_POSE_PRECISION
}

fn default_decimation() -> usize {
    1
}

impl Default for ReoriginConfig {
    fn default() -> Self {
        Self {
            source_to_target: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0,
            ],
            precision: default_precision(),
            decimation: default_decimation(),
        }
    }
}

impl ReoriginConfig {
    fn extrinsic(&self) -> ExtrinsicTransform {
        ExtrinsicTransform::from_row_major(&self.source_to_target)
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_tum_file(path: &Path) -> Result<Trajectory> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_tum(&text).with_context(|| format!("malformed pose table {}", path.display()))
}

fn read_kitti_file(path: &Path) -> Result<Trajectory> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_kitti(&text).with_context(|| format!("malformed pose table {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn run_reorigin_from_files(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    preview: Option<&Path>,
) -> Result<usize> {
    let config = if let Some(cfg_path) = config_path {
        load_json_file::<ReoriginConfig>(cfg_path)?
    } else {
        ReoriginConfig::default()
    };

    let trajectory = read_tum_file(input)?;
    let reorigined = reorigin(&trajectory, &config.extrinsic())?;
    write_file(output, &format_tum(&reorigined, config.precision))?;

    if let Some(preview_path) = preview {
        let sparse = decimate(&reorigined, config.decimation);
        write_file(preview_path, &format_tum(&sparse, config.precision))?;
        info!(
            "wrote {} preview poses (stride {}) to {}",
            sparse.len(),
            config.decimation,
            preview_path.display()
        );
    }

    Ok(reorigined.len())
}

fn run_kitti_to_tum_from_files(input: &Path, output: &Path, precision: usize) -> Result<usize> {
    let trajectory = read_kitti_file(input)?;
    write_file(output, &format_tum(&trajectory, precision))?;
    Ok(trajectory.len())
}

fn run_tum_to_kitti_from_files(input: &Path, output: &Path, precision: usize) -> Result<usize> {
    let trajectory = read_tum_file(input)?;
    write_file(output, &format_kitti(&trajectory, precision))?;
    Ok(trajectory.len())
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Reorigin {
            input,
            output,
            config,
            preview,
        } => {
            let count = run_reorigin_from_files(
                &input,
                &output,
                config.as_deref(),
                preview.as_deref(),
            )?;
            println!("re-origined {} poses -> {}", count, output.display());
        }
        Command::KittiToTum {
            input,
            output,
            precision,
        } => {
            let count = run_kitti_to_tum_from_files(&input, &output, precision)?;
            println!("converted {} poses -> {}", count, output.display());
        }
        Command::TumToKitti {
            input,
            output,
            precision,
        } => {
            let count = run_tum_to_kitti_from_files(&input, &output, precision)?;
            println!("converted {} poses -> {}", count, output.display());
        }
    }
    Ok(())
}
