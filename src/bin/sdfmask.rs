//! Converts a triangle mesh in OBJ format into a binary obstacle mask.
//!
//! The mask is written next to the input, with the `.obj` extension replaced by `.sdf`: one
//! byte per grid cell, `1` inside the mesh and `0` outside.

use clap::{Parser, ValueEnum};
use sdfmask3d::pipeline::Pipeline;
use sdfmask3d::planning::BoundsPolicy;
use sdfmask3d::sdf::SweptLevelSet;
use std::path::PathBuf;
use std::process::ExitCode;

/// How the grid is placed around the mesh.
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum Bounds {
    /// Fixed 20 x 10 x 10 box, independent of the mesh.
    #[default]
    Canonical,
    /// Bounding box of the mesh plus a margin.
    Fit,
}

impl From<Bounds> for BoundsPolicy {
    fn from(bounds: Bounds) -> Self {
        match bounds {
            Bounds::Canonical => BoundsPolicy::Canonical,
            Bounds::Fit => BoundsPolicy::Fit,
        }
    }
}

/// Signed distance based obstacle mask generator for triangle meshes.
#[derive(Parser, Debug)]
#[command(name = "sdfmask", version)]
#[command(about = "Voxelizes an OBJ mesh into a binary inside/outside mask")]
struct Args {
    /// Input mesh, named `<name>.obj`.
    input: PathBuf,

    /// Number of cells along the y axis.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    resolution: u32,

    /// Grid placement.
    #[arg(long, value_enum, default_value_t)]
    bounds: Bounds,

    /// Cells of margin around the mesh, with `--bounds fit`.
    #[arg(long, default_value_t = 2)]
    padding: u32,

    /// Cells around each triangle where distances are computed exactly.
    #[arg(long, default_value_t = 1)]
    exact_band: u32,
}

fn exit_with(code: i32) -> ExitCode {
    // Statuses are negative; the platform keeps the low byte.
    ExitCode::from(code as u8)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { -1 } else { 0 };
            let _ = err.print();
            return exit_with(code);
        }
    };

    let pipeline = Pipeline {
        bounds: BoundsPolicy::from(args.bounds).strategy(args.padding),
        provider: Box::new(SweptLevelSet {
            exact_band: args.exact_band,
        }),
    };

    match pipeline.run(&args.input, args.resolution) {
        Ok(summary) => {
            log::debug!("{:?}", summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            exit_with(err.exit_code())
        }
    }
}
