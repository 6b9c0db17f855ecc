//! The complete conversion of an OBJ file into an obstacle mask file.

use crate::io::{self, LoadError};
use crate::planning::{BoundsStrategy, CanonicalBox, PlanError};
use crate::sdf::{DistanceFieldProvider, SdfError, SweptLevelSet};
use crate::shape::GridGeometry;
use std::path::{Path, PathBuf};

/// Errors aborting a [`Pipeline::run`].
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// The input path does not name a `.obj` file.
    #[error("expected an OBJ file with a filename of the form <name>.obj, got `{}`", .0.display())]
    BadFilename(PathBuf),
    /// The mesh could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// No valid grid could be derived from the mesh.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The distance field could not be computed.
    #[error(transparent)]
    Sdf(#[from] SdfError),
    /// The mask could not be written.
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// The process exit status associated to this error.
    ///
    /// | status | failure                          |
    /// |--------|----------------------------------|
    /// | `-1`   | bad filename or arguments        |
    /// | `-2`   | vertex normals in the input      |
    /// | `-3`   | input could not be opened or read |
    /// | `-4`   | malformed vertex or face record  |
    /// | `-5`   | grid planning                    |
    /// | `-6`   | distance field computation       |
    /// | `-7`   | output could not be written      |
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::BadFilename(_) => -1,
            PipelineError::Load(LoadError::UnsupportedNormals { .. }) => -2,
            PipelineError::Load(LoadError::Open { .. } | LoadError::Read { .. }) => -3,
            PipelineError::Load(LoadError::Malformed { .. }) => -4,
            PipelineError::Plan(_) => -5,
            PipelineError::Sdf(_) => -6,
            PipelineError::Write { .. } => -7,
        }
    }
}

/// The outcome of a successful [`Pipeline::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// The path of the mask file written.
    pub output: PathBuf,
    /// The grid the mesh was sampled on.
    pub grid: GridGeometry,
    /// The number of vertices read.
    pub num_vertices: usize,
    /// The number of faces read.
    pub num_faces: usize,
    /// The number of input lines that were neither vertices nor faces.
    pub ignored_lines: usize,
    /// The size of the mask file.
    pub bytes_written: u64,
}

/// The path of the mask written for `input`: its `.obj` extension replaced by `.sdf`.
///
/// Returns `None` unless the file name is `<name>.obj` with a non-empty `<name>`. The
/// extension is case-sensitive.
pub fn output_path_for(input: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?;

    if input.extension()? != "obj" || stem.is_empty() {
        return None;
    }

    Some(input.with_extension("sdf"))
}

/// The mesh-to-mask conversion, with its pluggable stages.
pub struct Pipeline {
    /// Derives the grid from the mesh.
    pub bounds: Box<dyn BoundsStrategy>,
    /// Computes the signed distance field.
    pub provider: Box<dyn DistanceFieldProvider>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline {
            bounds: Box::new(CanonicalBox),
            provider: Box::new(SweptLevelSet::default()),
        }
    }
}

impl Pipeline {
    /// Creates a pipeline from its stages.
    pub fn new(
        bounds: impl BoundsStrategy + 'static,
        provider: impl DistanceFieldProvider + 'static,
    ) -> Self {
        Pipeline {
            bounds: Box::new(bounds),
            provider: Box::new(provider),
        }
    }

    /// Converts the OBJ file at `input` into a mask file next to it, with `resolution` cells
    /// along `y`.
    ///
    /// The output file is only created once the distance field has been computed, so no file
    /// is left behind by input, planning or computation failures.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        resolution: u32,
    ) -> Result<RunSummary, PipelineError> {
        let input = input.as_ref();
        let output =
            output_path_for(input).ok_or_else(|| PipelineError::BadFilename(input.to_path_buf()))?;

        log::info!("Reading data.");
        let report = io::load_obj(input)?;
        let mesh = &report.mesh;

        let grid = self.bounds.plan(mesh, resolution)?;

        log::info!("Computing signed distance field.");
        let field = self.provider.compute_field(mesh, &grid)?;

        log::info!("Writing results to: {}", output.display());
        let bytes_written = io::save_mask(&field, &output).map_err(|source| PipelineError::Write {
            path: output.clone(),
            source,
        })?;

        log::info!("Processing complete.");

        Ok(RunSummary {
            output,
            grid,
            num_vertices: mesh.num_vertices(),
            num_faces: mesh.num_faces(),
            ignored_lines: report.ignored_lines,
            bytes_written,
        })
    }
}
