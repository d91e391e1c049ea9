//! JSON result writer for coupling computations.

use std::fs;
use std::path::{Path, PathBuf};

use frechet_core::{CouplingSequence, FrechetDistance, PolylineView};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::ExperimentName;
use crate::IoError;

/// Writes coupling results to JSON files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{experiment}_frechet.json`.
pub struct ResultWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl ResultWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Return the path the coupling artifact is written to.
    #[must_use]
    pub fn coupling_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_frechet.json", self.experiment.as_str()))
    }

    /// Write a distance and coupling sequence to `{experiment}_frechet.json`.
    ///
    /// Each coupling step is written with the pointwise distance between its
    /// two waypoints.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::Serialize`] | The artifact cannot be encoded |
    /// | [`IoError::WriteFile`] | The file cannot be written |
    #[instrument(skip_all)]
    pub fn write_coupling(
        &self,
        p: PolylineView<'_>,
        q: PolylineView<'_>,
        distance: FrechetDistance,
        coupling: &CouplingSequence,
    ) -> Result<PathBuf, IoError> {
        let path = self.coupling_path();

        let steps: Vec<StepEntry> = coupling
            .steps()
            .iter()
            .zip(coupling.step_distances(p, q))
            .map(|(s, d)| StepEntry {
                p: s.p,
                q: s.q,
                distance: d,
            })
            .collect();

        let artifact = CouplingArtifact {
            experiment: self.experiment.as_str(),
            distance: distance.value(),
            p_len: p.len(),
            q_len: q.len(),
            dim: p.dim(),
            coupling: steps,
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "coupling result written");
        Ok(path)
    }
}

// --- Serialization structs ---

#[derive(Serialize)]
struct CouplingArtifact<'a> {
    experiment: &'a str,
    distance: f64,
    p_len: usize,
    q_len: usize,
    dim: usize,
    coupling: Vec<StepEntry>,
}

#[derive(Serialize)]
struct StepEntry {
    p: usize,
    q: usize,
    distance: f64,
}
