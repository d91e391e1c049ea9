//! End-to-end integration tests: CSV -> distance/coupling -> JSON -> deserialize.

use std::fs;
use std::path::{Path, PathBuf};

use frechet_core::{DiscreteFrechet, FrechetError};
use frechet_io::{ExperimentName, IoError, PolylineReader, ResultWriter};
use tempfile::TempDir;

/// Path to the test fixture directory.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn coupling_round_trip() {
    // 1. Read CSV
    let p = PolylineReader::new(&fixture_path("mirrored_p.csv"))
        .read()
        .expect("fixture should parse");
    let q = PolylineReader::new(&fixture_path("mirrored_q.csv"))
        .read()
        .expect("fixture should parse");
    assert_eq!((p.len(), p.dim()), (10, 3));
    assert_eq!((q.len(), q.dim()), (10, 3));

    // 2. Compute
    let (dist, seq) = DiscreteFrechet::new()
        .distance_and_coupling(p.as_view(), q.as_view())
        .unwrap();
    assert!((dist.value() - 5.0_f64.sqrt()).abs() < 1e-12);

    // 3. Write JSON artifact
    let dir = TempDir::new().unwrap();
    let experiment = ExperimentName::new("mirrored".into()).unwrap();
    let writer = ResultWriter::new(dir.path(), experiment).unwrap();
    let path = writer
        .write_coupling(p.as_view(), q.as_view(), dist, &seq)
        .unwrap();

    // 4. Deserialize back and verify
    let content: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(content["experiment"], "mirrored");
    assert_eq!(content["p_len"].as_u64().unwrap(), 10);
    assert_eq!(content["q_len"].as_u64().unwrap(), 10);

    let steps = content["coupling"].as_array().unwrap();
    assert_eq!(steps.len(), seq.len());
    let first = &steps[0];
    assert_eq!((first["p"].as_u64(), first["q"].as_u64()), (Some(0), Some(0)));
    let last = &steps[steps.len() - 1];
    assert_eq!((last["p"].as_u64(), last["q"].as_u64()), (Some(9), Some(9)));

    let max_step = steps
        .iter()
        .map(|s| s["distance"].as_f64().unwrap())
        .fold(0.0, f64::max);
    assert!((max_step - dist.value()).abs() < 1e-12);
}

#[test]
fn mismatched_fixture_dimensions_fail_in_engine() {
    let p = PolylineReader::new(&fixture_path("planar_2d.csv")).read().unwrap();
    let q = PolylineReader::new(&fixture_path("mirrored_q.csv")).read().unwrap();
    let err = DiscreteFrechet::new()
        .distance(p.as_view(), q.as_view())
        .unwrap_err();
    assert_eq!(err, FrechetError::DimensionMismatch { p_dim: 2, q_dim: 3 });
}

#[test]
fn invalid_experiment_name_rejected_before_writing() {
    let result = ExperimentName::new("bad name".into());
    assert!(matches!(result, Err(IoError::InvalidExperimentName { .. })));
}
