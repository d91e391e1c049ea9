//! CSV polyline reader with full input validation.

use std::path::{Path, PathBuf};

use frechet_core::Polyline;
use tracing::{debug, info, instrument};

use crate::IoError;

/// Reads one polyline from a CSV file.
///
/// Expected CSV format:
/// - One waypoint per row, one coordinate per column (`x,y` or `x,y,z`, ...)
/// - Header row by default (e.g. `x,y,z`); disable with [`with_headers`][Self::with_headers]
/// - All rows must have the same number of columns, at least two
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyPolyline`] | Zero waypoint rows |
/// | [`IoError::InconsistentRowLength`] | Row has a different column count than the first row |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable float |
/// | [`IoError::InvalidPolyline`] | Rows have fewer than two columns |
pub struct PolylineReader {
    path: PathBuf,
    has_headers: bool,
}

impl PolylineReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            has_headers: true,
        }
    }

    /// Set whether the first row is a header to skip.
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Read and validate the CSV file, returning a [`Polyline`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Polyline, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) lets our InconsistentRowLength check fire instead of
        // a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut dim: Option<usize> = None;
        let mut coords = Vec::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            let expected = *dim.get_or_insert_with(|| {
                debug!(columns = record.len(), "waypoint dimension from first row");
                record.len()
            });
            if record.len() != expected {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected,
                    got: record.len(),
                });
            }

            for (col_index, raw) in record.iter().enumerate() {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index,
                        raw: raw.to_string(),
                    })?;
                coords.push(value);
            }
        }

        let Some(dim) = dim else {
            return Err(IoError::EmptyPolyline {
                path: self.path.clone(),
            });
        };

        let polyline = Polyline::from_flat(dim, coords).map_err(|e| IoError::InvalidPolyline {
            path: self.path.clone(),
            source: e,
        })?;

        info!(waypoints = polyline.len(), dim, "polyline loaded");
        Ok(polyline)
    }
}
