//! File I/O, validation, and serialization for Fréchet computations.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::ExperimentName;
pub use error::IoError;
pub use reader::PolylineReader;
pub use writer::ResultWriter;
