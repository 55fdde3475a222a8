//! High-level facade crate for the `footsize-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the core types and the measurement pipeline
//! - end-to-end helpers that decode a photograph (via the `image` crate)
//!   and run the measurement pipeline on it
//!
//! ## Quickstart
//!
//! ```no_run
//! use footsize::{measure_file, MeasureParams};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = MeasureParams::default();
//! let m = measure_file(Path::new("foot.jpg"), &params)?;
//! println!("foot length: {} cm", m.foot_length_cm);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `footsize::core`: image buffers, edge maps, contours, bounding boxes.
//! - `footsize::measure`: the pipeline stages and `FootMeasurer`.
//! - `footsize::{measure_file, measure_image}`: end-to-end helpers.

pub use footsize_core as core;
pub use footsize_measure as measure;

pub use footsize_core::{BoundingBox, Contour, EdgeMap, GrayImage, GrayImageView};
pub use footsize_measure::{
    ClassifierRule, FootMeasurer, MeasureError, MeasureParams, Measurement, A4_SHORT_EDGE_CM,
};

mod load;

pub use load::{
    is_supported_extension, load_gray, measure_file, measure_image, FootsizeError,
    SUPPORTED_EXTENSIONS,
};
