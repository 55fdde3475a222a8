//! The measurement pipeline.
//!
//! Wires together smoothing, edge detection, contour extraction, region
//! classification and scale conversion into a single forward pass.

mod classify;
mod error;
mod params;
mod pipeline;
mod result;
mod scale;

pub use classify::{classify, ClassifiedRegions, ClassifierRule, RegionCandidate};
pub use error::MeasureError;
pub use params::{MeasureParams, A4_SHORT_EDGE_CM};
pub use pipeline::FootMeasurer;
pub use result::Measurement;
pub use scale::{pixels_per_cm, round1, shoe_size, subject_length_cm};
