//! Foot-length measurement pipeline.
//!
//! Single-pass, single-threaded: a grayscale photograph goes through
//! smoothing, gradient edge detection, outer-contour tracing, region
//! classification and pixel-to-centimeter conversion. The photograph must
//! show the foot next to a reference sheet of known width (an upright A4
//! page by default).
//!
//! ## Quickstart
//!
//! ```
//! use footsize_measure::{FootMeasurer, MeasureParams};
//! use footsize_core::GrayImage;
//!
//! let image = GrayImage::new(640, 480);
//! let measurer = FootMeasurer::new(MeasureParams::default());
//! // A blank image holds no regions, so this reports an error.
//! assert!(measurer.measure(&image.view()).is_err());
//! ```

pub mod contour;
pub mod edges;
pub mod preprocess;

mod detector;

pub use detector::{
    classify, pixels_per_cm, round1, shoe_size, subject_length_cm, ClassifiedRegions,
    ClassifierRule, FootMeasurer, MeasureError, MeasureParams, Measurement, RegionCandidate,
    A4_SHORT_EDGE_CM,
};
