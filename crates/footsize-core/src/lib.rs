//! Core types for foot measurement from photographs.
//!
//! This crate is intentionally small: grayscale buffers, the binary edge map,
//! contours with their bounding boxes, and the logging bootstrap. It does
//! *not* depend on any concrete image codec.

mod image;
mod logger;
mod region;

pub use image::{get_replicated, EdgeMap, GrayImage, GrayImageView};
pub use region::{BoundingBox, Contour};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_from_verbosity, init_with_level};
