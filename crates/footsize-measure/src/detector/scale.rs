//! Pixel-to-centimeter conversion.

use super::error::MeasureError;
use footsize_core::BoundingBox;

/// Calibration ratio from the reference sheet's bounding box.
///
/// The ratio must be positive, finite and non-zero; a zero-width reference
/// box (or a non-positive configured width) surfaces as
/// `DegenerateCalibration` instead of propagating `inf`/`NaN` into the
/// result.
pub fn pixels_per_cm(
    reference: &BoundingBox,
    reference_width_cm: f64,
) -> Result<f64, MeasureError> {
    if reference.width == 0 || !(reference_width_cm > 0.0) || !reference_width_cm.is_finite() {
        return Err(MeasureError::DegenerateCalibration);
    }
    Ok(reference.width as f64 / reference_width_cm)
}

/// Subject length in centimeters from its vertical extent, rounded to one
/// decimal place. The subject is assumed photographed with its long axis
/// vertical.
pub fn subject_length_cm(subject: &BoundingBox, pixels_per_cm: f64) -> f64 {
    round1(subject.height as f64 / pixels_per_cm)
}

/// Round half away from zero to one decimal digit.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Children's shoe size for a given foot length, per the sizing formula of
/// the original service: `round(cm * 1.5 + 1.5)`.
pub fn shoe_size(length_cm: f64) -> u32 {
    (length_cm * 1.5 + 1.5).round().max(0.0) as u32
}
