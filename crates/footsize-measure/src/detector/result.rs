use super::scale;
use footsize_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// Output of a measurement run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Measurement {
    /// Foot length in centimeters, rounded to one decimal place.
    pub foot_length_cm: f64,
    /// Calibration ratio derived from the reference sheet.
    pub pixels_per_cm: f64,
    /// Bounding box classified as the reference sheet.
    pub reference_box: BoundingBox,
    /// Bounding box classified as the foot.
    pub subject_box: BoundingBox,
}

impl Measurement {
    /// Children's shoe size for the measured length.
    pub fn shoe_size(&self) -> u32 {
        scale::shoe_size(self.foot_length_cm)
    }
}
