/// Errors returned by the measurement pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MeasureError {
    #[error("not enough contours detected (found {found}, need at least 2)")]
    InsufficientContours { found: usize },
    #[error("degenerate calibration: reference region has zero width")]
    DegenerateCalibration,
    #[error("implausible measurement: {length_cm} cm outside [{min_cm}, {max_cm}] cm")]
    ImplausibleMeasurement {
        length_cm: f64,
        min_cm: f64,
        max_cm: f64,
    },
}
