use super::classify::ClassifierRule;
use serde::{Deserialize, Serialize};

/// Physical width of an ISO A4 sheet's short edge, in centimeters.
pub const A4_SHORT_EDGE_CM: f64 = 21.0;

/// Configuration for the measurement pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeasureParams {
    /// Physical width of the reference sheet in centimeters.
    ///
    /// The sheet is assumed photographed with its short edge horizontal.
    /// Other reference objects (letter paper, a credit card) can be
    /// substituted by overriding this value.
    pub reference_width_cm: f64,
    /// Keep at most this many contours, ranked by enclosed area, before the
    /// two candidates are selected. Bounds the work done on noisy images;
    /// values below 2 are treated as 2.
    pub max_candidate_contours: usize,
    /// Contours with a smaller enclosed area are ignored. Zero keeps
    /// everything.
    pub min_contour_area: f64,
    /// Side length of the square smoothing kernel, in pixels.
    pub blur_kernel: usize,
    /// Gaussian sigma. Non-positive values derive sigma from the kernel
    /// size.
    pub blur_sigma: f32,
    /// Lower hysteresis threshold on the 8-bit gradient scale.
    pub canny_low: f32,
    /// Upper hysteresis threshold on the 8-bit gradient scale.
    pub canny_high: f32,
    /// Rule deciding which candidate region is the reference sheet.
    pub classifier: ClassifierRule,
    /// Reject measurements shorter than this. Zero disables the check.
    pub min_plausible_cm: f64,
    /// Reject measurements longer than this. `f64::MAX` disables the check
    /// while staying JSON-serializable.
    pub max_plausible_cm: f64,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            reference_width_cm: A4_SHORT_EDGE_CM,
            max_candidate_contours: 5,
            min_contour_area: 0.0,
            blur_kernel: 7,
            blur_sigma: 0.0,
            canny_low: 50.0,
            canny_high: 150.0,
            classifier: ClassifierRule::default(),
            min_plausible_cm: 0.0,
            max_plausible_cm: f64::MAX,
        }
    }
}
