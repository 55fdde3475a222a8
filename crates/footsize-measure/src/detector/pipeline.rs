use super::classify::{classify, RegionCandidate};
use super::scale::{pixels_per_cm, subject_length_cm};
use super::{MeasureError, MeasureParams, Measurement};
use crate::{contour, edges, preprocess};
use footsize_core::{Contour, GrayImageView};
use log::{debug, info};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Single-pass foot measurement from a grayscale photograph.
pub struct FootMeasurer {
    params: MeasureParams,
}

impl FootMeasurer {
    pub fn new(params: MeasureParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &MeasureParams {
        &self.params
    }

    /// Run the full pipeline: smoothing, edge detection, contour
    /// extraction, classification and scale conversion.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn measure(&self, image: &GrayImageView<'_>) -> Result<Measurement, MeasureError> {
        let blurred = preprocess::gaussian_blur(image, self.params.blur_kernel, self.params.blur_sigma);
        let edge_map = edges::canny(&blurred.view(), self.params.canny_low, self.params.canny_high);
        debug!(
            "edge map {}x{}: {} edge pixels",
            edge_map.width,
            edge_map.height,
            edge_map.edge_count()
        );
        let contours = contour::find_external_contours(&edge_map);
        debug!("traced {} external contours", contours.len());
        self.measure_from_contours(&contours)
    }

    /// Classification and scale conversion from already-extracted contours.
    ///
    /// Exposed separately so callers with synthetic or precomputed contours
    /// can exercise the selection logic directly.
    pub fn measure_from_contours(
        &self,
        contours: &[Contour],
    ) -> Result<Measurement, MeasureError> {
        let mut ranked: Vec<RegionCandidate> = contours
            .iter()
            .filter_map(|c| {
                let area = c.area();
                if area < self.params.min_contour_area {
                    return None;
                }
                c.bounding_box().map(|bbox| RegionCandidate { area, bbox })
            })
            .collect();

        if ranked.len() < 2 {
            return Err(MeasureError::InsufficientContours {
                found: ranked.len(),
            });
        }

        ranked.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(self.params.max_candidate_contours.max(2));

        let (first, second) = (ranked[0], ranked[1]);
        debug!(
            "candidate 1: {}x{} at ({}, {}), area {:.0}",
            first.bbox.width, first.bbox.height, first.bbox.x, first.bbox.y, first.area
        );
        debug!(
            "candidate 2: {}x{} at ({}, {}), area {:.0}",
            second.bbox.width, second.bbox.height, second.bbox.x, second.bbox.y, second.area
        );

        let regions = classify(first, second, self.params.classifier);
        let ppcm = pixels_per_cm(&regions.reference.bbox, self.params.reference_width_cm)?;
        let length_cm = subject_length_cm(&regions.subject.bbox, ppcm);
        info!(
            "reference {} px wide -> {:.3} px/cm, subject {} px tall -> {} cm",
            regions.reference.bbox.width, ppcm, regions.subject.bbox.height, length_cm
        );

        if length_cm < self.params.min_plausible_cm || length_cm > self.params.max_plausible_cm {
            return Err(MeasureError::ImplausibleMeasurement {
                length_cm,
                min_cm: self.params.min_plausible_cm,
                max_cm: self.params.max_plausible_cm,
            });
        }

        Ok(Measurement {
            foot_length_cm: length_cm,
            pixels_per_cm: ppcm,
            reference_box: regions.reference.bbox,
            subject_box: regions.subject.bbox,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footsize_core::GrayImage;

    fn fill_rect(img: &mut GrayImage, x0: usize, y0: usize, w: usize, h: usize, v: u8) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.set(x, y, v);
            }
        }
    }

    /// White A4-proportioned sheet (420x297 px, 20 px/cm) beside a white
    /// 60x500 px foot silhouette on a black background.
    fn synthetic_scene() -> GrayImage {
        let mut img = GrayImage::new(700, 620);
        fill_rect(&mut img, 40, 40, 420, 297, 255);
        fill_rect(&mut img, 520, 60, 60, 500, 255);
        img
    }

    #[test]
    fn measures_the_synthetic_scene() {
        let img = synthetic_scene();
        let m = FootMeasurer::new(MeasureParams::default())
            .measure(&img.view())
            .unwrap();
        assert!(
            (m.foot_length_cm - 25.0).abs() < 0.2,
            "foot length {} cm",
            m.foot_length_cm
        );
        assert!(m.reference_box.width > m.subject_box.width);
        assert_eq!(m.shoe_size(), 39);
    }

    #[test]
    fn measurement_is_scale_invariant() {
        // Halving every dimension halves both the reference width and the
        // subject height, leaving the ratio unchanged.
        let mut img = GrayImage::new(350, 310);
        fill_rect(&mut img, 20, 20, 210, 148, 255);
        fill_rect(&mut img, 260, 30, 30, 250, 255);
        let m = FootMeasurer::new(MeasureParams::default())
            .measure(&img.view())
            .unwrap();
        assert!(
            (m.foot_length_cm - 25.0).abs() < 0.2,
            "foot length {} cm",
            m.foot_length_cm
        );
    }

    #[test]
    fn blank_image_reports_insufficient_contours() {
        let img = GrayImage::new(200, 200);
        let err = FootMeasurer::new(MeasureParams::default())
            .measure(&img.view())
            .unwrap_err();
        assert!(matches!(
            err,
            MeasureError::InsufficientContours { found: 0 }
        ));
    }

    #[test]
    fn single_object_reports_insufficient_contours() {
        let mut img = GrayImage::new(300, 300);
        fill_rect(&mut img, 50, 50, 100, 150, 255);
        let err = FootMeasurer::new(MeasureParams::default())
            .measure(&img.view())
            .unwrap_err();
        assert!(matches!(err, MeasureError::InsufficientContours { found: 1 }));
    }

    #[test]
    fn min_contour_area_filters_specks() {
        let mut img = synthetic_scene();
        // A couple of bright specks that produce tiny contours.
        fill_rect(&mut img, 10, 600, 3, 3, 255);
        fill_rect(&mut img, 680, 10, 3, 3, 255);
        let params = MeasureParams {
            min_contour_area: 1000.0,
            ..MeasureParams::default()
        };
        let m = FootMeasurer::new(params).measure(&img.view()).unwrap();
        assert!((m.foot_length_cm - 25.0).abs() < 0.2);
    }

    #[test]
    fn plausibility_bounds_reject_out_of_range_lengths() {
        let img = synthetic_scene();
        let params = MeasureParams {
            min_plausible_cm: 30.0,
            max_plausible_cm: 50.0,
            ..MeasureParams::default()
        };
        let err = FootMeasurer::new(params).measure(&img.view()).unwrap_err();
        assert!(matches!(
            err,
            MeasureError::ImplausibleMeasurement { .. }
        ));
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let img = synthetic_scene();
        let measurer = FootMeasurer::new(MeasureParams::default());
        let a = measurer.measure(&img.view()).unwrap();
        let b = measurer.measure(&img.view()).unwrap();
        assert_eq!(a.foot_length_cm, b.foot_length_cm);
        assert_eq!(a.reference_box, b.reference_box);
        assert_eq!(a.subject_box, b.subject_box);
    }
}
