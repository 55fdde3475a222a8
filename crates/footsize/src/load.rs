//! Image loading and end-to-end helpers.

use std::path::Path;

use footsize_core::GrayImage;
use footsize_measure::{preprocess, FootMeasurer, MeasureError, MeasureParams, Measurement};
use log::info;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Extensions accepted before decoding is attempted (case-insensitive).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Errors produced by the end-to-end helpers.
#[derive(thiserror::Error, Debug)]
pub enum FootsizeError {
    /// The path's extension is outside the supported set; the file is not
    /// opened.
    #[error("unsupported image extension on {path}")]
    UnsupportedFormat { path: String },
    /// The path could not be read or decoded as a raster image.
    #[error("unable to load image: {0}")]
    Unreadable(#[from] image::ImageError),
    /// The file decoded to a zero-sized pixel grid.
    #[error("image decodes to an empty pixel grid")]
    EmptyImage,
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// Whether the path carries one of the supported raster extensions.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.iter().any(|s| e.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}

/// Decode an image file and reduce it to a grayscale buffer.
pub fn load_gray(path: &Path) -> Result<GrayImage, FootsizeError> {
    let decoded = image::open(path)?;
    let rgb = decoded.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(FootsizeError::EmptyImage);
    }
    preprocess::luma_from_rgb(w as usize, h as usize, rgb.as_raw())
        .ok_or(FootsizeError::EmptyImage)
}

/// Measure a foot photograph on disk.
///
/// The extension is validated before any decoding happens; unsupported
/// formats are rejected without touching the file contents.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(params), fields(path = %path.display()))
)]
pub fn measure_file(path: &Path, params: &MeasureParams) -> Result<Measurement, FootsizeError> {
    if !is_supported_extension(path) {
        return Err(FootsizeError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }
    let gray = load_gray(path)?;
    info!(
        "loaded {} ({}x{} px)",
        path.display(),
        gray.width,
        gray.height
    );
    let measurer = FootMeasurer::new(params.clone());
    Ok(measurer.measure(&gray.view())?)
}

/// Measure an already-decoded image.
pub fn measure_image(
    img: &image::DynamicImage,
    params: &MeasureParams,
) -> Result<Measurement, FootsizeError> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(FootsizeError::EmptyImage);
    }
    let gray = preprocess::luma_from_rgb(w as usize, h as usize, rgb.as_raw())
        .ok_or(FootsizeError::EmptyImage)?;
    let measurer = FootMeasurer::new(params.clone());
    Ok(measurer.measure(&gray.view())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        for name in ["foot.jpg", "foot.JPG", "foot.jpeg", "foot.JpEg", "foot.png", "FOOT.PNG"] {
            assert!(is_supported_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["foot.gif", "foot.webp", "foot.bmp", "foot.tiff", "foot", "foot.jpg.txt"] {
            assert!(!is_supported_extension(Path::new(name)), "{name}");
        }
    }
}
