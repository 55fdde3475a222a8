//! Grayscale reduction and noise suppression.

use footsize_core::{get_replicated, GrayImage, GrayImageView};

// BT.601 luminance weights in 8-bit fixed point (0.299, 0.587, 0.114).
const LUMA_R: u32 = 77;
const LUMA_G: u32 = 150;
const LUMA_B: u32 = 29;

/// Reduce an interleaved RGB8 buffer to a single luminance channel.
///
/// Returns `None` when the buffer length does not match
/// `width * height * 3`.
pub fn luma_from_rgb(width: usize, height: usize, rgb: &[u8]) -> Option<GrayImage> {
    if rgb.len() != width * height * 3 {
        return None;
    }
    let data = rgb
        .chunks_exact(3)
        .map(|px| {
            let luma = LUMA_R * px[0] as u32 + LUMA_G * px[1] as u32 + LUMA_B * px[2] as u32;
            ((luma + 128) >> 8) as u8
        })
        .collect();
    GrayImage::from_raw(width, height, data)
}

/// One-dimensional Gaussian kernel of size `2 * radius + 1`, normalized to
/// unit sum. A non-positive sigma derives the value OpenCV uses for its
/// default: `0.3 * ((ksize - 1) / 2 - 1) + 0.8`.
fn gaussian_kernel(radius: usize, sigma: f32) -> Vec<f32> {
    let ksize = 2 * radius + 1;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - radius as f32;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Separable Gaussian blur with border replication.
///
/// `ksize` is the side length of the square kernel; even values round down
/// to the next odd size. `sigma <= 0` derives sigma from the kernel size.
pub fn gaussian_blur(src: &GrayImageView<'_>, ksize: usize, sigma: f32) -> GrayImage {
    let radius = ksize.saturating_sub(1) / 2;
    if radius == 0 {
        return GrayImage {
            width: src.width,
            height: src.height,
            data: src.data.to_vec(),
        };
    }
    let kernel = gaussian_kernel(radius, sigma);
    let (w, h) = (src.width, src.height);

    // Horizontal pass into an f32 buffer; rounding happens once, after the
    // vertical pass.
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (i, wk) in kernel.iter().enumerate() {
                let sx = x as i32 + i as i32 - radius as i32;
                acc += wk * get_replicated(src, sx, y as i32) as f32;
            }
            tmp[y * w + x] = acc;
        }
    }

    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (i, wk) in kernel.iter().enumerate() {
                let sy = (y as i32 + i as i32 - radius as i32).clamp(0, h as i32 - 1) as usize;
                acc += wk * tmp[sy * w + x];
            }
            out.set(x, y, (acc + 0.5).clamp(0.0, 255.0) as u8);
        }
    }
    out
}
