//! Gradient-magnitude edge detection with dual-threshold hysteresis.

use footsize_core::{get_replicated, EdgeMap, GrayImageView};

/// Binary edge map from a smoothed grayscale image.
///
/// Sobel 3x3 gradients, L1 magnitude (`|gx| + |gy|`), non-maximum
/// suppression along the gradient direction, then hysteresis: magnitudes
/// above `high` seed edges, magnitudes in `(low, high]` are kept only when
/// 8-connected to a seed, magnitudes at or below `low` never survive.
pub fn canny(src: &GrayImageView<'_>, low: f32, high: f32) -> EdgeMap {
    let (w, h) = (src.width, src.height);
    let mut edges = EdgeMap::new(w, h);
    if w < 2 || h < 2 {
        return edges;
    }

    let mut gx = vec![0.0f32; w * h];
    let mut gy = vec![0.0f32; w * h];
    let mut mag = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let p = |dx: i32, dy: i32| get_replicated(src, x as i32 + dx, y as i32 + dy) as f32;
            let sx = (p(1, -1) + 2.0 * p(1, 0) + p(1, 1)) - (p(-1, -1) + 2.0 * p(-1, 0) + p(-1, 1));
            let sy = (p(-1, 1) + 2.0 * p(0, 1) + p(1, 1)) - (p(-1, -1) + 2.0 * p(0, -1) + p(1, -1));
            let i = y * w + x;
            gx[i] = sx;
            gy[i] = sy;
            mag[i] = sx.abs() + sy.abs();
        }
    }

    // Non-maximum suppression: keep a pixel only if it is the ridge of its
    // gradient profile. The asymmetric comparison (strict against the
    // forward neighbor) thins two-pixel plateaus to a single pixel.
    let mut thin = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if mag[i] <= low {
                continue;
            }
            let (dx, dy) = gradient_sector(gx[i], gy[i]);
            let fwd = neighbor_mag(&mag, w, h, x, y, dx, dy);
            let bwd = neighbor_mag(&mag, w, h, x, y, -dx, -dy);
            if mag[i] > fwd && mag[i] >= bwd {
                thin[i] = mag[i];
            }
        }
    }

    // Hysteresis: flood from strong pixels through connected weak ones.
    let mut stack = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if thin[y * w + x] > high && !edges.is_edge(x, y) {
                edges.mark(x, y);
                stack.push((x, y));
                while let Some((cx, cy)) = stack.pop() {
                    for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                        for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                            if thin[ny * w + nx] > low && !edges.is_edge(nx, ny) {
                                edges.mark(nx, ny);
                                stack.push((nx, ny));
                            }
                        }
                    }
                }
            }
        }
    }
    edges
}

/// Quantize the gradient direction to one of four sectors and return the
/// unit step toward the forward neighbor.
fn gradient_sector(gx: f32, gy: f32) -> (i32, i32) {
    let mut theta = gy.atan2(gx).to_degrees();
    if theta < 0.0 {
        theta += 180.0;
    }
    if theta >= 180.0 {
        theta -= 180.0;
    }
    if !(22.5..157.5).contains(&theta) {
        (1, 0)
    } else if theta < 67.5 {
        (1, 1)
    } else if theta < 112.5 {
        (0, 1)
    } else {
        (-1, 1)
    }
}

#[inline]
fn neighbor_mag(mag: &[f32], w: usize, h: usize, x: usize, y: usize, dx: i32, dy: i32) -> f32 {
    let nx = x as i32 + dx;
    let ny = y as i32 + dy;
    if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
        return 0.0;
    }
    mag[ny as usize * w + nx as usize]
}
