//! Contours and axis-aligned bounding boxes.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Closed outer boundary of one connected edge region.
///
/// Vertices are stored in clockwise trace order and compressed so that only
/// direction changes remain; runs of collinear boundary pixels are
/// represented by their endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<i32>>) -> Self {
        Self { points }
    }

    /// Enclosed area of the closed vertex polygon (shoelace formula).
    ///
    /// Compression does not change the value: dropped vertices lie on the
    /// segments between the kept ones.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0i64;
        for (i, p) in self.points.iter().enumerate() {
            let q = &self.points[(i + 1) % self.points.len()];
            twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
        }
        twice_area.abs() as f64 / 2.0
    }

    /// Smallest axis-aligned rectangle enclosing the contour, or `None` for
    /// an empty contour.
    ///
    /// Extents are inclusive pixel counts: a contour covering columns
    /// `x0..=x1` has `width = x1 - x0 + 1`.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(BoundingBox {
            x: min.x as u32,
            y: min.y as u32,
            width: (max.x - min.x + 1) as u32,
            height: (max.y - min.y + 1) as u32,
        })
    }
}

/// Axis-aligned bounding box in pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Width over height. A zero-height box maps to `f64::INFINITY`.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return f64::INFINITY;
        }
        self.width as f64 / self.height as f64
    }
}
