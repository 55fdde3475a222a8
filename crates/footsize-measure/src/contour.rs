//! Outer-boundary tracing of connected edge regions.

use footsize_core::{Contour, EdgeMap};
use nalgebra::Point2;

// 8-neighborhood in clockwise order starting east (image coordinates,
// y grows downward).
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Trace the outermost closed boundary of every 8-connected edge region.
///
/// One contour per connected component; boundaries of holes inside a region
/// are discarded. Components are discovered in row-major scan order, which
/// makes the output order deterministic. Each boundary is compressed so that
/// only direction-change vertices remain.
pub fn find_external_contours(map: &EdgeMap) -> Vec<Contour> {
    let (w, h) = (map.width, map.height);
    let mut visited = vec![false; w * h];
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if !map.is_edge(x, y) || visited[y * w + x] {
                continue;
            }
            // First pixel of a new component in scan order; everything above
            // and to its left is background, so the Moore trace can start
            // with a west backtrack.
            let pixels = mark_component(map, &mut visited, x, y);
            let boundary = trace_boundary(map, Point2::new(x as i32, y as i32), pixels);
            contours.push(Contour::new(compress_chain(boundary)));
        }
    }
    contours
}

/// Flood-fill one component, marking every pixel visited. Returns the pixel
/// count, used to bound the boundary walk.
fn mark_component(map: &EdgeMap, visited: &mut [bool], x: usize, y: usize) -> usize {
    let (w, h) = (map.width, map.height);
    let mut stack = vec![(x, y)];
    visited[y * w + x] = true;
    let mut count = 0usize;
    while let Some((cx, cy)) = stack.pop() {
        count += 1;
        for (dx, dy) in DIRS {
            let nx = cx as i32 + dx;
            let ny = cy as i32 + dy;
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if map.is_edge(nx, ny) && !visited[ny * w + nx] {
                visited[ny * w + nx] = true;
                stack.push((nx, ny));
            }
        }
    }
    count
}

#[inline]
fn edge_at(map: &EdgeMap, p: Point2<i32>, d: usize) -> Option<Point2<i32>> {
    let (dx, dy) = DIRS[d];
    let q = Point2::new(p.x + dx, p.y + dy);
    if q.x < 0 || q.y < 0 || q.x >= map.width as i32 || q.y >= map.height as i32 {
        return None;
    }
    if map.is_edge(q.x as usize, q.y as usize) {
        Some(q)
    } else {
        None
    }
}

/// Moore-neighbor boundary trace, clockwise, terminated by Jacob's
/// criterion: stop when the start pixel is about to be left in the same
/// direction as the first move.
fn trace_boundary(map: &EdgeMap, start: Point2<i32>, component_pixels: usize) -> Vec<Point2<i32>> {
    let mut points = vec![start];

    // First move: the backtrack is west of the start pixel, scan clockwise
    // from north-west.
    let mut first = None;
    for i in 0..8 {
        let d = (5 + i) % 8;
        if let Some(q) = edge_at(map, start, d) {
            first = Some((d, q));
            break;
        }
    }
    let Some((first_dir, mut cur)) = first else {
        return points; // isolated pixel
    };
    points.push(cur);

    let mut prev_dir = first_dir;
    let max_steps = 8 * component_pixels + 8;
    while points.len() <= max_steps {
        // Resume the clockwise scan one past the backtrack neighbor.
        let mut found = None;
        let mut d = (prev_dir + 6) % 8;
        for _ in 0..8 {
            if let Some(q) = edge_at(map, cur, d) {
                found = Some((d, q));
                break;
            }
            d = (d + 1) % 8;
        }
        let Some((d, next)) = found else {
            break; // unreachable for components of 2+ pixels
        };
        if cur == start && d == first_dir {
            break; // about to repeat the initial move
        }
        points.push(next);
        cur = next;
        prev_dir = d;
    }

    // The walk re-appends the start pixel when it closes the loop.
    while points.len() > 1 && points.last() == points.first() {
        points.pop();
    }
    points
}

/// Drop vertices whose incoming and outgoing chain directions are equal,
/// keeping only the endpoints of collinear runs (cyclically).
fn compress_chain(points: Vec<Point2<i32>>) -> Vec<Point2<i32>> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let din = (points[i].x - prev.x, points[i].y - prev.y);
        let dout = (next.x - points[i].x, next.y - points[i].y);
        if din != dout {
            out.push(points[i]);
        }
    }
    if out.is_empty() {
        // Cannot happen for a closed chain, but never return nothing for a
        // non-empty input.
        out.push(points[0]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn map_from_rows(rows: &[&str]) -> EdgeMap {
        let h = rows.len();
        let w = rows[0].len();
        let mut map = EdgeMap::new(w, h);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    map.mark(x, y);
                }
            }
        }
        map
    }

    /// Hollow rectangle ring spanning `x0..=x1` x `y0..=y1`.
    fn ring(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> EdgeMap {
        let mut map = EdgeMap::new(w, h);
        for x in x0..=x1 {
            map.mark(x, y0);
            map.mark(x, y1);
        }
        for y in y0..=y1 {
            map.mark(x0, y);
            map.mark(x1, y);
        }
        map
    }

    #[test]
    fn empty_map_has_no_contours() {
        let map = EdgeMap::new(8, 8);
        assert!(find_external_contours(&map).is_empty());
    }

    #[test]
    fn rectangle_ring_compresses_to_four_corners() {
        let map = ring(20, 15, 3, 2, 14, 11);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.points.len(), 4, "vertices: {:?}", c.points);
        let bbox = c.bounding_box().unwrap();
        assert_eq!(bbox.x, 3);
        assert_eq!(bbox.y, 2);
        assert_eq!(bbox.width, 12);
        assert_eq!(bbox.height, 10);
        assert_relative_eq!(c.area(), 11.0 * 9.0);
    }

    #[test]
    fn inner_hole_boundary_is_discarded() {
        // Two-pixel-thick ring: one component with a hole. Only the outer
        // boundary may be reported, and the box must span the outer extent.
        let mut map = ring(20, 20, 2, 2, 17, 17);
        for x in 3..=16 {
            map.mark(x, 3);
            map.mark(x, 16);
        }
        for y in 3..=16 {
            map.mark(3, y);
            map.mark(16, y);
        }
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (16, 16));
    }

    #[test]
    fn separate_components_yield_separate_contours() {
        let mut map = ring(40, 20, 2, 2, 12, 12);
        for x in 20..=30 {
            for y in 5..=9 {
                map.mark(x, y);
            }
        }
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 2);
        // Row-major discovery: the ring starts at (2, 2), the block at (20, 5).
        assert_eq!(contours[0].bounding_box().unwrap().x, 2);
        assert_eq!(contours[1].bounding_box().unwrap().x, 20);
        assert_eq!(contours[1].bounding_box().unwrap().width, 11);
        assert_eq!(contours[1].bounding_box().unwrap().height, 5);
    }

    #[test]
    fn filled_block_traces_its_outline() {
        let map = map_from_rows(&["....", ".##.", ".##.", "...."]);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (2, 2));
        assert_relative_eq!(contours[0].area(), 1.0);
    }

    #[test]
    fn isolated_pixel_is_a_single_point_contour() {
        let map = map_from_rows(&["...", ".#.", "..."]);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, vec![Point2::new(1, 1)]);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn one_pixel_wide_line_has_zero_area_and_full_extent() {
        let map = map_from_rows(&[".....", ".###.", "....."]);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.area(), 0.0);
        let bbox = c.bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (3, 1));
    }

    #[test]
    fn diagonal_line_is_one_component() {
        let map = map_from_rows(&["#....", ".#...", "..#..", "...#.", "....#"]);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (5, 5));
    }

    #[test]
    fn l_shaped_region_keeps_its_corners() {
        let map = map_from_rows(&["#...", "#...", "#...", "####"]);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (4, 4));
        // Corner count for an L traced on its skeleton.
        assert!(contours[0].points.len() >= 3);
    }

    #[test]
    fn boundary_touching_the_image_border_still_closes() {
        let map = ring(10, 8, 0, 0, 9, 7);
        let contours = find_external_contours(&map);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.width, bbox.height), (10, 8));
    }
}
