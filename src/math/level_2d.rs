use super::Point2;

/// Intersects the line through `p0` and `p1` with the horizontal line
/// `y = level`.
///
/// Uses the interpolation parameter `k = (level - p1.y) / (p0.y - p1.y)`, so
/// `k = 0` lands on `p1` and `k = 1` on `p0`. The result is not clamped to
/// the segment: `k` outside `[0, 1]` extrapolates along the edge.
///
/// Returns `None` when `|p0.y - p1.y| < edge_tolerance`: the edge is
/// effectively horizontal and no stable finite intersection exists. Callers
/// must report this as an unbounded result, never as a finite artifact.
#[must_use]
pub fn level_intersect(
    p0: Point2,
    p1: Point2,
    level: f64,
    edge_tolerance: f64,
) -> Option<Point2> {
    let dy = p0.y - p1.y;
    if dy.abs() < edge_tolerance {
        return None;
    }
    let k = (level - p1.y) / dy;
    Some(Point2::new(k * p0.x + (1.0 - k) * p1.x, level))
}
