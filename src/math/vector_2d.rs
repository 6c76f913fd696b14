use super::{Point2, Vector2};

/// Translates point `a` by vector `v`.
#[must_use]
pub fn add(a: Point2, v: Vector2) -> Point2 {
    a + v
}

/// Scales vector `v` by factor `k`.
#[must_use]
pub fn scale(v: Vector2, k: f64) -> Vector2 {
    v * k
}

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point2, b: Point2) -> f64 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}
