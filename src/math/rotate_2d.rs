use super::Point2;

/// Rotates `point` about `pivot` by `angle_deg`.
///
/// The matrix angle is `360 - angle_deg` converted to radians, so increasing
/// angles turn clockwise relative to the mathematical positive direction.
/// Callers tilting the container in y-up physical coordinates pass the
/// supplement `360 - theta` so the far wall tips upward.
///
/// `rotate_about(pivot, angle_deg, pivot) == pivot` holds exactly for every
/// angle; the volume model relies on the pivot corner never moving.
#[must_use]
pub fn rotate_about(point: Point2, angle_deg: f64, pivot: Point2) -> Point2 {
    let a = (360.0 - angle_deg).to_radians();
    let (sin, cos) = a.sin_cos();

    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;

    Point2::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector_2d::distance;
    use crate::math::TOLERANCE;

    #[test]
    fn pivot_is_fixed_point_exactly() {
        let pivot = Point2::new(1.25, -3.5);
        for i in 0..=90 {
            let p = rotate_about(pivot, f64::from(i), pivot);
            assert!(p == pivot, "pivot moved at {i} degrees: {p:?}");
        }
    }

    #[test]
    fn full_turn_is_identity_exactly() {
        // 360 - 360 = 0 radians, so no rounding at all.
        let p = rotate_about(Point2::new(2.0, 5.0), 360.0, Point2::new(1.0, 1.0));
        assert!(p == Point2::new(2.0, 5.0));
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        let p = rotate_about(Point2::new(1.0, 0.0), 90.0, Point2::new(0.0, 0.0));
        assert!(p.x.abs() < TOLERANCE, "x={}", p.x);
        assert!((p.y + 1.0).abs() < TOLERANCE, "y={}", p.y);
    }

    #[test]
    fn supplement_turns_counter_clockwise() {
        // Tilting by theta means rotating by 360 - theta.
        let p = rotate_about(Point2::new(1.0, 0.0), 360.0 - 90.0, Point2::new(0.0, 0.0));
        assert!(p.x.abs() < TOLERANCE, "x={}", p.x);
        assert!((p.y - 1.0).abs() < TOLERANCE, "y={}", p.y);
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let pivot = Point2::new(2.0, -1.0);
        let p = Point2::new(5.0, 3.0);
        let r = distance(p, pivot);
        for i in 0..=18 {
            let q = rotate_about(p, f64::from(i) * 5.0, pivot);
            assert!(
                (distance(q, pivot) - r).abs() < 1e-9,
                "radius drifted at {} degrees",
                i * 5
            );
        }
    }

    #[test]
    fn off_origin_pivot() {
        // (2, 1) about (1, 1) by a clockwise quarter turn lands at (1, 0).
        let p = rotate_about(Point2::new(2.0, 1.0), 90.0, Point2::new(1.0, 1.0));
        assert!((p.x - 1.0).abs() < TOLERANCE, "x={}", p.x);
        assert!(p.y.abs() < TOLERANCE, "y={}", p.y);
    }
}
