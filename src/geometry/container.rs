use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// Reference rendering scale: display pixels per base diameter. The
/// degenerate-edge threshold is one pixel-equivalent at this scale.
const REFERENCE_DIAMETER_PX: f64 = 100.0;

/// Axial cross-section of the cylindrical glass, in physical centimetres.
///
/// The four corners are stored in a fixed winding order: top-left,
/// bottom-left, bottom-right, top-right. Corner 1 (bottom-left) is the pivot
/// held in place while the glass tilts; this ordering is never re-sorted and
/// edge `0-1` always names the wall that was on the left before tilting.
///
/// Immutable after construction: one `Container` is the configuration for
/// every angle evaluation against it.
#[derive(Debug, Clone)]
pub struct Container {
    corners: [Point2; 4],
    base_area: f64,
    diameter: f64,
    height: f64,
}

impl Container {
    /// Creates the cross-section of a cylinder with the given base area
    /// (cm²) and height-to-base-diameter ratio.
    ///
    /// The base diameter is `2 * sqrt(base_area / pi)` and the height is
    /// `height_ratio` diameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_area` or `height_ratio` is not positive.
    pub fn new(base_area: f64, height_ratio: f64) -> Result<Self> {
        if base_area < TOLERANCE {
            return Err(
                GeometryError::Degenerate("base area must be positive".into()).into(),
            );
        }
        if height_ratio < TOLERANCE {
            return Err(
                GeometryError::Degenerate("height ratio must be positive".into()).into(),
            );
        }
        Ok(Self::from_parts(base_area, height_ratio))
    }

    /// The canonical glass of the puzzle: base area 3π cm², height 2.5
    /// base diameters.
    #[must_use]
    pub fn default_puzzle() -> Self {
        Self::from_parts(3.0 * PI, 2.5)
    }

    fn from_parts(base_area: f64, height_ratio: f64) -> Self {
        let diameter = 2.0 * (base_area / PI).sqrt();
        let height = height_ratio * diameter;
        let corners = [
            Point2::new(0.0, height),
            Point2::new(0.0, 0.0),
            Point2::new(diameter, 0.0),
            Point2::new(diameter, height),
        ];
        Self {
            corners,
            base_area,
            diameter,
            height,
        }
    }

    /// Returns the corners in winding order: top-left, bottom-left,
    /// bottom-right, top-right.
    #[must_use]
    pub fn corners(&self) -> &[Point2; 4] {
        &self.corners
    }

    /// Returns the base cross-sectional area in cm².
    #[must_use]
    pub fn base_area(&self) -> f64 {
        self.base_area
    }

    /// Returns the base diameter in cm.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns the container height in cm.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the rotation pivot: the bottom-left corner.
    #[must_use]
    pub fn pivot(&self) -> Point2 {
        self.corners[1]
    }

    /// Returns the threshold below which a tilted edge counts as horizontal:
    /// one display-pixel equivalent at the reference scale of 100 pixels per
    /// base diameter.
    #[must_use]
    pub fn edge_tolerance(&self) -> f64 {
        self.diameter / REFERENCE_DIAMETER_PX
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_radius_dimensions() {
        // Base area pi gives radius 1, diameter 2.
        let c = Container::new(PI, 2.0).unwrap();
        assert!((c.diameter() - 2.0).abs() < TOLERANCE);
        assert!((c.height() - 4.0).abs() < TOLERANCE);
        assert!((c.base_area() - PI).abs() < TOLERANCE);
    }

    #[test]
    fn corner_winding_order() {
        let c = Container::new(PI, 2.0).unwrap();
        let [tl, bl, br, tr] = *c.corners();
        assert!(tl.x.abs() < TOLERANCE && (tl.y - 4.0).abs() < TOLERANCE);
        assert!(bl.x.abs() < TOLERANCE && bl.y.abs() < TOLERANCE);
        assert!((br.x - 2.0).abs() < TOLERANCE && br.y.abs() < TOLERANCE);
        assert!((tr.x - 2.0).abs() < TOLERANCE && (tr.y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn pivot_is_bottom_left() {
        let c = Container::new(PI, 2.0).unwrap();
        assert!(c.pivot() == c.corners()[1]);
        assert!(c.pivot() == Point2::new(0.0, 0.0));
    }

    #[test]
    fn default_puzzle_geometry() {
        let c = Container::default_puzzle();
        assert!((c.base_area() - 3.0 * PI).abs() < TOLERANCE);
        // d = 2 * sqrt(3), h = 2.5 d.
        let d = 2.0 * 3.0_f64.sqrt();
        assert!((c.diameter() - d).abs() < 1e-9);
        assert!((c.height() - 2.5 * d).abs() < 1e-9);
    }

    #[test]
    fn edge_tolerance_is_a_hundredth_of_diameter() {
        let c = Container::new(PI, 2.0).unwrap();
        assert!((c.edge_tolerance() - 0.02).abs() < TOLERANCE);
    }

    #[test]
    fn non_positive_area_is_rejected() {
        assert!(Container::new(0.0, 2.0).is_err());
        assert!(Container::new(-1.0, 2.0).is_err());
    }

    #[test]
    fn non_positive_ratio_is_rejected() {
        assert!(Container::new(PI, 0.0).is_err());
        assert!(Container::new(PI, -2.5).is_err());
    }
}
