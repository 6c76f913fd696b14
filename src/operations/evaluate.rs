use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::Container;
use crate::math::level_2d::level_intersect;
use crate::math::rotate_2d::rotate_about;
use crate::math::vector_2d::distance;
use crate::math::Point2;

/// A liquid volume in cm³, or the unbounded sentinel for the degenerate
/// lying-flat state.
///
/// `Unbounded` is a legitimate physical boundary, not a fault: the sealed
/// glass on its long side holds no representable finite amount. It orders
/// greater than every finite volume, which is what bisection needs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Volume {
    Finite(f64),
    Unbounded,
}

impl Volume {
    /// Returns `true` for the unbounded sentinel.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns the finite value, or `None` for the unbounded sentinel.
    #[must_use]
    pub fn finite(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v:.2}"),
            Self::Unbounded => f.write_str("∞"),
        }
    }
}

/// Everything the volume model derives from one tilt angle.
///
/// Polygons are in the same physical-unit coordinate space as the
/// [`Container`]; any display transform is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Container corners after rotation about the pivot, winding preserved.
    pub tilted_corners: [Point2; 4],
    /// Open-variant water polygon, in untilted coordinates.
    pub open_water: [Point2; 4],
    /// Sealed-variant water triangle `[intersection, pivot corner, low
    /// corner]`, or `None` in the degenerate lying-flat state.
    pub sealed_water: Option<[Point2; 3]>,
    /// Open-variant volume in cm³: base area times the fill level.
    pub open_volume: f64,
    /// Sealed-variant volume in cm³, or [`Volume::Unbounded`].
    pub sealed_volume: Volume,
}

/// Computes the liquid cross-sections and volumes of both glass variants at
/// one tilt angle.
///
/// Both variants share a single reference height, the "level": the world
/// height of tilted corner 2. It stands for the fill height before any
/// tilting was applied and couples the two variants.
///
/// - The open glass spills, so its surface stays at the level and its polygon
///   lives in untilted coordinates. Volume is the right prism
///   `base_area * level`. The polygon is deliberately not clamped to the
///   container height; for steep angles it extends above the rim.
/// - The sealed glass traps the liquid in the tilted lower corner. The
///   surface crosses the former-left wall (edge 0-1) at the level; the
///   volume is the triangular wedge `base_area * wetted / 2`, where `wetted`
///   is the length of wall below the surface. When that wall is effectively
///   horizontal the volume is [`Volume::Unbounded`].
pub struct Evaluate<'a> {
    container: &'a Container,
    angle_deg: f64,
}

impl<'a> Evaluate<'a> {
    /// Creates a new evaluation at `angle_deg` degrees of tilt.
    #[must_use]
    pub fn new(container: &'a Container, angle_deg: f64) -> Self {
        Self {
            container,
            angle_deg,
        }
    }

    /// Executes the evaluation.
    ///
    /// Pure: identical inputs give identical outputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is outside `[0, 90]` degrees. The model
    /// never clamps silently.
    pub fn execute(&self) -> Result<Evaluation> {
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "angle_deg",
                value: self.angle_deg,
                min: 0.0,
                max: 90.0,
            }
            .into());
        }

        let corners = self.container.corners();
        let pivot = self.container.pivot();

        // The glass tips its far wall upward in y-up physical coordinates;
        // rotate_about turns clockwise, so pass the supplement.
        let tilt = 360.0 - self.angle_deg;
        let tilted_corners = [
            rotate_about(corners[0], tilt, pivot),
            rotate_about(corners[1], tilt, pivot),
            rotate_about(corners[2], tilt, pivot),
            rotate_about(corners[3], tilt, pivot),
        ];

        let level = tilted_corners[2].y;

        let open_water = [
            Point2::new(corners[0].x, level),
            corners[1],
            corners[2],
            Point2::new(corners[3].x, level),
        ];
        let open_volume = self.container.base_area() * level;

        let hit = level_intersect(
            tilted_corners[0],
            tilted_corners[1],
            level,
            self.container.edge_tolerance(),
        );
        let (sealed_water, sealed_volume) = match hit {
            Some(hit) => {
                let wetted = distance(hit, tilted_corners[1]);
                (
                    Some([hit, tilted_corners[1], tilted_corners[2]]),
                    Volume::Finite(self.container.base_area() * wetted / 2.0),
                )
            }
            None => (None, Volume::Unbounded),
        };

        Ok(Evaluation {
            tilted_corners,
            open_water,
            sealed_water,
            open_volume,
            sealed_volume,
        })
    }
}
