//! Geometry primitives and grid math for the assembly engine.
//!
//! Positions are real-valued: modules sit on integer grid cells when placed
//! or dragged, but group rotation produces fractional coordinates that are
//! deliberately never re-snapped. All spatial predicates therefore work on
//! `f64` positions with grid-unit thresholds rather than on integer cells.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// The fixed spacing between valid placement cells, in world units.
pub const GRID_SIZE: f64 = 1.0;

/// Y coordinate of the ground plane that drop placement is constrained to.
pub const BASE_PLANE_Y: f64 = 0.0;

/// A 3D position or displacement with X, Y, and Z components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector with the given components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculates the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Per-axis absolute difference to another position.
    pub fn abs_diff(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            (self.x - other.x).abs(),
            (self.y - other.y).abs(),
            (self.z - other.z).abs(),
        )
    }

    /// Component-wise scale by a scalar.
    pub fn scaled(&self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        self.scaled(rhs)
    }
}

/// Arithmetic mean of a set of positions.
///
/// Returns the origin for an empty slice; callers dealing with groups never
/// pass one (a group has at least one member).
pub fn centroid(positions: &[Vec3]) -> Vec3 {
    if positions.is_empty() {
        return Vec3::default();
    }
    let sum = positions
        .iter()
        .fold(Vec3::default(), |acc, p| acc + *p);
    sum.scaled(1.0 / positions.len() as f64)
}

/// Quantizes a world position to the placement grid.
///
/// X and Z are rounded to the nearest cell; Y is pinned to the base plane.
/// Drop placement is ground-constrained, so this is the only quantization
/// the planner ever applies.
pub fn snap_to_base_grid(world: Vec3) -> Vec3 {
    Vec3::new(world.x.round(), BASE_PLANE_Y, world.z.round())
}

/// Quantizes the horizontal components of a position, keeping Y unchanged.
///
/// Used at drag release: a module lifted out of the base plane by a group
/// rotation keeps its height, only X and Z snap back to the grid.
pub fn snap_xz(position: Vec3) -> Vec3 {
    Vec3::new(position.x.round(), position.y, position.z.round())
}
