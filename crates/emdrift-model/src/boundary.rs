//! Containment regions that gate the drive loop.

use emdrift_math::Vec3;
use serde::{Deserialize, Serialize};

/// Region the particle must stay inside for the simulation to keep
/// stepping.
///
/// All containment tests use strict inequalities: a particle sitting
/// exactly on a wall counts as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// Axis-aligned box centered at the origin, given by half-extents.
    Box {
        half_x: f64,
        half_y: f64,
        half_z: f64,
    },
    /// Cylinder along +x, one cap at x = 0, the other at x = length.
    Pipe { radius: f64, length: f64 },
}

impl Boundary {
    /// Box from full side lengths (the lecture scripts speak in full
    /// extents).
    pub fn box_from_extents(xlen: f64, ylen: f64, zlen: f64) -> Self {
        Boundary::Box {
            half_x: xlen / 2.0,
            half_y: ylen / 2.0,
            half_z: zlen / 2.0,
        }
    }

    /// Strict containment test.
    pub fn contains(&self, p: &Vec3) -> bool {
        match *self {
            Boundary::Box {
                half_x,
                half_y,
                half_z,
            } => p.x.abs() < half_x && p.y.abs() < half_y && p.z.abs() < half_z,
            Boundary::Pipe { radius, length } => {
                (p.y * p.y + p.z * p.z).sqrt() < radius && p.x > 0.0 && p.x < length
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_contains_origin() {
        let b = Boundary::box_from_extents(100.0, 100.0, 100.0);
        assert!(b.contains(&Vec3::zeros()));
        assert!(b.contains(&Vec3::new(49.9, -49.9, 49.9)));
    }

    #[test]
    fn test_box_wall_is_out_of_bounds() {
        // Exactly on the wall must count as out; just inside must count as in.
        let b = Boundary::box_from_extents(100.0, 100.0, 100.0);
        assert!(!b.contains(&Vec3::new(0.0, 50.0, 0.0)));
        assert!(!b.contains(&Vec3::new(0.0, -50.0, 0.0)));
        assert!(b.contains(&Vec3::new(0.0, 50.0 - 1e-9, 0.0)));
        assert!(!b.contains(&Vec3::new(50.0, 0.0, 0.0)));
        assert!(!b.contains(&Vec3::new(0.0, 0.0, -50.0)));
    }

    #[test]
    fn test_pipe_contains_axis_point() {
        let p = Boundary::Pipe {
            radius: 100.0,
            length: 200.0,
        };
        assert!(p.contains(&Vec3::new(100.0, 0.0, 0.0)));
        assert!(!p.contains(&Vec3::new(201.0, 0.0, 0.0)));
    }

    #[test]
    fn test_pipe_caps_and_wall_are_strict() {
        let p = Boundary::Pipe {
            radius: 100.0,
            length: 200.0,
        };
        assert!(!p.contains(&Vec3::new(0.0, 0.0, 0.0)));
        assert!(!p.contains(&Vec3::new(200.0, 0.0, 0.0)));
        assert!(!p.contains(&Vec3::new(100.0, 60.0, 80.0))); // radius exactly 100
        assert!(p.contains(&Vec3::new(100.0, 60.0, 79.9)));
    }
}
