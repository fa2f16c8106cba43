//! Math primitives for the emdrift lecture simulations.
//!
//! Provides the vector alias used across the workspace and the angle
//! conversions for launch-direction parameterization.

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;

/// Degree to radian conversion (UI controls speak degrees, the state
/// stores radians).
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Radian to degree conversion.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Unit launch direction from polar angle `theta` and azimuth `phi`
/// (both radians):
///
/// (cos θ, sin θ · sin φ, sin θ · cos φ)
///
/// The planar launch of the box-chamber variant, (cos θ, sin θ, 0), is
/// the φ = π/2 special case.
pub fn launch_direction(theta: f64, phi: f64) -> Vec3 {
    Vec3::new(
        theta.cos(),
        theta.sin() * phi.sin(),
        theta.sin() * phi.cos(),
    )
}
