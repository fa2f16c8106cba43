//! Lorentz force on a charged particle in uniform fields.

use emdrift_math::Vec3;

/// Force on a charged particle in combined electric and magnetic fields.
///
/// F = q (E + v × B)
///
/// # Arguments
/// * `charge` - Electric charge
/// * `velocity` - Velocity of the charge
/// * `e_field` - Electric field
/// * `b_field` - Magnetic field
pub fn lorentz_force(charge: f64, velocity: &Vec3, e_field: &Vec3, b_field: &Vec3) -> Vec3 {
    charge * (e_field + velocity.cross(b_field))
}

/// Lorentz acceleration, a = q (E + v × B) / m.
///
/// Precondition: `mass` > 0. A zero mass divides by zero and yields
/// non-finite components; callers that accept user input guard this via
/// [`crate::SimError::NonPositiveMass`], the math itself does not.
pub fn lorentz_acceleration(
    charge: f64,
    mass: f64,
    velocity: &Vec3,
    e_field: &Vec3,
    b_field: &Vec3,
) -> Vec3 {
    lorentz_force(charge, velocity, e_field, b_field) / mass
}
