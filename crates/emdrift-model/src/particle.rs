//! Mutable particle state.

use emdrift_math::{Vec3, launch_direction};

use crate::scenario::Scenario;

/// State of the single simulated particle.
///
/// Owned by the simulation driver and passed by reference into every
/// handler; nothing here is global.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    /// Position in world coordinates.
    pub position: Vec3,
    /// Velocity.
    pub velocity: Vec3,
    /// Lorentz acceleration, recomputed from the current velocity and
    /// fields every step and on every parameter change. Display-derived
    /// state only; never persisted across steps.
    pub acceleration: Vec3,
    /// Electric charge (arbitrary units).
    pub charge: f64,
    /// Mass (arbitrary units). Precondition: > 0. The box-chamber lecture
    /// script never divides by mass; here mass defaults to 1 so the same
    /// step covers both variants.
    pub mass: f64,
    /// Launch speed magnitude.
    pub speed: f64,
    /// Polar launch angle (radians).
    pub theta: f64,
    /// Azimuthal launch angle (radians).
    pub phi: f64,
    /// Electric field vector.
    pub e_field: Vec3,
    /// Magnetic field vector.
    pub b_field: Vec3,
    /// Drive-loop gate; the only state machine in the system.
    pub moving: bool,
}

impl ParticleState {
    /// Initial state for a scenario: at the start position, at rest in
    /// terms of stepping (`moving` false), with the launch velocity
    /// already derived from the configured speed and angles.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let mut state = Self {
            position: scenario.start,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            charge: scenario.charge,
            mass: scenario.mass,
            speed: scenario.speed,
            theta: scenario.theta,
            phi: scenario.phi,
            e_field: scenario.e_axis * scenario.e_mag,
            b_field: scenario.b_axis * scenario.b_mag,
            moving: false,
        };
        state.velocity = state.launch_velocity();
        state
    }

    /// Velocity implied by the current speed and launch angles.
    pub fn launch_velocity(&self) -> Vec3 {
        self.speed * launch_direction(self.theta, self.phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_scenario_derives_launch_velocity() {
        let scenario = Scenario::box_chamber();
        let state = ParticleState::from_scenario(&scenario);

        assert_eq!(state.position, scenario.start);
        assert!(!state.moving);
        // 45 degree launch at speed 20
        let sqrt2_2 = std::f64::consts::SQRT_2 / 2.0;
        assert_relative_eq!(state.velocity.x, 20.0 * sqrt2_2, epsilon = 1e-12);
        assert_relative_eq!(state.velocity.y, 20.0 * sqrt2_2, epsilon = 1e-12);
        assert_relative_eq!(state.velocity.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fields_follow_scenario_axes() {
        let state = ParticleState::from_scenario(&Scenario::box_chamber());
        // E along +y, B along -y in the box chamber
        assert_relative_eq!(state.e_field.y, 5.0);
        assert_relative_eq!(state.b_field.y, -5.0);
        assert_relative_eq!(state.e_field.x, 0.0);
        assert_relative_eq!(state.b_field.z, 0.0);
    }
}
