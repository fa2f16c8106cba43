//! Fixed-step integrators for the Lorentz equation of motion.

use emdrift_math::Vec3;
use emdrift_model::ParticleState;

use crate::lorentz::lorentz_acceleration;

/// Pluggable integrator trait.
///
/// Implementations advance position and velocity by one fixed time step
/// and leave the start-of-step acceleration in `state.acceleration` for
/// display.
pub trait Integrator {
    /// Advance `state` by `dt`. Reads the current fields and charge from
    /// the state itself.
    fn step(&self, dt: f64, state: &mut ParticleState);
}

fn accel(state: &ParticleState, velocity: &Vec3) -> Vec3 {
    lorentz_acceleration(
        state.charge,
        state.mass,
        velocity,
        &state.e_field,
        &state.b_field,
    )
}

/// The per-frame Euler step of the lecture scripts: velocity is advanced
/// first and the freshly updated velocity moves the position.
pub struct EulerIntegrator;

impl Integrator for EulerIntegrator {
    fn step(&self, dt: f64, state: &mut ParticleState) {
        let a = accel(state, &state.velocity);
        state.velocity += a * dt;
        let v = state.velocity;
        state.position += v * dt;
        state.acceleration = a;
    }
}

/// 4th-order Runge-Kutta integrator.
///
/// Much better accuracy per step for gyration in a magnetic field; the
/// Euler step needs a very small dt to keep the orbit from spiraling.
pub struct Rk4Integrator;

impl Integrator for Rk4Integrator {
    fn step(&self, dt: f64, state: &mut ParticleState) {
        let v0 = state.velocity;

        // k1
        let dv1 = accel(state, &v0);
        let dx1 = v0;

        // k2
        let v2 = v0 + dv1 * (dt / 2.0);
        let dv2 = accel(state, &v2);
        let dx2 = v2;

        // k3
        let v3 = v0 + dv2 * (dt / 2.0);
        let dv3 = accel(state, &v3);
        let dx3 = v3;

        // k4
        let v4 = v0 + dv3 * dt;
        let dv4 = accel(state, &v4);
        let dx4 = v4;

        // Combine
        state.velocity += (dv1 + dv2 * 2.0 + dv3 * 2.0 + dv4) * (dt / 6.0);
        state.position += (dx1 + dx2 * 2.0 + dx3 * 2.0 + dx4) * (dt / 6.0);
        state.acceleration = dv1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use emdrift_model::Scenario;

    fn state_with(velocity: Vec3, e_field: Vec3, b_field: Vec3) -> ParticleState {
        let mut state = ParticleState::from_scenario(&Scenario::box_chamber());
        state.velocity = velocity;
        state.e_field = e_field;
        state.b_field = b_field;
        state
    }

    #[test]
    fn test_euler_step_matches_hand_computation() {
        // One Euler step at dt = 1e-5 from the 45-degree launch updates
        // velocity by a*dt with a = (35.35, 2.5, -35.35) (hand-computed
        // cross product).
        let dt = 1e-5;
        let mut state = state_with(
            Vec3::new(14.14, 14.14, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -5.0, 0.0),
        );
        let start = state.position;

        EulerIntegrator.step(dt, &mut state);

        assert_relative_eq!(state.velocity.x, 14.14 + 35.35 * dt, epsilon = 1e-12);
        assert_relative_eq!(state.velocity.y, 14.14 + 2.5 * dt, epsilon = 1e-12);
        assert_relative_eq!(state.velocity.z, -35.35 * dt, epsilon = 1e-12);

        // Position moves by the updated velocity, not the old one
        assert_relative_eq!(
            state.position.x,
            start.x + state.velocity.x * dt,
            epsilon = 1e-12
        );
        assert_relative_eq!(state.acceleration.x, 35.35, epsilon = 1e-12);
    }

    #[test]
    fn test_euler_uniform_e_field_acceleration() {
        // Pure E field: straight-line accelerated motion along the field.
        let dt = 1e-4;
        let mut state = state_with(Vec3::zeros(), Vec3::new(2.0, 0.0, 0.0), Vec3::zeros());
        state.charge = 1.0;
        state.mass = 2.0;

        for _ in 0..1000 {
            EulerIntegrator.step(dt, &mut state);
        }

        // a = qE/m = 1.0, t = 0.1: v = 0.1
        assert_relative_eq!(state.velocity.x, 0.1, epsilon = 1e-9);
        assert_relative_eq!(state.velocity.y, 0.0);
        assert_relative_eq!(state.velocity.z, 0.0);
    }

    #[test]
    fn test_magnetic_field_preserves_speed_rk4() {
        // Pure B field does no work; RK4 should hold |v| to high accuracy
        // over a full gyration.
        let dt = 1e-3;
        let mut state = state_with(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 2.0),
        );
        state.charge = 1.0;
        state.mass = 1.0;

        // Cyclotron period T = 2*pi*m/(qB) = pi
        let steps = (std::f64::consts::PI / dt) as usize;
        for _ in 0..steps {
            Rk4Integrator.step(dt, &mut state);
        }

        assert_relative_eq!(state.velocity.norm(), 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gyration_radius() {
        // Larmor radius r = m*v/(q*B). With v = 10, q = 1, m = 1, B = 2
        // the orbit stays within r = 5 of its center.
        let dt = 1e-4;
        let mut state = state_with(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 2.0),
        );
        state.charge = 1.0;
        state.mass = 1.0;
        state.position = Vec3::zeros();

        // Center of gyration is one radius from the start, perpendicular
        // to v; for v = +x, B = +z and q > 0 that is -y.
        let center = Vec3::new(0.0, -5.0, 0.0);
        for _ in 0..100_000 {
            Rk4Integrator.step(dt, &mut state);
            let r = (state.position - center).norm();
            assert!((r - 5.0).abs() < 1e-2, "gyration radius drifted: {r}");
        }
    }
}
