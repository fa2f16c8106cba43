//! Simulation driver: owns the particle state and applies parameter
//! changes and integration steps to it.

use emdrift_math::{Vec3, deg_to_rad};
use emdrift_model::{ParticleState, Scenario};

use crate::error::{Result, SimError};
use crate::integrate::{EulerIntegrator, Integrator, Rk4Integrator};
use crate::lorentz::lorentz_acceleration;
use crate::trail::TrailRecorder;

/// One particle, one scenario, one integrator.
///
/// Replaces the global mutable singleton of the lecture scripts: the
/// state is owned here and every handler receives it by reference.
pub struct Simulation {
    /// Static configuration (boundary, dt, field axes, launch defaults).
    pub scenario: Scenario,
    /// Mutable particle state.
    pub state: ParticleState,
    /// Recorded path since the last reset.
    pub trail: TrailRecorder,
    /// Simulation time since the last reset.
    pub time: f64,
    /// Steps taken since the last reset.
    pub steps: usize,
    integrator: Box<dyn Integrator>,
}

impl Simulation {
    /// Create a simulation with the per-frame Euler integrator the
    /// lecture scripts use.
    pub fn new(scenario: Scenario) -> Self {
        Self::with_integrator(scenario, Box::new(EulerIntegrator))
    }

    /// Create a simulation with the RK4 integrator.
    pub fn rk4(scenario: Scenario) -> Self {
        Self::with_integrator(scenario, Box::new(Rk4Integrator))
    }

    /// Create a simulation with a custom integrator.
    pub fn with_integrator(scenario: Scenario, integrator: Box<dyn Integrator>) -> Self {
        let state = ParticleState::from_scenario(&scenario);
        Self {
            scenario,
            state,
            trail: TrailRecorder::new(),
            time: 0.0,
            steps: 0,
            integrator,
        }
    }

    /// Advance position and velocity by one fixed time step and record
    /// the new position on the trail.
    pub fn step(&mut self) {
        self.integrator.step(self.scenario.dt, &mut self.state);
        self.time += self.scenario.dt;
        self.steps += 1;
        self.trail.record(self.time, &self.state.position);
    }

    /// Reset position to the scenario start, rederive velocity from the
    /// current speed and angles, zero the acceleration, and clear the
    /// trail. Current charge, mass, fields, and angles are kept as-is.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.state.position = self.scenario.start;
        self.state.velocity = self.state.launch_velocity();
        self.state.acceleration = Vec3::zeros();
        self.state.moving = false;
        self.trail.clear();
        self.time = 0.0;
        self.steps = 0;
    }

    /// Strict containment test against the scenario boundary.
    pub fn in_bounds(&self) -> bool {
        self.scenario.boundary.contains(&self.state.position)
    }

    /// Whether the drive loop should keep stepping.
    pub fn is_moving(&self) -> bool {
        self.state.moving
    }

    /// Start the drive loop gate. A launch while already moving is a
    /// no-op.
    pub fn launch(&mut self) {
        self.state.moving = true;
    }

    /// Cooperative stop: the drive loop observes this within one frame.
    pub fn halt(&mut self) {
        self.state.moving = false;
    }

    /// Set the charge and rederive the displayed acceleration.
    pub fn set_charge(&mut self, charge: f64) {
        self.state.charge = charge;
        self.refresh_acceleration();
    }

    /// Set the mass and rederive the displayed acceleration.
    ///
    /// The acceleration divides by mass, so a non-positive mass is
    /// rejected and the state is left untouched.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if mass <= 0.0 {
            return Err(SimError::NonPositiveMass(mass));
        }
        self.state.mass = mass;
        self.refresh_acceleration();
        Ok(())
    }

    /// Set the electric field magnitude along the scenario's E axis.
    pub fn set_electric_field(&mut self, magnitude: f64) {
        self.state.e_field = self.scenario.e_axis * magnitude;
        self.refresh_acceleration();
    }

    /// Set the magnetic field magnitude along the scenario's B axis.
    pub fn set_magnetic_field(&mut self, magnitude: f64) {
        self.state.b_field = self.scenario.b_axis * magnitude;
        self.refresh_acceleration();
    }

    /// Set the polar launch angle (degrees) and rederive velocity.
    pub fn set_theta_deg(&mut self, degrees: f64) {
        self.state.theta = deg_to_rad(degrees);
        self.state.velocity = self.state.launch_velocity();
        self.refresh_acceleration();
    }

    /// Set the azimuthal launch angle (degrees) and rederive velocity.
    pub fn set_phi_deg(&mut self, degrees: f64) {
        self.state.phi = deg_to_rad(degrees);
        self.state.velocity = self.state.launch_velocity();
        self.refresh_acceleration();
    }

    /// Recompute the displayed acceleration from the current state so
    /// force/acceleration readouts are consistent immediately after a
    /// parameter change, without waiting for the next step.
    fn refresh_acceleration(&mut self) {
        self.state.acceleration = lorentz_acceleration(
            self.state.charge,
            self.state.mass,
            &self.state.velocity,
            &self.state.e_field,
            &self.state.b_field,
        );
    }
}
