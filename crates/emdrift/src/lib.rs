//! emdrift — charged-particle motion in electromagnetic fields.
//!
//! This is the umbrella crate that re-exports the simulation core from
//! the sub-crates. The two lecture setups are `Scenario::box_chamber`
//! and `Scenario::beam_pipe`; drive either with `Simulation` plus
//! `run`, and feed parameter changes through `Command`.

pub use emdrift_energy::{self};
pub use emdrift_math::{self, Vec3, deg_to_rad, launch_direction, rad_to_deg};
pub use emdrift_model::{self, Boundary, ParticleState, Scenario, ScenarioBuilder};
pub use emdrift_sim::{
    self, Command, EulerIntegrator, FixedRate, FrameClock, Integrator, NoPacing, Outcome,
    Rk4Integrator, RunReport, SimError, Simulation, TrailRecorder, lorentz_acceleration,
    lorentz_force, run,
};
