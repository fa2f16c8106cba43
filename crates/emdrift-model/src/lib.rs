//! Model types for the emdrift lecture simulations.
//!
//! `Scenario` is the static description of an experiment (boundary, time
//! step, field axes, launch defaults). `ParticleState` is the mutable
//! simulation state (position, velocity, fields, launch parameters).

pub mod boundary;
pub mod particle;
pub mod scenario;

pub use boundary::Boundary;
pub use particle::ParticleState;
pub use scenario::{Scenario, ScenarioBuilder};
