//! Simulation core for the emdrift lecture demonstrations.
//!
//! Integrates charged-particle motion under the Lorentz force with a
//! fixed-step integrator, dispatches typed parameter commands, and runs
//! the boundary-gated drive loop with pluggable frame pacing. No
//! rendering host is involved; everything here is unit-testable.

pub mod command;
pub mod error;
pub mod integrate;
pub mod lorentz;
pub mod runner;
pub mod sim;
pub mod trail;

pub use command::Command;
pub use error::{Result, SimError};
pub use integrate::{EulerIntegrator, Integrator, Rk4Integrator};
pub use lorentz::{lorentz_acceleration, lorentz_force};
pub use runner::{FixedRate, FrameClock, NoPacing, Outcome, RunReport, run};
pub use sim::Simulation;
pub use trail::TrailRecorder;
