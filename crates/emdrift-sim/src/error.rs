//! Error types for emdrift-sim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The acceleration divides by mass; the lecture sliders happened to
    /// exclude zero, the command handler makes the precondition explicit.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
}

pub type Result<T> = std::result::Result<T, SimError>;
