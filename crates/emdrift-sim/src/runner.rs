//! Boundary-gated drive loop with pluggable frame pacing.
//!
//! The lecture scripts block inside the rendering library's rate limiter;
//! here the loop is host-agnostic: pacing comes from a `FrameClock`, and
//! parameter changes arrive through a command source polled once per
//! iteration. Cancellation is cooperative with latency bounded by one
//! frame interval.

use std::time::{Duration, Instant};

use crate::command::Command;
use crate::error::Result;
use crate::sim::Simulation;

/// Per-frame yield point of the drive loop.
pub trait FrameClock {
    /// Block until the next frame is due.
    fn wait(&mut self);
}

/// Real-time pacing at a fixed number of frames per second, the
/// stand-in for the rendering library's rate limiter.
pub struct FixedRate {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRate {
    /// Pace at `hz` frames per second.
    pub fn per_second(hz: f64) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / hz),
            next: None,
        }
    }

    /// Pace at 1/dt frames per second, so one step advances one dt of
    /// real time.
    pub fn from_dt(dt: f64) -> Self {
        Self::per_second(1.0 / dt)
    }
}

impl FrameClock for FixedRate {
    fn wait(&mut self) {
        let deadline = match self.next {
            Some(t) => t,
            None => Instant::now(),
        };
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.next = Some(deadline + self.period);
    }
}

/// No pacing; the loop runs flat out. For tests and batch runs.
pub struct NoPacing;

impl FrameClock for NoPacing {
    fn wait(&mut self) {}
}

/// Why the drive loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The particle crossed the boundary.
    LeftBounds,
    /// The moving flag was cleared (Halt, Reset, or never launched).
    Halted,
}

/// Result of one drive-loop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Steps taken during this run.
    pub steps: usize,
    /// Exit reason.
    pub outcome: Outcome,
}

/// Run the drive loop until the particle leaves the boundary or the
/// moving flag is cleared.
///
/// Each iteration drains `poll` (the host's pending control events),
/// re-checks the gate, waits on the clock, then steps. Everything runs
/// on the calling thread; the clock wait is the only yield point.
pub fn run<C, P>(sim: &mut Simulation, clock: &mut C, mut poll: P) -> Result<RunReport>
where
    C: FrameClock,
    P: FnMut() -> Option<Command>,
{
    let start_steps = sim.steps;
    loop {
        while let Some(command) = poll() {
            sim.apply(command)?;
        }
        if !sim.is_moving() {
            return Ok(RunReport {
                steps: sim.steps.saturating_sub(start_steps),
                outcome: Outcome::Halted,
            });
        }
        if !sim.in_bounds() {
            sim.halt();
            return Ok(RunReport {
                steps: sim.steps.saturating_sub(start_steps),
                outcome: Outcome::LeftBounds,
            });
        }
        clock.wait();
        sim.step();
    }
}
