//! Typed parameter commands.
//!
//! The lecture scripts mutate the particle through a pile of slider and
//! button closures; here the same surface is a closed set of variants
//! dispatched by one handler, so every control path is testable without
//! a GUI host.

use crate::error::Result;
use crate::sim::Simulation;

/// Everything a host control can ask of the simulation. Angles are in
/// degrees, matching the controls; field values are magnitudes along the
/// scenario's fixed axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetCharge(f64),
    SetMass(f64),
    SetElectricField(f64),
    SetMagneticField(f64),
    SetTheta(f64),
    SetPhi(f64),
    Launch,
    Halt,
    Reset,
}

impl Simulation {
    /// Dispatch one command. `SetMass` is the only fallible variant.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SetCharge(q) => self.set_charge(q),
            Command::SetMass(m) => self.set_mass(m)?,
            Command::SetElectricField(e) => self.set_electric_field(e),
            Command::SetMagneticField(b) => self.set_magnetic_field(b),
            Command::SetTheta(deg) => self.set_theta_deg(deg),
            Command::SetPhi(deg) => self.set_phi_deg(deg),
            Command::Launch => self.launch(),
            Command::Halt => self.halt(),
            Command::Reset => self.reset(),
        }
        Ok(())
    }
}
