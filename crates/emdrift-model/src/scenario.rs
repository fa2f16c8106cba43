//! Static experiment configuration and its builder.

use emdrift_math::{Vec3, deg_to_rad};
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;

/// Static description of one experiment: boundary geometry, time step,
/// field axes, and the launch defaults the particle resets to.
///
/// Field vectors are parameterized as `axis * magnitude` so that a single
/// scalar control can steer each field, matching the lecture sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Start position the particle resets to.
    pub start: Vec3,
    /// Fixed integration time step.
    pub dt: f64,
    /// Initial launch speed.
    pub speed: f64,
    /// Initial polar launch angle (radians).
    pub theta: f64,
    /// Initial azimuthal launch angle (radians).
    pub phi: f64,
    /// Initial charge.
    pub charge: f64,
    /// Initial mass. Precondition: > 0.
    pub mass: f64,
    /// Unit axis the electric field points along.
    pub e_axis: Vec3,
    /// Initial electric field magnitude.
    pub e_mag: f64,
    /// Unit axis the magnetic field points along.
    pub b_axis: Vec3,
    /// Initial magnetic field magnitude.
    pub b_mag: f64,
    /// Containment region.
    pub boundary: Boundary,
}

impl Scenario {
    /// The box-chamber demonstration: 100x100x100 box, proton launched at
    /// 45 degrees from just above the floor, E up and B down at magnitude 5.
    pub fn box_chamber() -> Self {
        let ylen = 100.0;
        ScenarioBuilder::new(Boundary::box_from_extents(100.0, ylen, 100.0))
            .start(Vec3::new(0.0, -ylen / 2.0 + 1.0, 0.0))
            .dt(1e-5)
            .speed(20.0)
            .launch_angles_deg(45.0, 90.0)
            .charge(0.5)
            .electric_field(Vec3::y(), 5.0)
            .magnetic_field(-Vec3::y(), 5.0)
            .build()
    }

    /// The beam-pipe demonstration: cylinder of radius 100 and length 200
    /// along +x, particle launched down the axis with both fields off.
    pub fn beam_pipe() -> Self {
        ScenarioBuilder::new(Boundary::Pipe {
            radius: 100.0,
            length: 200.0,
        })
        .start(Vec3::new(10.0, 0.0, 0.0))
        .dt(1e-3)
        .speed(10.0)
        .charge(0.5)
        .electric_field(Vec3::x(), 0.0)
        .magnetic_field(-Vec3::x(), 0.0)
        .build()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Builder for `Scenario` with the shared defaults of the lecture scripts
/// (unit mass, zero angles, fields along +x).
pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            scenario: Scenario {
                start: Vec3::zeros(),
                dt: 1e-3,
                speed: 10.0,
                theta: 0.0,
                phi: 0.0,
                charge: 0.5,
                mass: 1.0,
                e_axis: Vec3::x(),
                e_mag: 0.0,
                b_axis: Vec3::x(),
                b_mag: 0.0,
                boundary,
            },
        }
    }

    pub fn start(mut self, start: Vec3) -> Self {
        self.scenario.start = start;
        self
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.scenario.dt = dt;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.scenario.speed = speed;
        self
    }

    /// Launch angles in degrees, stored as radians.
    pub fn launch_angles_deg(mut self, theta: f64, phi: f64) -> Self {
        self.scenario.theta = deg_to_rad(theta);
        self.scenario.phi = deg_to_rad(phi);
        self
    }

    pub fn charge(mut self, charge: f64) -> Self {
        self.scenario.charge = charge;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.scenario.mass = mass;
        self
    }

    pub fn electric_field(mut self, axis: Vec3, magnitude: f64) -> Self {
        self.scenario.e_axis = axis;
        self.scenario.e_mag = magnitude;
        self
    }

    pub fn magnetic_field(mut self, axis: Vec3, magnitude: f64) -> Self {
        self.scenario.b_axis = axis;
        self.scenario.b_mag = magnitude;
        self
    }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}
