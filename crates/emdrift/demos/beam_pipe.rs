//! Beam-pipe flight with scripted slider changes.
//!
//! Reproduces the interactive pipe demonstration headlessly: launch down
//! the axis, then switch the axial magnetic field on mid-flight and
//! watch the trajectory wind into a helix.

use std::collections::VecDeque;

use emdrift::{Command, NoPacing, Scenario, Simulation, run};

fn main() {
    let mut sim = Simulation::new(Scenario::beam_pipe());

    // The "slider" script: angle the launch, then add the field after
    // 2000 frames (2 s of simulated time).
    sim.apply(Command::SetTheta(30.0)).unwrap();
    sim.apply(Command::SetPhi(90.0)).unwrap();
    sim.apply(Command::Launch).unwrap();

    let mut later: VecDeque<(usize, Command)> =
        VecDeque::from([(2000, Command::SetMagneticField(5.0))]);

    let mut frame = 0usize;
    let report = run(&mut sim, &mut NoPacing, || {
        frame += 1;
        match later.front() {
            Some(&(at, command)) if frame >= at => {
                later.pop_front();
                Some(command)
            }
            _ => None,
        }
    })
    .unwrap();

    println!("Pipe: radius 100, length 200, dt = {}", sim.scenario.dt);
    println!("Outcome: {:?} after {} steps ({:.3} s)\n", report.outcome, report.steps, sim.time);

    print!("time(s)     x          y          z          r⊥\n");
    print!("──────────────────────────────────────────────────────\n");
    for (i, p) in sim.trail.positions.iter().enumerate() {
        if i % 2000 == 0 {
            let transverse = (p[1] * p[1] + p[2] * p[2]).sqrt();
            println!(
                "{:8.3}   {:+8.3}   {:+8.3}   {:+8.3}   {:8.3}",
                sim.trail.times[i], p[0], p[1], p[2], transverse
            );
        }
    }

    println!(
        "\nExit at ({:+.3}, {:+.3}, {:+.3}), |v| = {:.3}",
        sim.state.position.x,
        sim.state.position.y,
        sim.state.position.z,
        sim.state.velocity.norm()
    );
}
