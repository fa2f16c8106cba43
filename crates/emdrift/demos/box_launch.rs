//! Box-chamber launch — the 45-degree proton flight with E up and B down.

use emdrift::{NoPacing, Scenario, Simulation, run};

fn main() {
    let mut sim = Simulation::new(Scenario::box_chamber());

    println!("Box chamber: 100 x 100 x 100, dt = {}", sim.scenario.dt);
    println!(
        "Launch: speed {} at theta = 45 deg, q = {}, E = {:?}, B = {:?}\n",
        sim.state.speed, sim.state.charge, sim.state.e_field, sim.state.b_field
    );

    sim.launch();

    print!("time(s)     x          y          z\n");
    print!("───────────────────────────────────────────\n");

    // No real-time pacing here; a frame per dt would take minutes.
    let mut frames = 0usize;
    let report = run(&mut sim, &mut NoPacing, || None).unwrap();
    for (i, p) in sim.trail.positions.iter().enumerate() {
        if i % 50_000 == 0 {
            println!(
                "{:8.3}   {:+8.3}   {:+8.3}   {:+8.3}",
                sim.trail.times[i], p[0], p[1], p[2]
            );
        }
        frames += 1;
    }

    println!("\nFlight ended: {:?} after {} steps", report.outcome, report.steps);
    println!(
        "Exit position: ({:+.3}, {:+.3}, {:+.3}) after {:.3} s",
        sim.state.position.x, sim.state.position.y, sim.state.position.z, sim.time
    );
    println!("Trail samples: {frames}");
}
