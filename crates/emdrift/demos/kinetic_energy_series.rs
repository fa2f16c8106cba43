//! Relativistic vs. classical kinetic energy and the binomial series.
//!
//! Prints the table the lecture animation draws: the relativistic curve,
//! the classical parabola, and successive partial-sum approximations
//! closing the gap as beta approaches 1.

use emdrift::emdrift_energy::{approximation, classical, coefficients, relativistic};

fn main() {
    println!("Series coefficients C(2k,k)/4^k:");
    for (k, c) in coefficients(10).iter().enumerate() {
        println!("  k = {:2}: {:.10}", k + 1, c);
    }

    println!("\nT(beta) in units of m0*c^2:");
    print!("beta     classical   rel.        approx(2)   approx(5)   approx(10)\n");
    print!("────────────────────────────────────────────────────────────────────\n");
    for i in 0..=9 {
        let beta = i as f64 * 0.1;
        println!(
            "{:4.2}   {:10.6}  {:10.6}  {:10.6}  {:10.6}  {:10.6}",
            beta,
            classical(beta),
            relativistic(beta),
            approximation(beta, 2),
            approximation(beta, 5),
            approximation(beta, 10)
        );
    }

    let beta = 0.99;
    println!(
        "\nAt beta = {beta}: relativistic = {:.4}, classical = {:.4}, 10-term series = {:.4}",
        relativistic(beta),
        classical(beta),
        approximation(beta, 10)
    );
}
