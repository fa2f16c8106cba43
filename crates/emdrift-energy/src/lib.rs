//! Relativistic vs. classical kinetic energy.
//!
//! Everything is dimensionless: speeds are β = v/c and energies are in
//! units of the rest energy m₀c². The binomial partial sums are the
//! curves the lecture animation draws on top of the relativistic one:
//!
//! 1/√(1−β²) − 1 = β²/2 + 3β⁴/8 + 5β⁶/16 + 35β⁸/128 + …

/// Classical kinetic energy, T = β²/2.
pub fn classical(beta: f64) -> f64 {
    beta * beta / 2.0
}

/// Relativistic kinetic energy, T = 1/√(1−β²) − 1.
///
/// Domain β ∈ [0, 1); diverges to infinity as β → 1 and is not defined
/// beyond it.
pub fn relativistic(beta: f64) -> f64 {
    1.0 / (1.0 - beta * beta).sqrt() - 1.0
}

/// The first `terms` coefficients c_k of the binomial expansion
/// Σ c_k β^(2k), i.e. C(2k, k) / 4^k: 1/2, 3/8, 5/16, 35/128, …
///
/// Generated by the recurrence c_{k+1} = c_k · (2k+1)/(2k+2).
pub fn coefficients(terms: usize) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(terms);
    let mut c = 0.5;
    for k in 1..=terms {
        coeffs.push(c);
        c *= (2 * k + 1) as f64 / (2 * k + 2) as f64;
    }
    coeffs
}

/// Partial sum of the binomial series with `terms` terms. One term is
/// exactly the classical energy.
pub fn approximation(beta: f64, terms: usize) -> f64 {
    let beta2 = beta * beta;
    let mut sum = 0.0;
    let mut power = 1.0;
    for c in coefficients(terms) {
        power *= beta2;
        sum += c * power;
    }
    sum
}

/// Sample a curve over β ∈ [0, beta_max] at `steps` + 1 evenly spaced
/// points, for plotting hosts.
pub fn sample(f: impl Fn(f64) -> f64, beta_max: f64, steps: usize) -> Vec<(f64, f64)> {
    (0..=steps)
        .map(|i| {
            let beta = beta_max * i as f64 / steps as f64;
            (beta, f(beta))
        })
        .collect()
}
