//! Polynomial construction, convolution, and root extraction.

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Monic polynomial with the given roots, coefficients highest power first
///
/// `poly_from_roots(&[])` is the constant polynomial `[1]`;
/// `poly_from_roots(&[r])` is `[1, -r]`. Conjugate-symmetric root sets
/// produce coefficients with negligible imaginary parts, but the values are
/// not forced real.
pub fn poly_from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        let mut next = vec![zero; coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= root * c;
        }
        coeffs = next;
    }
    coeffs
}

/// Discrete convolution of two coefficient sequences
pub fn convolve(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Complex64::new(0.0, 0.0); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Roots of a real-coefficient polynomial, highest power first
///
/// Computed as the eigenvalues of the companion matrix of the polynomial
/// with leading and trailing zero coefficients stripped; each stripped
/// trailing zero contributes one root at the origin. A constant (or all
/// zero) polynomial has no roots.
pub fn roots(coeffs: &[f64]) -> Vec<Complex64> {
    let Some(start) = coeffs.iter().position(|c| *c != 0.0) else {
        return Vec::new();
    };
    let trimmed = &coeffs[start..];
    let end = trimmed
        .iter()
        .rposition(|c| *c != 0.0)
        .expect("trimmed polynomial has a nonzero coefficient");
    let core = &trimmed[..=end];
    let origin_roots = trimmed.len() - 1 - end;

    let mut out = vec![Complex64::new(0.0, 0.0); origin_roots];
    if core.len() >= 2 {
        let eigenvalues = companion(core).complex_eigenvalues();
        out.extend(eigenvalues.iter().copied());
    }
    out
}

/// Companion matrix of a polynomial with nonzero leading coefficient
fn companion(coeffs: &[f64]) -> DMatrix<f64> {
    let m = coeffs.len();
    let a0 = coeffs[0];
    let mut matrix = DMatrix::zeros(m - 1, m - 1);
    for (i, &c) in coeffs.iter().skip(1).enumerate() {
        matrix[(0, i)] = -c / a0;
    }
    for i in 0..m.saturating_sub(2) {
        matrix[(i + 1, i)] = 1.0;
    }
    matrix
}

/// Real parts of a coefficient sequence
///
/// Used where downstream consumers (root extraction, rendering) expect real
/// coefficients from a conjugate-symmetric synthesis.
pub fn real_coefficients(coeffs: &[Complex64]) -> Vec<f64> {
    coeffs.iter().map(|c| c.re).collect()
}
