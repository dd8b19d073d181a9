//! Frequency response evaluation of a digital transfer function.

use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::PI;

/// Magnitude and phase curves over a frequency grid
///
/// `frequencies` holds angular frequencies in radians/sample; `phase` is the
/// principal value in radians, with no unwrapping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyResponse {
    pub frequencies: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
}

impl FrequencyResponse {
    /// Empty curves, rendered as nothing by the display collaborator
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Evaluate `H(e^{jω})` at `num_points` frequencies on `[0, π)`
///
/// Coefficients are highest power first; the ratio is evaluated with both
/// polynomials in powers of `e^{-jω}`, matching the usual difference
/// equation convention.
pub fn freqz(b: &[Complex64], a: &[Complex64], num_points: usize) -> FrequencyResponse {
    let mut response = FrequencyResponse {
        frequencies: Vec::with_capacity(num_points),
        magnitude: Vec::with_capacity(num_points),
        phase: Vec::with_capacity(num_points),
    };

    for i in 0..num_points {
        let omega = PI * i as f64 / num_points as f64;
        let h = polyval_inverse_z(b, omega) / polyval_inverse_z(a, omega);
        response.frequencies.push(omega);
        response.magnitude.push(h.norm());
        response.phase.push(h.arg());
    }
    response
}

/// Evaluate a coefficient sequence as a polynomial in `e^{-jω}`
fn polyval_inverse_z(coeffs: &[Complex64], omega: f64) -> Complex64 {
    let z_inv = Complex64::new(0.0, -omega).exp();
    // Horner over ascending delay powers
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_identity_filter_is_flat() {
        let one = [c(1.0, 0.0)];
        let response = freqz(&one, &one, 16);
        assert_eq!(response.frequencies.len(), 16);
        for (magnitude, phase) in response.magnitude.iter().zip(response.phase.iter()) {
            assert_abs_diff_eq!(*magnitude, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(*phase, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_grid_spans_zero_to_pi_half_open() {
        let one = [c(1.0, 0.0)];
        let response = freqz(&one, &one, 500);
        assert_eq!(response.frequencies[0], 0.0);
        let last = *response.frequencies.last().unwrap();
        assert!(last < PI);
        assert_abs_diff_eq!(last, PI * 499.0 / 500.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_tap_average_magnitude() {
        // H(ω) = (1 + e^{-jω})/2, |H| = |cos(ω/2)|
        let b = [c(0.5, 0.0), c(0.5, 0.0)];
        let a = [c(1.0, 0.0)];
        let response = freqz(&b, &a, 64);
        for (omega, magnitude) in response
            .frequencies
            .iter()
            .zip(response.magnitude.iter())
        {
            assert_abs_diff_eq!(*magnitude, (omega / 2.0).cos().abs(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_all_pass_pair_has_flat_magnitude() {
        // A reciprocal-conjugate pair scales magnitude by |z| at every
        // frequency.
        let zero = c(-2.0, -1.0);
        let pole = 1.0 / zero.conj();
        let b = [c(1.0, 0.0), -zero];
        let a = [c(1.0, 0.0), -pole];
        let response = freqz(&b, &a, 128);
        let expected = zero.norm();
        for magnitude in &response.magnitude {
            assert_abs_diff_eq!(*magnitude, expected, epsilon = 1e-9);
        }
    }
}
