//! Whole-buffer IIR filtering.
//!
//! The filter is re-run over the entire accumulated input every time it is
//! called; there is no persistent recursive state between calls. Cost grows
//! with buffer length, a deliberate simplicity trade-off.

use crate::error::{Result, ZplaneError};
use num_complex::Complex64;

/// Apply the difference equation defined by `(b, a)` to `samples`
///
/// Zero initial conditions; the output has the same length as the input.
/// Internally complex so cascaded complex coefficients work unchanged; the
/// imaginary round-off residue is discarded by taking the real part.
pub fn filter(b: &[Complex64], a: &[Complex64], samples: &[f64]) -> Result<Vec<f64>> {
    if b.is_empty() || a.is_empty() {
        return Err(ZplaneError::FilterDesign(
            "filter coefficients must be non-empty".to_string(),
        ));
    }
    let a0 = a[0];
    if a0 == Complex64::new(0.0, 0.0) {
        return Err(ZplaneError::FilterDesign(
            "leading denominator coefficient must be non-zero".to_string(),
        ));
    }

    let mut y = vec![Complex64::new(0.0, 0.0); samples.len()];
    for n in 0..samples.len() {
        let mut acc = Complex64::new(0.0, 0.0);
        for (k, &bk) in b.iter().enumerate().take(n + 1) {
            acc += bk * samples[n - k];
        }
        for (k, &ak) in a.iter().enumerate().take(n + 1).skip(1) {
            acc -= ak * y[n - k];
        }
        y[n] = acc / a0;
    }
    Ok(y.into_iter().map(|v| v.re).collect())
}
