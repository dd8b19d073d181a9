//! Frequency transforms and the analog-to-digital bilinear transform.
//!
//! The digital design pipeline mirrors the classic scipy recipe: design the
//! analog lowpass prototype, warp the requested digital cutoffs, shift the
//! prototype with an s-domain frequency transform, then map to the z-plane
//! with the bilinear transform and expand to transfer-function form.

use super::poly::{poly_from_roots, real_coefficients};
use super::prototypes::Zpk;
use crate::error::{Result, ZplaneError};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Band selection for a digital design, cutoffs normalized to Nyquist
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    Lowpass(f64),
    Highpass(f64),
    Bandpass(f64, f64),
}

impl Band {
    fn cutoffs(&self) -> Vec<f64> {
        match *self {
            Band::Lowpass(w) | Band::Highpass(w) => vec![w],
            Band::Bandpass(lo, hi) => vec![lo, hi],
        }
    }
}

/// Relative degree of a transfer function from zeros and poles
fn relative_degree(zpk: &Zpk) -> Result<usize> {
    let degree = zpk.p.len() as i64 - zpk.z.len() as i64;
    if degree < 0 {
        return Err(ZplaneError::FilterDesign(
            "improper transfer function: more zeros than poles".to_string(),
        ));
    }
    Ok(degree as usize)
}

fn prod(values: impl Iterator<Item = Complex64>) -> Complex64 {
    values.fold(Complex64::new(1.0, 0.0), |acc, v| acc * v)
}

/// Shift a lowpass prototype to the cutoff `wo`
pub fn lp2lp_zpk(zpk: &Zpk, wo: f64) -> Result<Zpk> {
    let degree = relative_degree(zpk)?;

    // Scale all points radially from the origin
    let z: Vec<Complex64> = zpk.z.iter().map(|&x| wo * x).collect();
    let p: Vec<Complex64> = zpk.p.iter().map(|&x| wo * x).collect();

    // Each shifted pole lowers the gain by wo, each zero raises it
    let k = zpk.k * wo.powi(degree as i32);
    Ok(Zpk { z, p, k })
}

/// Invert a lowpass prototype into a highpass filter with cutoff `wo`
pub fn lp2hp_zpk(zpk: &Zpk, wo: f64) -> Result<Zpk> {
    let degree = relative_degree(zpk)?;

    let mut z: Vec<Complex64> = zpk.z.iter().map(|&x| wo / x).collect();
    let p: Vec<Complex64> = zpk.p.iter().map(|&x| wo / x).collect();

    // Zeros at infinity move to the origin under inversion
    z.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    let k = zpk.k * (prod(zpk.z.iter().map(|&x| -x)) / prod(zpk.p.iter().map(|&x| -x))).re;
    Ok(Zpk { z, p, k })
}

/// Transform a lowpass prototype to a bandpass filter
///
/// `wo` is the center frequency and `bw` the bandwidth; the order doubles.
pub fn lp2bp_zpk(zpk: &Zpk, wo: f64, bw: f64) -> Result<Zpk> {
    let degree = relative_degree(zpk)?;

    // Scale to the desired bandwidth
    let z_lp: Vec<Complex64> = zpk.z.iter().map(|&x| x * (bw / 2.0)).collect();
    let p_lp: Vec<Complex64> = zpk.p.iter().map(|&x| x * (bw / 2.0)).collect();

    // Duplicate and shift from baseband to ±wo
    let shift = |x: Complex64| (x * x - wo * wo).sqrt();
    let mut z: Vec<Complex64> = z_lp
        .iter()
        .map(|&x| x + shift(x))
        .chain(z_lp.iter().map(|&x| x - shift(x)))
        .collect();
    let p: Vec<Complex64> = p_lp
        .iter()
        .map(|&x| x + shift(x))
        .chain(p_lp.iter().map(|&x| x - shift(x)))
        .collect();

    // Degree zeros move to the origin, leaving degree zeros at infinity
    z.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    let k = zpk.k * bw.powi(degree as i32);
    Ok(Zpk { z, p, k })
}

/// Map an analog filter to an equivalent digital filter
///
/// Uses the standard bilinear substitution `s = 2·fs·(z-1)/(z+1)`; zeros at
/// infinity land at the Nyquist frequency.
pub fn bilinear_zpk(zpk: &Zpk, fs: f64) -> Result<Zpk> {
    let degree = relative_degree(zpk)?;
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let mut z: Vec<Complex64> = zpk.z.iter().map(|&x| (fs2 + x) / (fs2 - x)).collect();
    let p: Vec<Complex64> = zpk.p.iter().map(|&x| (fs2 + x) / (fs2 - x)).collect();

    z.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));

    let k = zpk.k * (prod(zpk.z.iter().map(|&x| fs2 - x)) / prod(zpk.p.iter().map(|&x| fs2 - x))).re;
    Ok(Zpk { z, p, k })
}

/// Expand a zero/pole/gain filter to transfer-function coefficients
///
/// Returns `(b, a)` highest power first. Conjugate-symmetric root sets make
/// the products real; residual imaginary round-off is discarded.
pub fn zpk2tf(zpk: &Zpk) -> (Vec<f64>, Vec<f64>) {
    let b: Vec<f64> = real_coefficients(&poly_from_roots(&zpk.z))
        .iter()
        .map(|c| c * zpk.k)
        .collect();
    let a = real_coefficients(&poly_from_roots(&zpk.p));
    (b, a)
}

/// Turn an analog lowpass prototype into digital `(b, a)` coefficients
///
/// Cutoffs are normalized to Nyquist and must satisfy `0 < w < 1`; they are
/// pre-warped to compensate for the bilinear transform's frequency
/// compression.
pub fn design_digital(prototype: &Zpk, band: Band) -> Result<(Vec<f64>, Vec<f64>)> {
    for w in band.cutoffs() {
        if w <= 0.0 || w >= 1.0 {
            return Err(ZplaneError::FilterDesign(format!(
                "digital cutoff must satisfy 0 < w < 1, got {w}"
            )));
        }
    }
    if let Band::Bandpass(lo, hi) = band {
        if lo >= hi {
            return Err(ZplaneError::FilterDesign(
                "bandpass edges must be strictly increasing".to_string(),
            ));
        }
    }

    let fs = 2.0;
    let warp = |w: f64| 2.0 * fs * (PI * w / fs).tan();

    let shifted = match band {
        Band::Lowpass(w) => lp2lp_zpk(prototype, warp(w))?,
        Band::Highpass(w) => lp2hp_zpk(prototype, warp(w))?,
        Band::Bandpass(lo, hi) => {
            let (lo, hi) = (warp(lo), warp(hi));
            let wo = (lo * hi).sqrt();
            lp2bp_zpk(prototype, wo, hi - lo)?
        }
    };
    let digital = bilinear_zpk(&shifted, fs)?;
    Ok(zpk2tf(&digital))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::prototypes::butterap;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn sample_zpk() -> Zpk {
        Zpk {
            z: vec![c(0.0, -2.0), c(0.0, 2.0)],
            p: vec![c(-0.75, 0.0), c(-0.5, -0.5), c(-0.5, 0.5)],
            k: 3.0,
        }
    }

    fn assert_zpk_close(actual: &Zpk, z: &[Complex64], p: &[Complex64], k: f64) {
        assert_eq!(actual.z.len(), z.len());
        assert_eq!(actual.p.len(), p.len());
        for (a, e) in actual.z.iter().zip(z.iter()) {
            assert_abs_diff_eq!(a.re, e.re, epsilon = 1e-12);
            assert_abs_diff_eq!(a.im, e.im, epsilon = 1e-12);
        }
        for (a, e) in actual.p.iter().zip(p.iter()) {
            assert_abs_diff_eq!(a.re, e.re, epsilon = 1e-12);
            assert_abs_diff_eq!(a.im, e.im, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(actual.k, k, epsilon = 1e-12);
    }

    #[test]
    fn test_lp2lp_scales_radially() {
        let zpk = sample_zpk();
        let out = lp2lp_zpk(&zpk, 20.0).unwrap();
        assert_zpk_close(
            &out,
            &[c(0.0, -40.0), c(0.0, 40.0)],
            &[c(-15.0, 0.0), c(-10.0, -10.0), c(-10.0, 10.0)],
            60.0,
        );
    }

    #[test]
    fn test_lp2hp_inverts_and_fills_origin() {
        let zpk = sample_zpk();
        let out = lp2hp_zpk(&zpk, 6.0).unwrap();
        assert_zpk_close(
            &out,
            &[c(0.0, 3.0), c(0.0, -3.0), c(0.0, 0.0)],
            &[c(-8.0, 0.0), c(-6.0, 6.0), c(-6.0, -6.0)],
            32.0,
        );
    }

    #[test]
    fn test_lp2bp_doubles_the_order() {
        let zpk = butterap(4).unwrap();
        let out = lp2bp_zpk(&zpk, 1.0, 0.5).unwrap();
        assert_eq!(out.p.len(), 8);
        assert_eq!(out.z.len(), 4);
    }

    #[test]
    fn test_bilinear_maps_left_half_plane_inside_unit_circle() {
        let zpk = butterap(5).unwrap();
        let warped = lp2lp_zpk(&zpk, 2.0 * 2.0 * (PI * 0.4 / 2.0).tan()).unwrap();
        let digital = bilinear_zpk(&warped, 2.0).unwrap();
        for pole in &digital.p {
            assert!(pole.norm() < 1.0, "pole {pole} outside unit circle");
        }
        // Zeros at infinity land on the Nyquist point
        for zero in &digital.z {
            assert_abs_diff_eq!(zero.re, -1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(zero.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zpk2tf_applies_gain_to_numerator() {
        let zpk = Zpk {
            z: vec![c(1.0, 0.0)],
            p: vec![c(0.5, 0.0)],
            k: 2.0,
        };
        let (b, a) = zpk2tf(&zpk);
        assert_eq!(b, vec![2.0, -2.0]);
        assert_eq!(a, vec![1.0, -0.5]);
    }

    #[test]
    fn test_design_digital_rejects_bad_cutoffs() {
        let zpk = butterap(2).unwrap();
        assert!(design_digital(&zpk, Band::Lowpass(0.0)).is_err());
        assert!(design_digital(&zpk, Band::Lowpass(1.0)).is_err());
        assert!(design_digital(&zpk, Band::Bandpass(0.6, 0.3)).is_err());
    }

    #[test]
    fn test_design_digital_lowpass_has_unit_dc_gain() {
        let zpk = butterap(4).unwrap();
        let (b, a) = design_digital(&zpk, Band::Lowpass(0.4)).unwrap();
        assert_eq!(b.len(), 5);
        assert_eq!(a.len(), 5);
        // H(1) = sum(b)/sum(a) is the DC gain
        let dc = b.iter().sum::<f64>() / a.iter().sum::<f64>();
        assert_abs_diff_eq!(dc, 1.0, epsilon = 1e-9);
    }
}
