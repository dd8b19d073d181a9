//! Analog lowpass prototypes in zero/pole/gain form.
//!
//! Each prototype is normalized to a cutoff of 1 rad/s and is turned into a
//! digital design by the frequency transforms and bilinear transform in
//! [`super::transform`]. The Chebyshev prototypes follow the classic
//! closed-form pole formulas; the elliptic prototype evaluates the Jacobi
//! elliptic functions with descending Landen recursions.

use crate::error::{Result, ZplaneError};
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, PI};

/// Filter parameters in zero, pole, gain format
#[derive(Debug, Clone)]
pub struct Zpk {
    /// Zeros
    pub z: Vec<Complex64>,
    /// Poles
    pub p: Vec<Complex64>,
    /// Gain
    pub k: f64,
}

fn check_order(order: usize) -> Result<()> {
    if order == 0 {
        return Err(ZplaneError::FilterDesign(
            "order must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Odd integers -N+1, -N+3, ..., N-1
fn odd_indices(order: usize) -> impl Iterator<Item = i32> {
    let n = order as i32;
    (-n + 1..n).step_by(2)
}

/// Analog prototype of an Nth-order Butterworth filter
///
/// Poles are evenly spaced on the left half of the unit circle; there are
/// no finite zeros and the gain is 1.
pub fn butterap(order: usize) -> Result<Zpk> {
    check_order(order)?;
    let n = order as f64;
    let p = odd_indices(order)
        .map(|m| -(Complex64::i() * PI * m as f64 / (2.0 * n)).exp())
        .collect();
    Ok(Zpk {
        z: Vec::new(),
        p,
        k: 1.0,
    })
}

/// Analog prototype of an Nth-order Chebyshev type I filter
///
/// `rp` is the maximum passband ripple in dB. Poles lie on an ellipse in
/// the left half-plane; the gain is chosen so the passband response swings
/// between 1 and `10^(-rp/20)`.
pub fn cheb1ap(order: usize, rp: f64) -> Result<Zpk> {
    check_order(order)?;
    let n = order as f64;
    let eps = (10f64.powf(0.1 * rp) - 1.0).sqrt();
    let mu = (1.0 / eps).asinh() / n;

    let p: Vec<Complex64> = odd_indices(order)
        .map(|m| {
            let theta = PI * m as f64 / (2.0 * n);
            -Complex64::new(mu, theta).sinh()
        })
        .collect();

    let mut k = p
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, pole| acc * -pole)
        .re;
    if order % 2 == 0 {
        k /= (1.0 + eps * eps).sqrt();
    }
    Ok(Zpk { z: Vec::new(), p, k })
}

/// Analog prototype of an Nth-order Chebyshev type II filter
///
/// `rs` is the minimum stopband attenuation in dB. Zeros sit on the
/// imaginary axis; the passband is monotonic with unit DC gain.
pub fn cheb2ap(order: usize, rs: f64) -> Result<Zpk> {
    check_order(order)?;
    let n = order as f64;
    let de = 1.0 / (10f64.powf(0.1 * rs) - 1.0).sqrt();
    let mu = (1.0 / de).asinh() / n;

    // For odd orders the middle index would put a zero at infinity; skip it.
    let zero_indices: Vec<i32> = odd_indices(order).filter(|m| *m != 0).collect();
    let z: Vec<Complex64> = zero_indices
        .iter()
        .map(|&m| {
            let s = (PI * m as f64 / (2.0 * n)).sin();
            -(Complex64::i() / s).conj()
        })
        .collect();

    let p: Vec<Complex64> = odd_indices(order)
        .map(|m| {
            let unit = -(Complex64::i() * PI * m as f64 / (2.0 * n)).exp();
            let stretched = Complex64::new(mu.sinh() * unit.re, mu.cosh() * unit.im);
            1.0 / stretched
        })
        .collect();

    let num = p
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, pole| acc * -pole);
    let den = z
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, zero| acc * -zero);
    Ok(Zpk {
        z,
        p,
        k: (num / den).re,
    })
}

/// Analog prototype of an Nth-order elliptic (Cauer) filter
///
/// `rp` is the passband ripple and `rs` the stopband attenuation, both in
/// dB. Equiripple in both bands; requires `rs > rp`.
pub fn ellipap(order: usize, rp: f64, rs: f64) -> Result<Zpk> {
    check_order(order)?;
    let eps_sq = 10f64.powf(0.1 * rp) - 1.0;
    let stop_sq = 10f64.powf(0.1 * rs) - 1.0;
    if stop_sq <= eps_sq {
        return Err(ZplaneError::FilterDesign(
            "stopband attenuation must exceed passband ripple".to_string(),
        ));
    }

    if order == 1 {
        // First order degenerates to a real pole with unit DC gain
        let pole = -(1.0 / eps_sq).sqrt();
        return Ok(Zpk {
            z: Vec::new(),
            p: vec![Complex64::new(pole, 0.0)],
            k: -pole,
        });
    }

    let eps = eps_sq.sqrt();
    let k1 = (eps_sq / stop_sq).sqrt();
    let k = ellipdeg(order, k1);

    let n = order as f64;
    let pairs = order / 2;
    let ui: Vec<f64> = (1..=pairs).map(|i| (2 * i - 1) as f64 / n).collect();

    // Transmission zeros at ±j/(k·cd(ui, k))
    let mut z = Vec::with_capacity(2 * pairs);
    for &u in &ui {
        let zeta = cde(Complex64::new(u, 0.0), k).re;
        let zero = Complex64::i() / (k * zeta);
        z.push(zero);
        z.push(zero.conj());
    }

    let v0 = (-Complex64::i() * asne(Complex64::i() / eps, k1) / n).re;

    let mut p = Vec::with_capacity(order);
    for &u in &ui {
        let pole = Complex64::i() * cde(Complex64::new(u, -v0), k);
        p.push(pole);
        p.push(pole.conj());
    }
    if order % 2 == 1 {
        let pole = Complex64::i() * sne(Complex64::new(0.0, v0), k);
        p.push(Complex64::new(pole.re, 0.0));
    }

    let num = p
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, pole| acc * -pole);
    let den = z
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, zero| acc * -zero);
    let mut gain = (num / den).re;
    if order % 2 == 0 {
        gain /= (1.0 + eps_sq).sqrt();
    }
    Ok(Zpk { z, p, k: gain })
}

/// Descending Landen sequence of elliptic moduli
fn landen(k: f64) -> Vec<f64> {
    let mut moduli = Vec::new();
    if k == 0.0 || k == 1.0 {
        return moduli;
    }
    let mut k = k;
    while k > f64::EPSILON && moduli.len() < 32 {
        k = (k / (1.0 + (1.0 - k * k).sqrt())).powi(2);
        moduli.push(k);
    }
    moduli
}

/// Jacobi cd function with argument in units of the quarter period K
fn cde(u: Complex64, k: f64) -> Complex64 {
    let moduli = landen(k);
    let mut w = (u * FRAC_PI_2).cos();
    for &vn in moduli.iter().rev() {
        w = (1.0 + vn) * w / (1.0 + vn * w * w);
    }
    w
}

/// Jacobi sn function with argument in units of the quarter period K
fn sne(u: Complex64, k: f64) -> Complex64 {
    let moduli = landen(k);
    let mut w = (u * FRAC_PI_2).sin();
    for &vn in moduli.iter().rev() {
        w = (1.0 + vn) * w / (1.0 + vn * w * w);
    }
    w
}

/// Inverse of [`cde`]
fn acde(w: Complex64, k: f64) -> Complex64 {
    let moduli = landen(k);
    let mut w = w;
    let mut prev = k;
    for &vn in &moduli {
        w = 2.0 * w / ((1.0 + vn) * (1.0 + (1.0 - w * w * prev * prev).sqrt()));
        prev = vn;
    }
    w.acos() * (2.0 / PI)
}

/// Inverse of [`sne`]
fn asne(w: Complex64, k: f64) -> Complex64 {
    1.0 - acde(w, k)
}

/// Modulus solving the degree equation for an Nth-order elliptic design
fn ellipdeg(order: usize, k1: f64) -> f64 {
    let n = order as f64;
    let kc = (1.0 - k1 * k1).sqrt();
    let mut product = 1.0;
    for i in 1..=(order / 2) {
        let u = (2 * i - 1) as f64 / n;
        product *= sne(Complex64::new(u, 0.0), kc).re;
    }
    let kp = kc.powi(order as i32) * product.powi(4);
    (1.0 - kp * kp).sqrt()
}
