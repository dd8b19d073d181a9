//! Transfer-function synthesis from root sets, prototypes, and cascades.
//!
//! Coefficients are never stored; they are rebuilt on demand from whichever
//! source is active. Dispatch is over [`FilterSource`] rather than string
//! comparison, and the combination rule is applied in exactly one place:
//! manual root sets merge with a cascade at the root level before polynomial
//! construction, while a named prototype keeps its designed polynomial and
//! picks up the cascade by polynomial convolution. The two paths are
//! algebraically equivalent; which one runs depends only on the source.

pub mod library;
pub mod poly;
pub mod prototypes;
pub mod transform;

pub use library::Prototype;
pub use prototypes::Zpk;

use crate::allpass::AllPassSection;
use crate::config::PrototypeConfig;
use crate::error::Result;
use crate::rootset::RootSet;
use num_complex::Complex64;

/// What currently drives the transfer function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSource {
    /// Nothing selected and nothing placed: identity pass-through
    #[default]
    None,
    /// A library prototype's designed coefficients
    Prototype(Prototype),
    /// Manually placed zeros and poles
    Manual,
}

/// Numerator/denominator coefficient pair, highest power first
///
/// Kept complex throughout; conjugate-symmetric root sets leave only
/// negligible imaginary residue, which consumers discard where they need
/// real values.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    pub b: Vec<Complex64>,
    pub a: Vec<Complex64>,
}

impl Coefficients {
    /// The identity pass-through filter
    pub fn identity() -> Self {
        Self {
            b: vec![Complex64::new(1.0, 0.0)],
            a: vec![Complex64::new(1.0, 0.0)],
        }
    }

    fn from_real(b: &[f64], a: &[f64]) -> Self {
        Self {
            b: b.iter().map(|&c| Complex64::new(c, 0.0)).collect(),
            a: a.iter().map(|&c| Complex64::new(c, 0.0)).collect(),
        }
    }

    /// Real parts of `(b, a)`, for consumers that expect real coefficients
    pub fn real(&self) -> (Vec<f64>, Vec<f64>) {
        (poly::real_coefficients(&self.b), poly::real_coefficients(&self.a))
    }

    /// Coefficients scaled so the leading denominator coefficient is 1
    pub fn normalized(&self) -> Self {
        let a0 = self.a[0];
        if a0 == Complex64::new(1.0, 0.0) {
            return self.clone();
        }
        Self {
            b: self.b.iter().map(|&c| c / a0).collect(),
            a: self.a.iter().map(|&c| c / a0).collect(),
        }
    }
}

/// Root lists of a manual root set merged with the selected cascade
///
/// Concatenation order is root set first, then sections in selection order.
pub fn combined_roots(
    roots: &RootSet,
    cascade: &[AllPassSection],
) -> (Vec<Complex64>, Vec<Complex64>) {
    let mut zeros = roots.zeros.clone();
    let mut poles = roots.poles.clone();
    for section in cascade {
        zeros.extend_from_slice(&section.zeros);
        poles.extend_from_slice(&section.poles);
    }
    (zeros, poles)
}

/// Monic polynomials from merged zero/pole lists
///
/// Both lists empty yields the identity pass-through.
pub fn from_roots(zeros: &[Complex64], poles: &[Complex64]) -> Coefficients {
    if zeros.is_empty() && poles.is_empty() {
        return Coefficients::identity();
    }
    Coefficients {
        b: poly::poly_from_roots(zeros),
        a: poly::poly_from_roots(poles),
    }
}

/// Build the active transfer function
///
/// `cascade` is the selected all-pass sections; pass an empty slice when
/// cascading is disabled.
pub fn synthesize(
    source: FilterSource,
    roots: &RootSet,
    cascade: &[AllPassSection],
    config: &PrototypeConfig,
) -> Result<Coefficients> {
    match source {
        FilterSource::None | FilterSource::Manual => {
            let (zeros, poles) = combined_roots(roots, cascade);
            Ok(from_roots(&zeros, &poles))
        }
        FilterSource::Prototype(prototype) => {
            let (b, a) = prototype.design(config)?;
            let mut coeffs = Coefficients::from_real(&b, &a);
            if !cascade.is_empty() {
                let (ap_zeros, ap_poles) = combined_roots(&RootSet::new(), cascade);
                let b_ap = poly::poly_from_roots(&ap_zeros);
                let a_ap = poly::poly_from_roots(&ap_poles);
                coeffs = Coefficients {
                    b: poly::convolve(&coeffs.b, &b_ap),
                    a: poly::convolve(&coeffs.a, &a_ap),
                };
            }
            Ok(coeffs)
        }
    }
}
