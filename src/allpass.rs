//! All-pass sections: reciprocal-conjugate zero/pole pairs.
//!
//! Each section pairs every zero `z` with the pole `1/conj(z)`, which keeps
//! the magnitude response flat while shaping phase. Sections come from a
//! small fixed library or from user-supplied zero values; the active
//! cascade is whatever subset the user has selected.

use crate::error::{Result, ZplaneError};
use num_complex::Complex64;

/// One all-pass section
///
/// Invariant: `poles[i] == 1 / conj(zeros[i])` for sections built through
/// [`AllPassSection::from_zeros`]; library entries carry the same pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPassSection {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
}

impl AllPassSection {
    /// Build a section from zero locations, deriving the matching poles
    ///
    /// A zero at the origin has no reciprocal-conjugate pole and is
    /// rejected.
    pub fn from_zeros(zeros: Vec<Complex64>) -> Result<Self> {
        if zeros.is_empty() {
            return Err(ZplaneError::MalformedInput(
                "all-pass section needs at least one zero".to_string(),
            ));
        }
        let poles = zeros
            .iter()
            .map(|z| {
                if z.re == 0.0 && z.im == 0.0 {
                    Err(ZplaneError::MalformedInput(
                        "all-pass zero at the origin has no reciprocal pole".to_string(),
                    ))
                } else {
                    Ok(1.0 / z.conj())
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { zeros, poles })
    }
}

/// Named collection of all-pass sections
///
/// Starts with the four stock sections; user-built sections are registered
/// under the reserved `"Custom"` name for reuse.
#[derive(Debug, Clone)]
pub struct AllPassLibrary {
    entries: Vec<(String, AllPassSection)>,
}

/// Reserved name for the most recent user-built section
pub const CUSTOM_SECTION_NAME: &str = "Custom";

impl Default for AllPassLibrary {
    fn default() -> Self {
        let c = Complex64::new;
        let stock = [
            ("All-Pass 1", vec![c(-2.0, 0.0)], vec![c(-0.5, 0.0)]),
            ("All-Pass 2", vec![c(1.25, 0.0)], vec![c(0.8, 0.0)]),
            ("All-Pass 3", vec![c(-2.0, -1.0)], vec![c(-0.4, -0.2)]),
            ("All-Pass 4", vec![c(0.0, 2.0)], vec![c(0.0, 0.5)]),
        ];
        Self {
            entries: stock
                .into_iter()
                .map(|(name, zeros, poles)| (name.to_string(), AllPassSection { zeros, poles }))
                .collect(),
        }
    }
}

impl AllPassLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&AllPassSection> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, section)| section)
    }

    /// Insert or replace a named section
    pub fn register(&mut self, name: &str, section: AllPassSection) {
        match self.entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, existing)) => *existing = section,
            None => self.entries.push((name.to_string(), section)),
        }
    }
}

/// Parse a comma-separated list of real zero values
///
/// Empty tokens are skipped (trailing commas are tolerated); any
/// non-numeric token rejects the whole input so a cascade is never built
/// from a partially parsed root set.
pub fn parse_zero_list(text: &str) -> Result<Vec<Complex64>> {
    let mut zeros = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| {
            ZplaneError::MalformedInput(format!("'{token}' is not a number"))
        })?;
        zeros.push(Complex64::new(value, 0.0));
    }
    if zeros.is_empty() {
        return Err(ZplaneError::MalformedInput(
            "no zero values supplied".to_string(),
        ));
    }
    Ok(zeros)
}
