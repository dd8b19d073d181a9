//! Named library of canonical filter prototypes.
//!
//! Every entry is a zero-argument generator over a fixed design point (see
//! [`PrototypeConfig`]): order, cutoffs, ripple, and attenuation are baked
//! in. Generators return normalized digital `(b, a)` coefficient pairs;
//! `roots_of` recovers the zero/pole sets by polynomial root-finding so a
//! selection can replace the interactive root set wholesale.

use super::poly::roots;
use super::prototypes::{butterap, cheb1ap, cheb2ap, ellipap};
use super::transform::{Band, design_digital};
use crate::config::PrototypeConfig;
use crate::error::{Result, ZplaneError};
use crate::rootset::RootSet;
use std::fmt;
use std::str::FromStr;

/// A canonical filter prototype from the fixed library
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Prototype {
    ButterworthLowpass,
    ButterworthHighpass,
    ButterworthBandpass,
    Chebyshev1Lowpass,
    Chebyshev1Highpass,
    Chebyshev1Bandpass,
    Chebyshev2Lowpass,
    Chebyshev2Highpass,
    Chebyshev2Bandpass,
    EllipticLowpass,
    EllipticHighpass,
}

impl Prototype {
    /// Every library entry, in display order
    pub const ALL: [Prototype; 11] = [
        Prototype::ButterworthLowpass,
        Prototype::ButterworthHighpass,
        Prototype::ButterworthBandpass,
        Prototype::Chebyshev1Lowpass,
        Prototype::Chebyshev1Highpass,
        Prototype::Chebyshev1Bandpass,
        Prototype::Chebyshev2Lowpass,
        Prototype::Chebyshev2Highpass,
        Prototype::Chebyshev2Bandpass,
        Prototype::EllipticLowpass,
        Prototype::EllipticHighpass,
    ];

    /// Display name as presented to the user
    pub fn name(&self) -> &'static str {
        match self {
            Prototype::ButterworthLowpass => "Butterworth LPF",
            Prototype::ButterworthHighpass => "Butterworth HPF",
            Prototype::ButterworthBandpass => "Butterworth BPF",
            Prototype::Chebyshev1Lowpass => "Chebyshev I LPF",
            Prototype::Chebyshev1Highpass => "Chebyshev I HPF",
            Prototype::Chebyshev1Bandpass => "Chebyshev I BPF",
            Prototype::Chebyshev2Lowpass => "Chebyshev II LPF",
            Prototype::Chebyshev2Highpass => "Chebyshev II HPF",
            Prototype::Chebyshev2Bandpass => "Chebyshev II BPF",
            Prototype::EllipticLowpass => "Elliptic LPF",
            Prototype::EllipticHighpass => "Elliptic HPF",
        }
    }

    fn band(&self, config: &PrototypeConfig) -> Band {
        match self {
            Prototype::ButterworthLowpass
            | Prototype::Chebyshev1Lowpass
            | Prototype::Chebyshev2Lowpass
            | Prototype::EllipticLowpass => Band::Lowpass(config.cutoff),
            Prototype::ButterworthHighpass
            | Prototype::Chebyshev1Highpass
            | Prototype::Chebyshev2Highpass
            | Prototype::EllipticHighpass => Band::Highpass(config.cutoff),
            Prototype::ButterworthBandpass
            | Prototype::Chebyshev1Bandpass
            | Prototype::Chebyshev2Bandpass => Band::Bandpass(config.band_low, config.band_high),
        }
    }

    /// Generate the normalized digital `(b, a)` coefficients for this entry
    pub fn design(&self, config: &PrototypeConfig) -> Result<(Vec<f64>, Vec<f64>)> {
        let analog = match self {
            Prototype::ButterworthLowpass
            | Prototype::ButterworthHighpass
            | Prototype::ButterworthBandpass => butterap(config.order)?,
            Prototype::Chebyshev1Lowpass
            | Prototype::Chebyshev1Highpass
            | Prototype::Chebyshev1Bandpass => {
                cheb1ap(config.order, config.passband_ripple_db)?
            }
            Prototype::Chebyshev2Lowpass
            | Prototype::Chebyshev2Highpass
            | Prototype::Chebyshev2Bandpass => {
                cheb2ap(config.order, config.stopband_atten_db)?
            }
            Prototype::EllipticLowpass | Prototype::EllipticHighpass => ellipap(
                config.order,
                config.passband_ripple_db,
                config.stopband_atten_db,
            )?,
        };
        design_digital(&analog, self.band(config))
    }

    /// Zeros and poles of this entry, by numerator/denominator root-finding
    pub fn roots_of(&self, config: &PrototypeConfig) -> Result<RootSet> {
        let (b, a) = self.design(config)?;
        Ok(RootSet {
            zeros: roots(&b),
            poles: roots(&a),
        })
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prototype {
    type Err = ZplaneError;

    fn from_str(s: &str) -> Result<Self> {
        Prototype::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ZplaneError::UnknownPrototype(s.to_string()))
    }
}
