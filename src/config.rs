//! Configuration for the z-plane designer core.
//!
//! All parameters have sensible defaults. Use `ZplaneConfig::default()` and
//! override fields as needed:
//!
//! ```
//! use zplane::config::ZplaneConfig;
//!
//! let mut config = ZplaneConfig::default();
//! config.designer.response_points = 1024;
//! ```

/// Designer-level configuration
///
/// Controls the frequency-response grid and the interactive placement
/// guard applied to incoming point events.
#[derive(Debug, Clone)]
pub struct DesignerConfig {
    /// Number of frequencies evaluated over [0, π) for response curves
    pub response_points: usize,
    /// Point events farther than this from the origin are ignored
    pub placement_limit: f64,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            response_points: 500,
            placement_limit: 1.2,
        }
    }
}

/// Fixed design point for the prototype library
///
/// Every library entry bakes these parameters into its generator; cutoffs
/// are normalized to Nyquist (0 < f < 1).
#[derive(Debug, Clone)]
pub struct PrototypeConfig {
    /// Filter order for every library design
    pub order: usize,
    /// Cutoff for lowpass/highpass designs
    pub cutoff: f64,
    /// Lower band edge for bandpass designs
    pub band_low: f64,
    /// Upper band edge for bandpass designs
    pub band_high: f64,
    /// Passband ripple in dB (Chebyshev I, elliptic)
    pub passband_ripple_db: f64,
    /// Stopband attenuation in dB (Chebyshev II, elliptic)
    pub stopband_atten_db: f64,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            order: 4,
            cutoff: 0.4,
            band_low: 0.3,
            band_high: 0.6,
            passband_ripple_db: 1.0,
            stopband_atten_db: 20.0,
        }
    }
}

/// Signal-input collaborator configuration
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Maximum number of buffered input samples (FIFO eviction beyond this)
    pub buffer_capacity: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 10_000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct ZplaneConfig {
    /// Designer facade configuration
    pub designer: DesignerConfig,
    /// Prototype library design point
    pub prototype: PrototypeConfig,
    /// Signal input buffer configuration
    pub signal: SignalConfig,
}
