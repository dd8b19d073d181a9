//! Bounded sample buffer for the live signal-input collaborator.
//!
//! The collaborator appends one sample per input event and re-filters the
//! whole buffer through the current coefficients each time; the buffer
//! evicts its oldest samples once capacity is exceeded.

use crate::batch;
use crate::error::Result;
use crate::synthesis::Coefficients;

/// FIFO buffer of real input samples
#[derive(Debug, Clone)]
pub struct SignalBuffer {
    samples: Vec<f64>,
    capacity: usize,
}

impl SignalBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when over capacity
    pub fn push(&mut self, sample: f64) {
        self.samples.push(sample);
        if self.samples.len() > self.capacity {
            let excess = self.samples.len() - self.capacity;
            self.samples.drain(0..excess);
        }
    }

    /// Buffered samples in chronological order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Run the full buffer through the given transfer function
    ///
    /// This is the per-update path: called after every `push` with the
    /// coefficients fetched from the designer at that moment.
    pub fn filter_through(&self, coefficients: &Coefficients) -> Result<Vec<f64>> {
        batch::filter(&coefficients.b, &coefficients.a, &self.samples)
    }
}

impl Default for SignalBuffer {
    fn default() -> Self {
        Self::new(crate::config::SignalConfig::default().buffer_capacity)
    }
}
