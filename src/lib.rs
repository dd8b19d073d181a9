pub mod allpass;
pub mod batch;
pub mod config;
pub mod designer;
pub mod error;
pub mod persist;
pub mod response;
pub mod rootset;
pub mod signal_input;
pub mod synthesis;

pub use config::ZplaneConfig;
pub use designer::{Designer, PointAction};
pub use error::{Result, ZplaneError};
pub use response::FrequencyResponse;
pub use rootset::{RootKind, RootSet};
pub use synthesis::{Coefficients, FilterSource, Prototype};
