//! Error types for the DSP core.

use thiserror::Error;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur while generating or mixing audio.
#[derive(Debug, Error)]
pub enum DspError {
    /// The sample rate is zero or otherwise unusable.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    /// The requested duration is not a positive finite number of seconds.
    #[error("invalid duration: {seconds} s")]
    InvalidDuration { seconds: f64 },

    /// A synthesis or mix parameter is out of range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// File I/O failed while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DspError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
