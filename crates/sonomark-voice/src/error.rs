//! Error types for the voice adapter.

use thiserror::Error;

/// Result type for voice adapter operations.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Errors that can occur while producing the voice stem.
///
/// All of these are recoverable at the render level: the caller substitutes
/// silence and the run continues.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// Speech engine executable not found.
    #[error("speech engine not found. Install espeak-ng (or espeak), or set SONOMARK_ESPEAK_PATH")]
    EngineNotFound,

    /// Failed to spawn the speech engine process.
    #[error("failed to spawn speech engine: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The speech engine exited with non-zero status.
    #[error("speech engine exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },

    /// The engine's output WAV could not be decoded.
    #[error("failed to decode speech output: {0}")]
    DecodeFailed(#[from] hound::Error),

    /// The engine produced a WAV with no audio frames.
    #[error("speech engine produced an empty recording")]
    EmptyRecording,

    /// IO error during scratch file handling.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoiceError {
    /// Creates a new process failed error.
    pub fn process_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }
}
