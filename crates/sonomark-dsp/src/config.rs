//! Render configuration threaded through the pipeline.

use crate::error::{DspError, DspResult};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default master buffer length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 4.5;

/// Global parameters for one render run.
///
/// Passed explicitly to every stage; there is no module-level state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Master buffer length in seconds.
    pub duration_seconds: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

impl RenderConfig {
    /// Creates a validated configuration.
    pub fn new(sample_rate: u32, duration_seconds: f64) -> DspResult<Self> {
        let config = Self {
            sample_rate,
            duration_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the sample rate and duration are usable.
    pub fn validate(&self) -> DspResult<()> {
        if self.sample_rate == 0 {
            return Err(DspError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(DspError::InvalidDuration {
                seconds: self.duration_seconds,
            });
        }
        Ok(())
    }

    /// Length of the master buffer in samples per channel.
    ///
    /// Rounds up so the configured duration always fits.
    pub fn master_samples(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64).ceil() as usize
    }
}
