//! Speech-engine subprocess invocation.
//!
//! Spawns espeak-ng (or espeak) with a scratch WAV destination, decodes the
//! result, and resamples it to the caller's master rate. The engine is
//! located through a config override, the `SONOMARK_ESPEAK_PATH` environment
//! variable, `PATH`, then common install locations.

use std::path::PathBuf;
use std::process::Command;

use crate::decode;
use crate::error::{VoiceError, VoiceResult};
use crate::resample;

/// Environment variable overriding the engine executable path.
pub const ENGINE_PATH_ENV: &str = "SONOMARK_ESPEAK_PATH";

/// Default speaking rate in words per minute.
pub const DEFAULT_RATE_WPM: u32 = 130;

/// Produces the spoken stem as a mono f64 signal.
pub trait SpeechSynthesizer {
    /// Synthesizes `text` at `rate_wpm` words per minute.
    ///
    /// # Returns
    /// Mono samples at the synthesizer's target sample rate.
    fn synthesize(&self, text: &str, rate_wpm: u32) -> VoiceResult<Vec<f64>>;
}

/// espeak-ng subprocess adapter.
#[derive(Debug, Clone)]
pub struct EspeakEngine {
    /// Explicit engine executable, checked before any discovery.
    pub engine_path: Option<PathBuf>,
    /// Sample rate the decoded speech is resampled to.
    pub target_sample_rate: u32,
}

impl EspeakEngine {
    /// Creates an engine targeting the given sample rate.
    pub fn new(target_sample_rate: u32) -> Self {
        Self {
            engine_path: None,
            target_sample_rate,
        }
    }

    /// Sets an explicit engine executable path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.engine_path = Some(path.into());
        self
    }

    /// Finds the speech engine executable.
    pub fn locate(&self) -> VoiceResult<PathBuf> {
        // Config override first
        if let Some(ref path) = self.engine_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        // Environment override
        if let Ok(path) = std::env::var(ENGINE_PATH_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // Search PATH
        let engine_names = if cfg!(windows) {
            vec!["espeak-ng.exe", "espeak.exe", "espeak-ng", "espeak"]
        } else {
            vec!["espeak-ng", "espeak"]
        };
        for name in engine_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        // Common installation paths
        let common_paths = if cfg!(target_os = "macos") {
            vec![
                "/opt/homebrew/bin/espeak-ng",
                "/usr/local/bin/espeak-ng",
                "/usr/local/bin/espeak",
            ]
        } else {
            vec![
                "/usr/bin/espeak-ng",
                "/usr/bin/espeak",
                "/usr/local/bin/espeak-ng",
            ]
        };
        for path_str in common_paths {
            let path = PathBuf::from(path_str);
            if path.exists() {
                return Ok(path);
            }
        }

        Err(VoiceError::EngineNotFound)
    }

    /// Builds the engine argument list for a scratch WAV destination.
    fn build_args(scratch: &std::path::Path, text: &str, rate_wpm: u32) -> Vec<std::ffi::OsString> {
        vec![
            "-w".into(),
            scratch.as_os_str().to_os_string(),
            "-s".into(),
            rate_wpm.to_string().into(),
            text.into(),
        ]
    }
}

impl SpeechSynthesizer for EspeakEngine {
    fn synthesize(&self, text: &str, rate_wpm: u32) -> VoiceResult<Vec<f64>> {
        let engine = self.locate()?;

        let scratch = tempfile::Builder::new()
            .prefix("sonomark_voice_")
            .suffix(".wav")
            .tempfile()?;

        let output = Command::new(&engine)
            .args(Self::build_args(scratch.path(), text, rate_wpm))
            .output()
            .map_err(VoiceError::SpawnFailed)?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(VoiceError::process_failed(exit_code, stderr));
        }

        let (engine_rate, samples) = decode::read_wav_mono(scratch.path())?;
        if samples.is_empty() {
            return Err(VoiceError::EmptyRecording);
        }

        Ok(resample::linear(&samples, engine_rate, self.target_sample_rate))
    }
}

/// Stand-in synthesizer producing silence.
///
/// Used when voice is disabled and as the fallback stem in tests.
#[derive(Debug, Clone, Copy)]
pub struct SilentVoice {
    /// Length of the silent stem in seconds.
    pub duration_seconds: f64,
    /// Sample rate of the produced signal.
    pub sample_rate: u32,
}

impl SpeechSynthesizer for SilentVoice {
    fn synthesize(&self, _text: &str, _rate_wpm: u32) -> VoiceResult<Vec<f64>> {
        let num_samples = (self.duration_seconds * self.sample_rate as f64).round() as usize;
        Ok(vec![0.0; num_samples])
    }
}
