//! Sonomark voice adapter.
//!
//! Produces the spoken stem of the logo by driving a text-to-speech engine
//! as a subprocess, decoding its WAV output, and resampling to the master
//! rate. Engine failures are reported as [`VoiceError`]s; callers are
//! expected to fall back to silence rather than abort the render.

pub mod decode;
pub mod engine;
pub mod error;
pub mod resample;

pub use engine::{EspeakEngine, SilentVoice, SpeechSynthesizer, DEFAULT_RATE_WPM};
pub use error::{VoiceError, VoiceResult};
