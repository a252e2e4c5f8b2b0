//! Sonomark DSP core.
//!
//! Deterministic procedural synthesis of the Sonomark audio logo: stem
//! generators, envelope and filter primitives, a fixed-length timeline
//! mixer, and a deterministic WAV encoder. All randomness flows through
//! seeded PCG32 streams, so a base seed fully determines the output.

pub mod config;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod mixer;
pub mod rng;
pub mod score;
pub mod stems;
pub mod wav;

pub use config::RenderConfig;
pub use error::{DspError, DspResult};
pub use mixer::{Placement, StereoBuffer, TimelineMixer, NORMALIZE_TARGET};
pub use score::{logo_score, render, VOICE_OFFSET_MS};
pub use wav::EncodedWav;
