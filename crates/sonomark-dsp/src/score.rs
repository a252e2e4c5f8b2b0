//! The audio-logo arrangement and render entry point.
//!
//! The arrangement is fixed data: which stem plays, how long, and where it
//! lands on the timeline. The voice signal is passed in by the caller, so
//! rendering stays independent of any speech engine.

use rand_pcg::Pcg32;

use crate::config::RenderConfig;
use crate::error::DspResult;
use crate::mixer::{Placement, StereoBuffer, TimelineMixer};
use crate::rng::create_stem_rng;
use crate::stems::{ChordSynth, ClickSynth, ShimmerSynth, SlideSynth, StemSynth};

/// Timeline offset of the voice stem in milliseconds.
pub const VOICE_OFFSET_MS: u32 = 3000;

/// One of the synthesized stem types.
#[derive(Debug, Clone)]
pub enum StemKind {
    Click(ClickSynth),
    Shimmer(ShimmerSynth),
    Chord(ChordSynth),
    Slide(SlideSynth),
}

impl StemKind {
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self {
            StemKind::Click(synth) => synth.synthesize(duration_seconds, sample_rate, rng),
            StemKind::Shimmer(synth) => synth.synthesize(duration_seconds, sample_rate, rng),
            StemKind::Chord(synth) => synth.synthesize(duration_seconds, sample_rate, rng),
            StemKind::Slide(synth) => synth.synthesize(duration_seconds, sample_rate, rng),
        }
    }
}

/// A stem scheduled on the logo timeline.
#[derive(Debug, Clone)]
pub struct ScoredStem {
    /// Key for deriving the stem's independent random stream.
    pub key: &'static str,
    /// Which generator to run.
    pub kind: StemKind,
    /// Stem length in seconds.
    pub duration_seconds: f64,
    /// Timeline placement.
    pub placement: Placement,
}

/// The logo arrangement: three clicks, a shimmer, a chord pad, a noise slide.
///
/// The voice stem is appended separately by [`render`].
pub fn logo_score() -> Vec<ScoredStem> {
    vec![
        ScoredStem {
            key: "click-1",
            kind: StemKind::Click(ClickSynth::default()),
            duration_seconds: 0.05,
            placement: Placement::new(0, -5.0, -0.1),
        },
        ScoredStem {
            key: "click-2",
            kind: StemKind::Click(ClickSynth::default()),
            duration_seconds: 0.05,
            placement: Placement::new(80, -5.0, 0.1),
        },
        ScoredStem {
            key: "click-3",
            kind: StemKind::Click(ClickSynth::default()),
            duration_seconds: 0.05,
            placement: Placement::new(160, -5.0, 0.0),
        },
        ScoredStem {
            key: "shimmer",
            kind: StemKind::Shimmer(ShimmerSynth::default()),
            duration_seconds: 2.0,
            placement: Placement::new(200, -12.0, 0.0),
        },
        ScoredStem {
            key: "chord",
            kind: StemKind::Chord(ChordSynth::default()),
            duration_seconds: 3.0,
            placement: Placement::new(1000, -5.0, 0.1),
        },
        ScoredStem {
            key: "slide",
            kind: StemKind::Slide(SlideSynth::default()),
            duration_seconds: 1.5,
            placement: Placement::new(1000, -18.0, -0.2),
        },
    ]
}

/// Renders the complete logo into a normalized stereo master buffer.
///
/// Each stem draws from an independent random stream derived from `seed`, so
/// the same seed and voice signal always reproduce the same output.
pub fn render(config: &RenderConfig, seed: u32, voice: &[f64]) -> DspResult<StereoBuffer> {
    let mut mixer = TimelineMixer::new(config)?;
    let sample_rate = config.sample_rate as f64;

    for stem in logo_score() {
        let mut rng = create_stem_rng(seed, stem.key);
        let samples = stem
            .kind
            .synthesize(stem.duration_seconds, sample_rate, &mut rng);
        mixer.add(&samples, &stem.placement);
    }

    mixer.add(voice, &Placement::at(VOICE_OFFSET_MS));
    mixer.normalize();
    Ok(mixer.finish())
}
