//! Slide: lowpassed noise swell under a sin² window.

use rand_pcg::Pcg32;

use super::{duration_to_samples, peak_normalize, white_noise, StemSynth};
use crate::envelope;
use crate::filter::{butterworth_lowpass_4, process_cascade};

/// Soft noise swell, rising and falling with a single sin² hump.
#[derive(Debug, Clone)]
pub struct SlideSynth {
    /// Lowpass cutoff in Hz.
    pub cutoff_hz: f64,
}

impl Default for SlideSynth {
    fn default() -> Self {
        Self { cutoff_hz: 1200.0 }
    }
}

impl StemSynth for SlideSynth {
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let num_samples = duration_to_samples(duration_seconds, sample_rate);
        let mut samples = white_noise(rng, num_samples);

        let mut sections = butterworth_lowpass_4(self.cutoff_hz, sample_rate);
        process_cascade(&mut sections, &mut samples);

        let env = envelope::sine_squared(num_samples);
        envelope::apply(&mut samples, &env);

        peak_normalize(&mut samples);
        samples
    }
}
