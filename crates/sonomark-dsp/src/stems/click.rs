//! Percussive click: band-limited noise under a fast exponential decay.

use rand_pcg::Pcg32;

use super::{duration_to_samples, peak_normalize, white_noise, StemSynth};
use crate::envelope;
use crate::filter::{bandpass_4, process_cascade};

/// Short percussive tick made from bandpassed white noise.
#[derive(Debug, Clone)]
pub struct ClickSynth {
    /// Lower band edge in Hz.
    pub band_low_hz: f64,
    /// Upper band edge in Hz.
    pub band_high_hz: f64,
    /// Exponential decay rate per second.
    pub decay_rate: f64,
}

impl Default for ClickSynth {
    fn default() -> Self {
        Self {
            band_low_hz: 1500.0,
            band_high_hz: 4000.0,
            decay_rate: 60.0,
        }
    }
}

impl StemSynth for ClickSynth {
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let num_samples = duration_to_samples(duration_seconds, sample_rate);
        let mut samples = white_noise(rng, num_samples);

        let mut sections = bandpass_4(self.band_low_hz, self.band_high_hz, sample_rate);
        process_cascade(&mut sections, &mut samples);

        let env = envelope::exponential_decay(self.decay_rate, sample_rate, num_samples);
        envelope::apply(&mut samples, &env);

        peak_normalize(&mut samples);
        samples
    }
}
