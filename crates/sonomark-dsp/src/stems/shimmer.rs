//! Shimmer: detuned sinusoids riding an exponential upward chirp.

use std::f64::consts::PI;

use rand_pcg::Pcg32;

use super::{duration_to_samples, peak_normalize, StemSynth};
use crate::envelope;

/// Rising harmonic sweep built from three detuned chirps.
#[derive(Debug, Clone)]
pub struct ShimmerSynth {
    /// Sweep start frequency in Hz.
    pub start_freq: f64,
    /// Sweep end frequency in Hz.
    pub end_freq: f64,
    /// Detune ratios applied to each voice.
    pub detune: Vec<f64>,
    /// Linear rise time of the envelope in seconds.
    pub rise_seconds: f64,
}

impl Default for ShimmerSynth {
    fn default() -> Self {
        Self {
            start_freq: 440.0,
            end_freq: 1760.0,
            detune: vec![0.99, 1.0, 1.01],
            rise_seconds: 0.5,
        }
    }
}

impl ShimmerSynth {
    /// Integrated phase of the exponential chirp at time `t`.
    ///
    /// For a frequency law `f(t) = f0 (f1/f0)^(t/d)` the accumulated phase is
    /// `2π f0 d ((f1/f0)^(t/d) − 1) / ln(f1/f0)`. When start and end coincide
    /// the law degenerates to a constant tone.
    fn chirp_phase(&self, t: f64, duration: f64) -> f64 {
        let ratio = self.end_freq / self.start_freq;
        if (ratio - 1.0).abs() < 1e-12 {
            return 2.0 * PI * self.start_freq * t;
        }
        let ln_ratio = ratio.ln();
        2.0 * PI * self.start_freq * duration * (ratio.powf(t / duration) - 1.0) / ln_ratio
    }
}

impl StemSynth for ShimmerSynth {
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let num_samples = duration_to_samples(duration_seconds, sample_rate);
        let mut samples = vec![0.0; num_samples];
        let dt = 1.0 / sample_rate;

        for &detune in &self.detune {
            for (i, sample) in samples.iter_mut().enumerate() {
                let t = i as f64 * dt;
                *sample += (self.chirp_phase(t, duration_seconds) * detune).sin();
            }
        }

        let rise = duration_to_samples(self.rise_seconds.min(duration_seconds), sample_rate);
        let env = envelope::trapezoid(rise, num_samples);
        envelope::apply(&mut samples, &env);

        peak_normalize(&mut samples);
        samples
    }
}
