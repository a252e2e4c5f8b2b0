//! Chord pad: additive Cmaj7 with rolled-off, individually decaying partials.

use std::f64::consts::PI;

use rand_pcg::Pcg32;

use super::{duration_to_samples, peak_normalize, StemSynth};
use crate::envelope;

/// Cmaj7 voicing: C4, E4, G4, B4.
pub const CMAJ7_HZ: [f64; 4] = [261.63, 329.63, 392.00, 493.88];

/// Additive chord pad.
///
/// Each note contributes `partials` harmonics; higher partials start quieter
/// (`1/h^rolloff`) and die faster (`exp(-t h partial_decay)`), so the pad
/// darkens as it rings out.
#[derive(Debug, Clone)]
pub struct ChordSynth {
    /// Note fundamentals in Hz.
    pub frequencies: Vec<f64>,
    /// Number of harmonics per note.
    pub partials: usize,
    /// Amplitude rolloff exponent across partials.
    pub rolloff: f64,
    /// Per-partial decay rate multiplier.
    pub partial_decay: f64,
    /// Master exponential decay rate per second.
    pub master_decay: f64,
    /// Linear attack time in seconds.
    pub attack_seconds: f64,
}

impl Default for ChordSynth {
    fn default() -> Self {
        Self {
            frequencies: CMAJ7_HZ.to_vec(),
            partials: 5,
            rolloff: 1.5,
            partial_decay: 1.5,
            master_decay: 1.0,
            attack_seconds: 0.02,
        }
    }
}

impl StemSynth for ChordSynth {
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let num_samples = duration_to_samples(duration_seconds, sample_rate);
        let mut samples = vec![0.0; num_samples];
        let dt = 1.0 / sample_rate;
        let two_pi = 2.0 * PI;

        for &freq in &self.frequencies {
            for h in 1..=self.partials {
                let harmonic = h as f64;
                let amp = 1.0 / harmonic.powf(self.rolloff);
                let partial_freq = freq * harmonic;
                let decay = harmonic * self.partial_decay;

                for (i, sample) in samples.iter_mut().enumerate() {
                    let t = i as f64 * dt;
                    *sample += amp * (-decay * t).exp() * (two_pi * partial_freq * t).sin();
                }
            }
        }

        let mut env = envelope::exponential_decay(self.master_decay, sample_rate, num_samples);
        envelope::apply_linear_attack(
            &mut env,
            duration_to_samples(self.attack_seconds, sample_rate),
        );
        envelope::apply(&mut samples, &env);

        peak_normalize(&mut samples);
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_chord_length_and_peak() {
        let synth = ChordSynth::default();
        let mut rng = create_rng(42);
        let samples = synth.synthesize(3.0, 44100.0, &mut rng);

        assert_eq!(samples.len(), 132_300);
        let peak = samples.iter().fold(0.0_f64, |a, &b| a.max(b.abs()));
        assert_eq!(peak, 1.0);
    }

    #[test]
    fn test_chord_attack_starts_silent() {
        let synth = ChordSynth::default();
        let mut rng = create_rng(42);
        let samples = synth.synthesize(3.0, 44100.0, &mut rng);

        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_chord_rings_down() {
        let synth = ChordSynth::default();
        let mut rng = create_rng(42);
        let samples = synth.synthesize(3.0, 44100.0, &mut rng);

        let early = samples[..44100].iter().fold(0.0_f64, |a, &b| a.max(b.abs()));
        let late = samples[88200..].iter().fold(0.0_f64, |a, &b| a.max(b.abs()));
        assert!(late < early, "early {early}, late {late}");
    }

    #[test]
    fn test_chord_single_sample_is_silence() {
        // sin(0) for every partial, so the zero-signal guard applies
        let synth = ChordSynth::default();
        let mut rng = create_rng(42);
        let samples = synth.synthesize(1.0 / 44100.0, 44100.0, &mut rng);

        assert_eq!(samples, vec![0.0]);
    }
}
