//! Stem generators for the logo's sound elements.
//!
//! Each module implements one element:
//! - `click` - short filtered-noise percussive tick
//! - `shimmer` - detuned sinusoids on an exponential upward chirp
//! - `chord` - additive Cmaj7 pad with decaying partials
//! - `slide` - lowpassed noise swell under a sin² window
//!
//! All stems share one contract: the output holds
//! `round(duration × sample_rate)` samples and is peak-normalized to 1.0,
//! except that an all-zero raw signal is returned as silence.

pub mod chord;
pub mod click;
pub mod shimmer;
pub mod slide;

pub use chord::ChordSynth;
pub use click::ClickSynth;
pub use shimmer::ShimmerSynth;
pub use slide::SlideSynth;

use rand::Rng;
use rand_pcg::Pcg32;

/// Common trait for all stem generators.
pub trait StemSynth {
    /// Generates the stem's mono signal.
    ///
    /// # Arguments
    /// * `duration_seconds` - Stem length in seconds
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    ///
    /// # Returns
    /// Peak-normalized samples in [-1.0, 1.0]
    fn synthesize(&self, duration_seconds: f64, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}

/// Converts a duration to a sample count by rounding.
pub fn duration_to_samples(duration_seconds: f64, sample_rate: f64) -> usize {
    (duration_seconds * sample_rate).round() as usize
}

/// Generates uniform white noise in [-1.0, 1.0).
pub fn white_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Scales a signal so its peak magnitude is exactly 1.0.
///
/// An all-zero signal is left untouched; there is nothing to scale.
pub fn peak_normalize(samples: &mut [f64]) {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, |a, b| a.max(b));
    if peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= peak;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_duration_to_samples_rounds() {
        assert_eq!(duration_to_samples(0.05, 44100.0), 2205);
        // Non-integer product rounds to nearest
        assert_eq!(duration_to_samples(0.333, 22050.0), 7343);
    }

    #[test]
    fn test_white_noise_range() {
        let mut rng = create_rng(42);
        let noise = white_noise(&mut rng, 1000);

        assert_eq!(noise.len(), 1000);
        for &s in &noise {
            assert!((-1.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_peak_normalize() {
        let mut samples = vec![0.1, -0.5, 0.25];
        peak_normalize(&mut samples);
        assert_eq!(samples[1], -1.0);
        assert!((samples[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_peak_normalize_silence_untouched() {
        let mut samples = vec![0.0; 16];
        peak_normalize(&mut samples);
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}
