//! Linear-interpolation resampler.
//!
//! Speech engines pick their own output rate (espeak-ng uses 22050 Hz);
//! the mixer needs everything at the master rate. Linear interpolation is
//! plenty for a spoken stem.

/// Resamples a mono signal from one rate to another.
///
/// Returns the input unchanged when the rates already match. Output length
/// is `round(len × to_rate / from_rate)`.
pub fn linear(samples: &[f64], from_rate: u32, to_rate: u32) -> Vec<f64> {
    if samples.is_empty() || from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = (samples.len() as f64 / ratio).round() as usize;
    let last = samples.len() - 1;

    let mut output = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = (pos.floor() as usize).min(last);
        let frac = pos - idx as f64;
        let a = samples[idx];
        let b = samples[(idx + 1).min(last)];
        output.push(a + (b - a) * frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_rates_match() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(linear(&samples, 44100, 44100), samples);
    }

    #[test]
    fn test_upsample_length() {
        let samples = vec![0.0; 22050];
        let out = linear(&samples, 22050, 44100);
        assert_eq!(out.len(), 44100);
    }

    #[test]
    fn test_downsample_length() {
        let samples = vec![0.0; 44100];
        let out = linear(&samples, 44100, 22050);
        assert_eq!(out.len(), 22050);
    }

    #[test]
    fn test_interpolates_midpoints() {
        let samples = vec![0.0, 1.0];
        let out = linear(&samples, 1, 2);

        assert_eq!(out.len(), 4);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-12);
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(linear(&[], 22050, 44100).is_empty());
    }
}
