//! Amplitude envelope curves.
//!
//! Each function produces a gain curve sized to the waveform it shapes;
//! generators multiply the curve into their raw signal sample-wise.

use std::f64::consts::PI;

/// Generates an exponential decay curve `exp(-rate * t)`.
///
/// # Arguments
/// * `rate_per_second` - Decay rate; the curve falls to 1/e after `1/rate` seconds
/// * `sample_rate` - Audio sample rate
/// * `num_samples` - Curve length in samples
pub fn exponential_decay(rate_per_second: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    let dt = 1.0 / sample_rate;
    (0..num_samples)
        .map(|i| (-rate_per_second * i as f64 * dt).exp())
        .collect()
}

/// Generates a trapezoidal curve: linear rise to 1.0, then linear fall to 0.0.
///
/// The rise is clamped to the curve length; the fall spans whatever remains
/// and ends exactly at zero.
pub fn trapezoid(rise_samples: usize, num_samples: usize) -> Vec<f64> {
    let rise = rise_samples.min(num_samples);
    let fall = num_samples - rise;

    let mut envelope = Vec::with_capacity(num_samples);
    for i in 0..rise {
        envelope.push(i as f64 / rise as f64);
    }
    for i in 0..fall {
        let level = if fall > 1 {
            1.0 - i as f64 / (fall - 1) as f64
        } else {
            1.0
        };
        envelope.push(level);
    }
    envelope
}

/// Generates a `sin²(π t / duration)` window over the curve length.
///
/// Starts and ends at zero with a single hump at the midpoint.
pub fn sine_squared(num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let phase = PI * i as f64 / num_samples as f64;
            phase.sin().powi(2)
        })
        .collect()
}

/// Scales the leading edge of an envelope with a linear attack ramp.
pub fn apply_linear_attack(envelope: &mut [f64], attack_samples: usize) {
    let attack = attack_samples.min(envelope.len());
    for (i, level) in envelope.iter_mut().take(attack).enumerate() {
        *level *= i as f64 / attack as f64;
    }
}

/// Multiplies an envelope into a signal sample-wise.
///
/// The shorter of the two lengths wins.
pub fn apply(samples: &mut [f64], envelope: &[f64]) {
    for (sample, level) in samples.iter_mut().zip(envelope.iter()) {
        *sample *= level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay() {
        let envelope = exponential_decay(10.0, 1000.0, 500);

        assert_eq!(envelope.len(), 500);
        // Starts at 1.0
        assert!((envelope[0] - 1.0).abs() < 1e-12);
        // After one time constant (100 samples), ~37%
        assert!((envelope[100] - 0.368).abs() < 0.01);
    }

    #[test]
    fn test_trapezoid_shape() {
        let envelope = trapezoid(100, 300);

        assert_eq!(envelope.len(), 300);
        assert_eq!(envelope[0], 0.0);
        // Peak right after the rise
        assert!((envelope[100] - 1.0).abs() < 1e-12);
        // Ends exactly at zero
        assert_eq!(envelope[299], 0.0);
    }

    #[test]
    fn test_trapezoid_rise_clamped() {
        let envelope = trapezoid(1000, 10);
        assert_eq!(envelope.len(), 10);
        // All rise, never reaches the fall segment
        assert!(envelope[9] < 1.0);
    }

    #[test]
    fn test_sine_squared_window() {
        let envelope = sine_squared(1000);

        assert_eq!(envelope.len(), 1000);
        assert_eq!(envelope[0], 0.0);
        // Midpoint is the peak
        assert!((envelope[500] - 1.0).abs() < 1e-9);
        for &level in &envelope {
            assert!((0.0..=1.0).contains(&level));
        }
    }

    #[test]
    fn test_linear_attack_ramp() {
        let mut envelope = vec![1.0; 100];
        apply_linear_attack(&mut envelope, 10);

        assert_eq!(envelope[0], 0.0);
        assert!((envelope[5] - 0.5).abs() < 1e-12);
        assert_eq!(envelope[10], 1.0);
    }

    #[test]
    fn test_apply_multiplies_pairwise() {
        let mut samples = vec![2.0, 2.0, 2.0];
        apply(&mut samples, &[0.5, 1.0, 0.0]);
        assert_eq!(samples, vec![1.0, 2.0, 0.0]);
    }
}
