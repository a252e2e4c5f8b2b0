//! Biquad filters and 4th-order cascades.
//!
//! Coefficients follow the Audio EQ Cookbook formulas. The 4th-order
//! responses are built from two cascaded biquad sections.

use std::f64::consts::PI;

/// Butterworth section Q values for a 4th-order cascade.
const BUTTERWORTH_4_Q: [f64; 2] = [0.5412, 1.3066];

/// Biquad filter coefficients, normalized by a0.
#[derive(Debug, Clone, Copy)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Creates lowpass filter coefficients.
    ///
    /// # Arguments
    /// * `cutoff` - Cutoff frequency in Hz
    /// * `q` - Q factor (resonance), 0.707 is Butterworth
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn lowpass(cutoff: f64, q: f64, sample_rate: f64) -> Self {
        // Clamp Q to minimum safe value to prevent division by zero
        let q = q.max(0.5);
        let omega = 2.0 * PI * cutoff / sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let b0 = (1.0 - cos_omega) / 2.0;
        let b1 = 1.0 - cos_omega;
        let b2 = (1.0 - cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }

    /// Creates bandpass filter coefficients (constant skirt gain).
    ///
    /// # Arguments
    /// * `center` - Center frequency in Hz
    /// * `q` - Q factor (bandwidth = center / Q)
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn bandpass(center: f64, q: f64, sample_rate: f64) -> Self {
        // Clamp Q to minimum safe value to prevent division by zero
        let q = q.max(0.5);
        let omega = 2.0 * PI * center / sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let b0 = alpha;
        let b1 = 0.0;
        let b2 = -alpha;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

/// Biquad filter state.
#[derive(Debug, Clone)]
pub struct BiquadFilter {
    coeffs: BiquadCoeffs,
    // Delay lines
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl BiquadFilter {
    /// Creates a new biquad filter with the given coefficients.
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Creates a lowpass filter.
    pub fn lowpass(cutoff: f64, q: f64, sample_rate: f64) -> Self {
        Self::new(BiquadCoeffs::lowpass(cutoff, q, sample_rate))
    }

    /// Creates a bandpass filter.
    pub fn bandpass(center: f64, q: f64, sample_rate: f64) -> Self {
        Self::new(BiquadCoeffs::bandpass(center, q, sample_rate))
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Processes a single sample through the filter.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.coeffs.b0 * input + self.coeffs.b1 * self.x1 + self.coeffs.b2 * self.x2
            - self.coeffs.a1 * self.y1
            - self.coeffs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Processes a buffer of samples in place.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Builds a 4th-order Butterworth lowpass as two cascaded sections.
pub fn butterworth_lowpass_4(cutoff: f64, sample_rate: f64) -> [BiquadFilter; 2] {
    [
        BiquadFilter::lowpass(cutoff, BUTTERWORTH_4_Q[0], sample_rate),
        BiquadFilter::lowpass(cutoff, BUTTERWORTH_4_Q[1], sample_rate),
    ]
}

/// Builds a 4th-order bandpass as two cascaded sections.
///
/// Center frequency is the geometric mean of the band edges; the section Q
/// is derived from the bandwidth.
pub fn bandpass_4(low_hz: f64, high_hz: f64, sample_rate: f64) -> [BiquadFilter; 2] {
    let center = (low_hz * high_hz).sqrt();
    let q = center / (high_hz - low_hz);
    [
        BiquadFilter::bandpass(center, q, sample_rate),
        BiquadFilter::bandpass(center, q, sample_rate),
    ]
}

/// Runs a buffer through each cascade section in turn.
pub fn process_cascade(sections: &mut [BiquadFilter], buffer: &mut [f64]) {
    for section in sections.iter_mut() {
        section.process_buffer(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowpass_passes_dc() {
        let mut filter = BiquadFilter::lowpass(1000.0, 0.707, 44100.0);

        let mut output = Vec::new();
        for _ in 0..100 {
            output.push(filter.process(1.0));
        }

        // Lowpass converges towards 1.0 for DC input
        assert!((output[99] - 1.0).abs() < 0.1);
    }

    #[test]
    fn test_bandpass_blocks_dc() {
        let mut filter = BiquadFilter::bandpass(2000.0, 1.0, 44100.0);

        let mut output = Vec::new();
        for _ in 0..2000 {
            output.push(filter.process(1.0));
        }

        assert!(output[1999].abs() < 0.01);
    }

    #[test]
    fn test_lowpass_cascade_attenuates_high_frequency() {
        let sample_rate = 44100.0;
        let mut sections = butterworth_lowpass_4(1200.0, sample_rate);

        // 10 kHz tone, well above the cutoff
        let mut buffer: Vec<f64> = (0..4410)
            .map(|i| (2.0 * PI * 10_000.0 * i as f64 / sample_rate).sin())
            .collect();
        process_cascade(&mut sections, &mut buffer);

        let peak = buffer[2000..].iter().fold(0.0_f64, |a, &b| a.max(b.abs()));
        assert!(peak < 0.01, "expected heavy attenuation, got peak {peak}");
    }

    #[test]
    fn test_bandpass_cascade_passes_center() {
        let sample_rate = 44100.0;
        let mut sections = bandpass_4(1500.0, 4000.0, sample_rate);
        let center = (1500.0_f64 * 4000.0).sqrt();

        let mut buffer: Vec<f64> = (0..8820)
            .map(|i| (2.0 * PI * center * i as f64 / sample_rate).sin())
            .collect();
        process_cascade(&mut sections, &mut buffer);

        let peak = buffer[4000..].iter().fold(0.0_f64, |a, &b| a.max(b.abs()));
        assert!(peak > 0.5, "center frequency should pass, got peak {peak}");
    }

    #[test]
    fn test_filter_reset() {
        let mut filter = BiquadFilter::lowpass(1000.0, 0.707, 44100.0);
        for _ in 0..10 {
            filter.process(1.0);
        }
        filter.reset();
        let first_after_reset = filter.process(1.0);

        let mut fresh = BiquadFilter::lowpass(1000.0, 0.707, 44100.0);
        assert_eq!(first_after_reset, fresh.process(1.0));
    }
}
