//! Timeline mixer: places mono signals into a fixed stereo master buffer.
//!
//! Panning is linear, not equal-power: a centered source lands at half
//! amplitude in each channel (−6 dB per channel). The master buffer length is
//! fixed at construction; placements past the end are truncated, never
//! resized around.

use crate::config::RenderConfig;
use crate::error::DspResult;

/// Master normalization target, 10% below full scale.
pub const NORMALIZE_TARGET: f64 = 0.9;

/// Where and how a signal lands on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Start offset in milliseconds.
    pub offset_ms: u32,
    /// Gain in dB (0.0 = unity).
    pub gain_db: f64,
    /// Stereo pan (-1.0 = left, 0.0 = center, 1.0 = right).
    pub pan: f64,
}

impl Placement {
    /// Creates a placement; pan is clamped to [-1, 1].
    pub fn new(offset_ms: u32, gain_db: f64, pan: f64) -> Self {
        Self {
            offset_ms,
            gain_db,
            pan: pan.clamp(-1.0, 1.0),
        }
    }

    /// Creates a centered placement at unity gain.
    pub fn at(offset_ms: u32) -> Self {
        Self::new(offset_ms, 0.0, 0.0)
    }

    /// Linear channel gains for this placement.
    ///
    /// `gl = g × 0.5 × (1 − pan)`, `gr = g × 0.5 × (1 + pan)` with
    /// `g = 10^(gain_db/20)`.
    pub fn channel_gains(&self) -> (f64, f64) {
        let gain = 10.0_f64.powf(self.gain_db / 20.0);
        let left = gain * 0.5 * (1.0 - self.pan);
        let right = gain * 0.5 * (1.0 + self.pan);
        (left, right)
    }
}

/// Fixed-length stereo master buffer.
#[derive(Debug, Clone)]
pub struct StereoBuffer {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoBuffer {
    /// Creates a silent buffer with the given number of samples per channel.
    pub fn new(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Largest absolute sample value across both channels.
    pub fn peak(&self) -> f64 {
        let left = self.left.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
        let right = self.right.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
        left.max(right)
    }

    /// Interleaves the channels (L, R, L, R, ...).
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }
}

/// Scales a stereo buffer so its global peak hits `target_peak`.
///
/// A silent buffer is left untouched.
pub fn normalize_stereo(stereo: &mut StereoBuffer, target_peak: f64) {
    let current_peak = stereo.peak();
    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in stereo.left.iter_mut() {
            *sample *= gain;
        }
        for sample in stereo.right.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Accumulates placed signals into the master buffer.
#[derive(Debug)]
pub struct TimelineMixer {
    sample_rate: f64,
    buffer: StereoBuffer,
}

impl TimelineMixer {
    /// Creates a mixer sized to the configured duration.
    ///
    /// Fails on a non-positive duration or zero sample rate.
    pub fn new(config: &RenderConfig) -> DspResult<Self> {
        config.validate()?;
        Ok(Self {
            sample_rate: config.sample_rate as f64,
            buffer: StereoBuffer::new(config.master_samples()),
        })
    }

    /// Adds a mono signal at the given placement.
    ///
    /// Samples falling past the end of the master buffer are dropped; a
    /// placement starting beyond the end contributes nothing.
    pub fn add(&mut self, signal: &[f64], placement: &Placement) {
        let start = (placement.offset_ms as f64 * self.sample_rate / 1000.0).round() as usize;
        let len = self.buffer.len();
        if start >= len || signal.is_empty() {
            return;
        }

        let (gain_left, gain_right) = placement.channel_gains();
        let count = signal.len().min(len - start);
        for (i, &sample) in signal[..count].iter().enumerate() {
            self.buffer.left[start + i] += sample * gain_left;
            self.buffer.right[start + i] += sample * gain_right;
        }
    }

    /// Normalizes the master buffer to the 0.9 headroom target.
    pub fn normalize(&mut self) {
        normalize_stereo(&mut self.buffer, NORMALIZE_TARGET);
    }

    /// Read access to the accumulated buffer.
    pub fn buffer(&self) -> &StereoBuffer {
        &self.buffer
    }

    /// Consumes the mixer, yielding the master buffer.
    pub fn finish(self) -> StereoBuffer {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sample_rate: u32, duration: f64) -> RenderConfig {
        RenderConfig::new(sample_rate, duration).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = RenderConfig {
            sample_rate: 0,
            duration_seconds: 1.0,
        };
        assert!(TimelineMixer::new(&bad).is_err());
    }

    #[test]
    fn test_center_pan_halves_amplitude() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[1.0; 100], &Placement::new(0, 0.0, 0.0));

        let buffer = mixer.finish();
        assert!((buffer.left[50] - 0.5).abs() < 1e-12);
        assert!((buffer.right[50] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hard_pan() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[1.0; 10], &Placement::new(0, 0.0, -1.0));

        let buffer = mixer.finish();
        assert_eq!(buffer.left[0], 1.0);
        assert_eq!(buffer.right[0], 0.0);
    }

    #[test]
    fn test_gain_db_conversion() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        // -6.0205999 dB is a factor of 0.5
        mixer.add(&[1.0; 10], &Placement::new(0, -20.0 * 2.0_f64.log10(), 0.0));

        let buffer = mixer.finish();
        assert!((buffer.left[0] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_offset_placement() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[1.0; 10], &Placement::new(250, 0.0, 0.0));

        let buffer = mixer.finish();
        assert_eq!(buffer.left[249], 0.0);
        assert!((buffer.left[250] - 0.5).abs() < 1e-12);
        assert!((buffer.left[259] - 0.5).abs() < 1e-12);
        assert_eq!(buffer.left[260], 0.0);
    }

    #[test]
    fn test_truncates_past_buffer_end() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        // 500 samples placed 800 ms in: only 200 fit
        mixer.add(&[1.0; 500], &Placement::new(800, 0.0, 0.0));

        let buffer = mixer.finish();
        assert!((buffer.left[999] - 0.5).abs() < 1e-12);
        assert_eq!(buffer.len(), 1000);
    }

    #[test]
    fn test_start_beyond_end_is_noop() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[1.0; 10], &Placement::new(5000, 0.0, 0.0));

        assert_eq!(mixer.buffer().peak(), 0.0);
    }

    #[test]
    fn test_empty_signal_is_noop() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[], &Placement::at(0));

        assert_eq!(mixer.buffer().peak(), 0.0);
    }

    #[test]
    fn test_accumulation_commutes() {
        let a: Vec<f64> = (0..100).map(|i| (i as f64 * 0.01).sin()).collect();
        let b: Vec<f64> = (0..80).map(|i| (i as f64 * 0.03).cos()).collect();
        let pa = Placement::new(10, -3.0, 0.4);
        let pb = Placement::new(40, -6.0, -0.2);

        let mut m1 = TimelineMixer::new(&config(1000, 0.2)).unwrap();
        m1.add(&a, &pa);
        m1.add(&b, &pb);

        let mut m2 = TimelineMixer::new(&config(1000, 0.2)).unwrap();
        m2.add(&b, &pb);
        m2.add(&a, &pa);

        let b1 = m1.finish();
        let b2 = m2.finish();
        for (x, y) in b1.left.iter().zip(b2.left.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
        for (x, y) in b1.right.iter().zip(b2.right.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_hits_target() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.add(&[1.0; 100], &Placement::new(0, 0.0, 0.0));
        mixer.normalize();

        assert!((mixer.buffer().peak() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_idempotent_at_target() {
        let mut stereo = StereoBuffer::new(100);
        stereo.left[10] = 0.9;
        stereo.right[20] = -0.45;
        let before = stereo.clone();

        normalize_stereo(&mut stereo, NORMALIZE_TARGET);
        for (x, y) in stereo.left.iter().zip(before.left.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
        for (x, y) in stereo.right.iter().zip(before.right.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_leaves_silence_alone() {
        let mut mixer = TimelineMixer::new(&config(1000, 1.0)).unwrap();
        mixer.normalize();

        let buffer = mixer.finish();
        assert!(buffer.left.iter().all(|&s| s == 0.0));
        assert!(buffer.right.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_interleave() {
        let mut buffer = StereoBuffer::new(2);
        buffer.left[0] = 1.0;
        buffer.right[0] = -1.0;
        buffer.left[1] = 0.5;
        assert_eq!(buffer.interleave(), vec![1.0, -1.0, 0.5, 0.0]);
    }
}
