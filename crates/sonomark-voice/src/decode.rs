//! WAV decode for speech-engine output.

use std::path::Path;

use crate::error::VoiceResult;

/// Reads a WAV file as mono f64 samples.
///
/// Multi-channel recordings are folded to mono by averaging each frame.
/// Integer formats are scaled to [-1.0, 1.0] by their bit depth.
///
/// # Returns
/// The file's sample rate and its mono samples.
pub fn read_wav_mono(path: &Path) -> VoiceResult<(u32, Vec<f64>)> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono = fold_to_mono(&interleaved, channels);
    Ok((spec.sample_rate, mono))
}

/// Averages interleaved frames down to a single channel.
pub fn fold_to_mono(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(spec: hound::WavSpec, samples: &[i16]) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        file
    }

    #[test]
    fn test_reads_mono_i16() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let file = write_fixture(spec, &[0, 16384, -32768]);

        let (rate, samples) = read_wav_mono(file.path()).unwrap();
        assert_eq!(rate, 22050);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 0.5).abs() < 1e-9);
        assert!((samples[2] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_folds_stereo_to_mono() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        // Two frames: (L=16384, R=0) and (L=-16384, R=16384)
        let file = write_fixture(spec, &[16384, 0, -16384, 16384]);

        let (_, samples) = read_wav_mono(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert!((samples[0] - 0.25).abs() < 1e-9);
        assert!(samples[1].abs() < 1e-9);
    }

    #[test]
    fn test_fold_to_mono_passthrough() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(fold_to_mono(&samples, 1), samples);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let result = read_wav_mono(Path::new("/nonexistent/voice.wav"));
        assert!(result.is_err());
    }
}
