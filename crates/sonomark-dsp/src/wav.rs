//! Deterministic WAV encoder.
//!
//! Writes 16-bit PCM RIFF files with no timestamps or variable metadata, so
//! identical sample data always yields identical bytes. A BLAKE3 hash of the
//! PCM payload is kept alongside the file bytes for verification.

use std::io::{self, Write};

use crate::mixer::StereoBuffer;

const CHANNELS: u16 = 2;
const BITS_PER_SAMPLE: u16 = 16;

/// Converts stereo f64 samples to interleaved 16-bit little-endian PCM.
///
/// Samples outside [-1.0, 1.0] are clipped before quantizing.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64]) -> Vec<u8> {
    let len = left.len().min(right.len());
    let mut pcm = Vec::with_capacity(len * 4);

    for i in 0..len {
        for &sample in &[left[i], right[i]] {
            let clipped = sample.clamp(-1.0, 1.0);
            let value = (clipped * 32767.0).round() as i16;
            pcm.extend_from_slice(&value.to_le_bytes());
        }
    }

    pcm
}

/// Writes a complete stereo WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, sample_rate: u32, pcm_data: &[u8]) -> io::Result<()> {
    let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // total minus the 8-byte RIFF header

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // audio format (1 = PCM)
    writer.write_all(&CHANNELS.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// An encoded WAV file plus its PCM verification hash.
#[derive(Debug)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the PCM payload (not the full file).
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl EncodedWav {
    /// Encodes a stereo buffer into WAV bytes.
    pub fn from_stereo(stereo: &StereoBuffer, sample_rate: u32) -> Self {
        let pcm = stereo_to_pcm16(&stereo.left, &stereo.right);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        let mut bytes = Vec::with_capacity(44 + pcm.len());
        write_wav(&mut bytes, sample_rate, &pcm).expect("writing to Vec should not fail");

        Self {
            bytes,
            pcm_hash,
            sample_rate,
            num_samples: stereo.len(),
        }
    }

    /// Encoded duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
