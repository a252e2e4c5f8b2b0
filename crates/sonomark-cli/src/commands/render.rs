//! Render command implementation.
//!
//! Orchestrates one full run: voice synthesis (with silence fallback),
//! stem generation and mixing, WAV encode, and an atomic write of the
//! output file.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use sonomark_dsp::wav::EncodedWav;
use sonomark_dsp::{render, RenderConfig, VOICE_OFFSET_MS};
use sonomark_voice::{EspeakEngine, SilentVoice, SpeechSynthesizer};

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Destination WAV path.
    pub out: String,
    /// Word(s) to speak.
    pub text: String,
    /// Speaking rate in words per minute.
    pub rate_wpm: u32,
    /// Base seed; `None` draws a random one.
    pub seed: Option<u32>,
    /// Skip the speech engine entirely.
    pub no_voice: bool,
}

/// Runs the render command.
///
/// # Returns
/// Exit code: 0 on success. Engine failures fall back to silence and still
/// succeed; invalid parameters and I/O failures abort.
pub fn run(options: &RenderOptions) -> Result<ExitCode> {
    let config = RenderConfig::default();
    let seed = options.seed.unwrap_or_else(rand::random);

    println!(
        "{} \"{}\" (seed {})",
        "Rendering audio logo".cyan().bold(),
        options.text,
        seed
    );

    let voice = if options.no_voice {
        let stub = SilentVoice {
            duration_seconds: remaining_after_voice_offset(&config),
            sample_rate: config.sample_rate,
        };
        stub.synthesize(&options.text, options.rate_wpm)?
    } else {
        synthesize_voice_or_silence(&config, &options.text, options.rate_wpm)
    };

    let buffer = render(&config, seed, &voice)?;
    let encoded = EncodedWav::from_stereo(&buffer, config.sample_rate);
    write_atomic(Path::new(&options.out), &encoded.bytes)?;

    println!(
        "  {} {} ({:.2} s, {} Hz, pcm {})",
        "wrote".green(),
        options.out,
        encoded.duration_seconds(),
        encoded.sample_rate,
        &encoded.pcm_hash[..16]
    );

    Ok(ExitCode::SUCCESS)
}

/// Runs the speech engine, substituting silence when it fails.
///
/// The fallback spans the rest of the master buffer after the voice offset,
/// so the mix timeline is unchanged either way.
fn synthesize_voice_or_silence(config: &RenderConfig, text: &str, rate_wpm: u32) -> Vec<f64> {
    let engine = EspeakEngine::new(config.sample_rate);
    match engine.synthesize(text, rate_wpm) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("{} voice unavailable, using silence: {}", "warning:".yellow(), e);
            let offset =
                (VOICE_OFFSET_MS as f64 * config.sample_rate as f64 / 1000.0).round() as usize;
            vec![0.0; config.master_samples().saturating_sub(offset)]
        }
    }
}

/// Seconds left on the timeline after the voice offset.
fn remaining_after_voice_offset(config: &RenderConfig) -> f64 {
    (config.duration_seconds - VOICE_OFFSET_MS as f64 / 1000.0).max(0.0)
}

/// Writes bytes next to the destination and renames into place.
///
/// A failed run never leaves a truncated file at the destination.
fn write_atomic(out_path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = out_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut scratch = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create scratch file in {}", parent.display()))?;
    scratch
        .write_all(bytes)
        .context("failed to write WAV data")?;
    scratch
        .persist(out_path)
        .with_context(|| format!("failed to persist output to {}", out_path.display()))?;

    Ok(())
}
