//! Sonomark CLI - renders the Sonomark audio logo to a WAV file.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sonomark_cli::commands;
use sonomark_voice::DEFAULT_RATE_WPM;

/// Sonomark - procedural audio logo renderer
#[derive(Parser)]
#[command(name = "sonomark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the audio logo to a stereo WAV file
    Render {
        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Word(s) spoken by the voice stem
        #[arg(long, default_value = "sonomark")]
        text: String,

        /// Speaking rate in words per minute
        #[arg(long, default_value_t = DEFAULT_RATE_WPM)]
        rate_wpm: u32,

        /// Base seed for reproducible output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Skip the speech engine; the voice slot stays silent
        #[arg(long)]
        no_voice: bool,
    },

    /// Check system dependencies and configuration
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            out,
            text,
            rate_wpm,
            seed,
            no_voice,
        } => commands::render::run(&commands::render::RenderOptions {
            out,
            text,
            rate_wpm,
            seed,
            no_voice,
        }),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
