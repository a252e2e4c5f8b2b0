//! Doctor command implementation.
//!
//! Checks the speech engine and output permissions.

use std::env;
use std::process::{Command, ExitCode};

use anyhow::Result;
use colored::Colorize;

use sonomark_voice::EspeakEngine;

/// Runs the doctor command.
///
/// Checks:
/// - speech engine availability (and its reported version)
/// - current directory write permissions
///
/// # Returns
/// Exit code: 0 if the hard checks pass, 1 otherwise. A missing speech
/// engine is reported but not fatal; renders fall back to silence.
pub fn run() -> Result<ExitCode> {
    println!("{}", "Sonomark Doctor".cyan().bold());
    println!("{}", "===============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!("  {} sonomark v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Speech engine:".bold());
    let engine = EspeakEngine::new(44100);
    match engine.locate() {
        Ok(path) => match engine_version(&path) {
            Some(version) => {
                println!("  {} {} ({})", "ok".green(), version.trim(), path.display());
            }
            None => {
                println!("  {} found at {} (version unknown)", "ok".green(), path.display());
            }
        },
        Err(e) => {
            println!("  {} {}", "!!".yellow(), e);
            println!(
                "     {}",
                "Renders will substitute silence for the voice stem.".dimmed()
            );
            // Not a hard failure
        }
    }
    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let probe = dir.join(".sonomark_write_test");
            match std::fs::write(&probe, "test") {
                Ok(_) => {
                    let _ = std::fs::remove_file(&probe);
                    println!(
                        "  {} current directory is writable ({})",
                        "ok".green(),
                        dir.display()
                    );
                }
                Err(e) => {
                    println!("  {} cannot write to current directory: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} cannot determine current directory: {}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    if all_ok {
        println!("{}", "All checks passed.".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", "Some checks failed.".red().bold());
        Ok(ExitCode::from(1))
    }
}

/// Asks the engine binary for its version line.
fn engine_version(path: &std::path::Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if output.status.success() {
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines().next().map(str::to_string)
    } else {
        None
    }
}
