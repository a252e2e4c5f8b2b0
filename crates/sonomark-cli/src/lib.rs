//! Sonomark CLI library.
//!
//! Command implementations live here so they can be exercised from tests;
//! the `sonomark` binary is a thin clap wrapper around them.

pub mod commands;
