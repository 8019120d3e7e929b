//! tonewav CLI library.
//!
//! This crate provides the command implementations behind the `tonewav`
//! binary: config loading and the `generate` and `inspect` commands.

pub mod commands;
pub mod input;
