//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod code;
pub mod enroll;
pub mod list;
pub mod setup;
