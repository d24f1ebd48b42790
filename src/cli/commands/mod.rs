//! CLI command handlers for `UniRegistry`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod init;
pub mod list;
pub mod report;
