//! Shared library for `UniRegistry`
//! Contains the academic-records core used by the CLI and by integration tests

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
