//! Core module: entity model, codec, store, rules, and projections

pub mod codec;
pub mod config;
pub mod events;
pub mod integrity;
pub mod models;
pub mod report;
pub mod rules;
pub mod store;

/// Returns the current version of the `UniRegistry` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
