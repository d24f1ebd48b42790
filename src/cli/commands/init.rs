//! Init command handler

use std::path::PathBuf;
use uni_registry::config::Config;
use uni_registry::core::codec::Record;
use uni_registry::core::models::Faculty;
use uni_registry::core::store::Registry;
use uni_registry::{error, info};

/// Run the init command.
///
/// Creates the configured data directory and writes an empty file for
/// every entity collection. A directory that already holds data files
/// is left untouched.
pub fn run(config: &Config) {
    if let Err(err) = initialize(config) {
        error!("Init failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn initialize(config: &Config) -> Result<(), String> {
    if config.paths.data_dir.is_empty() {
        return Err(
            "✗ No data directory configured. Set one with: uniregistry config set data_dir <DIR>"
                .to_string(),
        );
    }

    let data_dir = PathBuf::from(&config.paths.data_dir);
    if data_dir.join(Faculty::FILE_NAME).exists() {
        println!(
            "✓ Data directory already initialized: {}",
            data_dir.display()
        );
        return Ok(());
    }

    Registry::new()
        .save_all(&data_dir)
        .map_err(|e| format!("✗ Failed to initialize {}: {e}", data_dir.display()))?;

    info!("Data directory initialized: {}", data_dir.display());
    println!("✓ Data directory initialized: {}", data_dir.display());
    Ok(())
}
