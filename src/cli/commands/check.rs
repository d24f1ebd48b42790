//! Check command handler
//!
//! Reloads every data file and reports what a normal load would hide:
//! malformed lines that get skipped, and stored references that no
//! longer resolve.

use std::path::Path;
use uni_registry::config::Config;
use uni_registry::core::integrity;
use uni_registry::core::store::Registry;
use uni_registry::error;

/// Run the check command.
///
/// Exits with status 1 when any malformed line or dangling reference
/// is found, so the command can gate scripts.
pub fn run(config: &Config) {
    match check_data(config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("Check failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn check_data(config: &Config) -> Result<bool, String> {
    let data_dir = Path::new(&config.paths.data_dir);
    let mut registry = Registry::new();
    let load = registry
        .load_all(data_dir)
        .map_err(|e| format!("✗ Failed to load data from {}: {e}", data_dir.display()))?;

    println!(
        "✓ Loaded {} records from {}",
        load.loaded,
        data_dir.display()
    );
    if load.skipped > 0 {
        println!("✗ Skipped {} malformed lines", load.skipped);
    }

    let issues = integrity::scan(&registry);
    if issues.is_empty() {
        println!("✓ All references resolve");
    } else {
        println!("✗ {} dangling references:", issues.len());
        for issue in &issues {
            println!("  {issue}");
        }
    }

    Ok(load.skipped == 0 && issues.is_empty())
}
