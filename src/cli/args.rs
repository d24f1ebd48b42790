//! CLI argument definitions for `UniRegistry`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use uni_registry::config::ConfigOverrides;
use uni_registry::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Entity collections that can be listed
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum EntityArg {
    /// Faculties
    Faculties,
    /// Departments
    Departments,
    /// Student groups
    Groups,
    /// Students
    Students,
    /// Teachers
    Teachers,
    /// Disciplines
    Disciplines,
    /// Teaching workloads
    Workloads,
    /// Thesis works
    Theses,
    /// Grade records
    Grades,
    /// Teacher-discipline links
    Links,
}

/// Configuration management subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Report generation subcommands
#[derive(Debug, Subcommand)]
pub enum ReportSubcommand {
    /// Generate a report for a single student.
    Student {
        /// Student record id
        #[arg(value_name = "ID")]
        id: String,

        /// Report format: text (txt), markdown (md), or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate a report for a single teacher.
    Teacher {
        /// Teacher record id
        #[arg(value_name = "ID")]
        id: String,

        /// Report format: text (txt), markdown (md), or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Top-level CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Initialize the data directory.
    ///
    /// Creates the configured data directory and empty entity files.
    Init,
    /// List records of one entity collection.
    List {
        /// Entity collection to list
        #[arg(value_enum, value_name = "ENTITY")]
        entity: EntityArg,
    },
    /// Generate a student or teacher report.
    ///
    /// Renders a profile of the requested record with its related entities
    /// resolved, in the chosen format.
    Report {
        #[command(subcommand)]
        subcommand: ReportSubcommand,
    },
    /// Verify the stored data files.
    ///
    /// Reloads every data file, reports malformed lines, and scans for
    /// references that no longer resolve.
    Check,
}

/// Top-level CLI argument structure
#[derive(Parser, Debug)]
#[command(
    name = "uniregistry",
    about = "UniRegistry command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--data-dir`) take precedence
    /// over long-form flags (e.g., `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli();

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/data"));
        cli.reports_dir = Some(PathBuf::from("/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/data".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        // Short-form flags should take precedence over long-form
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.data_dir = Some(PathBuf::from("/short/data"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.reports_dir = Some(PathBuf::from("/short/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        // Long-form flags should be used when short-form is absent
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }
}
