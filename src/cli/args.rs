//! CLI argument definitions for `BuzzPlan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use buzzplan::config::ConfigOverrides;
use buzzplan::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
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

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`)
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

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Check whether a course can be added to a plan.
    ///
    /// Evaluates the course's prerequisites and corequisites against the
    /// plan's completed and in-flight courses.
    Check {
        /// Path to the plan TOML file
        #[arg(value_name = "PLAN")]
        plan_file: PathBuf,

        /// Course code to validate (e.g., "CS 1332")
        #[arg(value_name = "CODE")]
        course_code: String,

        /// Path to the catalog TOML file
        #[arg(short, long, value_name = "FILE")]
        catalog: PathBuf,

        /// Target term for the addition, e.g. "2026-fall" (enables the
        /// credit-overload advisory)
        #[arg(long, value_name = "TERM")]
        term: Option<String>,
    },
    /// Audit a plan against its degree program.
    ///
    /// Reports per-category requirement progress, the overall completion
    /// percentage, and GPA.
    Audit {
        /// Path to the plan TOML file
        #[arg(value_name = "PLAN")]
        plan_file: PathBuf,

        /// Path to the catalog TOML file
        #[arg(short, long, value_name = "FILE")]
        catalog: PathBuf,

        /// Path to the degree-program TOML file
        #[arg(short, long, value_name = "FILE")]
        program: PathBuf,

        /// Write a Markdown report (to the configured reports directory
        /// unless --output is given)
        #[arg(long)]
        report: bool,

        /// Report output path (implies --report)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show term and cumulative GPA for a plan.
    Gpa {
        /// Path to the plan TOML file
        #[arg(value_name = "PLAN")]
        plan_file: PathBuf,

        /// Optional catalog TOML file used for nominal credits
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "buzzplan",
    about = "BuzzPlan command-line interface",
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

    /// Override config reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the advisory credit cap for terms without their own
    #[arg(long = "max-term-credits", value_name = "CREDITS")]
    pub max_term_credits: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_term_credits: self.max_term_credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_overrides_pass_through() {
        let cli = Cli::parse_from([
            "buzzplan",
            "--config-level",
            "debug",
            "--reports-dir",
            "/tmp/reports",
            "config",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.reports_dir.as_deref(), Some("/tmp/reports"));
        assert!(overrides.max_term_credits.is_none());
    }
}
