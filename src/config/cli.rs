//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with its persistent flags and subcommands.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;
use super::redact::redact;

/// DNS Controller for managing DNS records
///
/// DNS Controller is a tool for managing DNS records through various
/// providers like Cloudflare.
#[derive(Parser)]
#[command(name = "dns-controller")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (default: dns-controller.toml in the current directory or next to the binary)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Cloudflare API key
    #[arg(long = "cloudflare-key", global = true)]
    pub cloudflare_key: Option<String>,

    /// Enable verbose logging (also reports unreadable config files)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for dns-controller
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, `--help` and `--version`.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the explicitly supplied flag settings as `(canonical key, value)` pairs.
    ///
    /// Empty values count as not supplied.
    #[must_use]
    pub fn flag_settings(&self) -> Vec<(&'static str, &str)> {
        self.cloudflare_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| (defaults::CREDENTIAL_KEY, v))
            .into_iter()
            .collect()
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("command", &self.command)
            .field("config", &self.config)
            .field("cloudflare_key", &self.cloudflare_key.as_deref().map(redact))
            .field("verbose", &self.verbose)
            .finish()
    }
}
