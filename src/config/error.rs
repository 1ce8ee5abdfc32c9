//! Error types for configuration resolution and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// `FileRead` and `FileParse` mean the config file is unavailable. The
/// resolver absorbs them; the remaining variants reach the user.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    FileParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The provider credential was not supplied by any source.
    #[error(
        "Cloudflare API key not provided. Please set it using --cloudflare-key flag, \
         {env} environment variable, or in the config file"
    )]
    MissingCredential {
        /// Environment variable that would have supplied the credential
        env: String,
    },

    /// No setting was supplied by any source (defaults only).
    #[error("No configuration settings found")]
    EmptyEffectiveConfig,

    /// Failed to write the configuration report.
    #[error("Failed to write configuration report: {0}")]
    Report(#[source] std::io::Error),
}
