//! Application execution logic.
//!
//! Walks one run through its states exactly once: load sources, resolve,
//! validate, report.

use std::io::Write;

use thiserror::Error;

use dns_controller::config::{Cli, ConfigError, EffectiveConfig, Env, FileConfig, Sources, report};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for a failed run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Resolution, validation or reporting failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The credential is missing and no other source supplied anything either.
    #[error("No configuration settings found. {0}")]
    NothingConfigured(#[source] ConfigError),
}

/// Executes a run, writing informational output to `out`.
///
/// This function:
/// 1. Locates and loads the config file (failures are absorbed)
/// 2. Resolves flag, environment and file sources into one configuration
/// 3. Validates that the credential is present
/// 4. Reports the effective configuration with the credential redacted
///
/// # Errors
///
/// Returns an error if:
/// - The credential is missing
/// - Nothing beyond built-in defaults was configured
/// - Writing to `out` fails
pub fn execute(cli: &Cli, env: &Env, out: &mut impl Write) -> Result<(), RunError> {
    let file = FileConfig::discover(cli.config.as_deref());
    if let Some(ref file) = file {
        writeln!(out, "Using config file: {}", file.path().display()).map_err(ConfigError::Report)?;
    }

    let config = EffectiveConfig::resolve(&Sources::new(cli, env, file.as_ref()));

    if let Err(e) = config.validate() {
        if config.has_explicit_settings() {
            return Err(e.into());
        }
        return Err(RunError::NothingConfigured(e));
    }

    tracing::info!("{config}");

    writeln!(out, "DNS Controller starting...").map_err(ConfigError::Report)?;
    report(&config, out)?;

    tracing::debug!("No DNS record management configured yet; exiting");
    Ok(())
}
