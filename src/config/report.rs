//! Diagnostic report of the effective configuration.

use std::io::Write;

use super::error::ConfigError;
use super::redact::redact;
use super::resolved::EffectiveConfig;

const SEPARATOR: &str = "------------------------";

/// Prints every resolved setting, the credential last and redacted.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyEffectiveConfig`] if nothing beyond built-in
/// defaults was resolved, or [`ConfigError::Report`] if writing fails.
///
/// A validated configuration always has an explicit credential, so the
/// empty check only guards callers that report without validating first.
pub fn report(config: &EffectiveConfig, out: &mut impl Write) -> Result<(), ConfigError> {
    writeln!(out, "Configuration settings:").map_err(ConfigError::Report)?;
    writeln!(out, "{SEPARATOR}").map_err(ConfigError::Report)?;

    if !config.has_explicit_settings() {
        return Err(ConfigError::EmptyEffectiveConfig);
    }

    for (key, setting) in config.iter().filter(|(_, setting)| !setting.is_sensitive()) {
        writeln!(out, "{key}: {setting}").map_err(ConfigError::Report)?;
    }

    writeln!(out, "{SEPARATOR}").map_err(ConfigError::Report)?;
    writeln!(
        out,
        "Using Cloudflare API key: {}",
        redact(&config.credential())
    )
    .map_err(ConfigError::Report)?;

    Ok(())
}
