//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Canonical name of the provider credential setting.
pub const CREDENTIAL_KEY: &str = "cloudflare_key";

/// Built-in default for the credential (empty means "not provided").
pub const CREDENTIAL: &str = "";

/// Prefix prepended to every environment variable name.
pub const ENV_PREFIX: &str = "DNS_CONTROLLER";

/// File name searched for when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "dns-controller.toml";

/// Number of trailing credential characters left visible by redaction.
pub const REDACT_VISIBLE: usize = 4;

/// Character used to mask hidden credential characters.
pub const REDACT_MASK: char = '*';
