//! Configuration layer for DNS Controller.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Environment variable lookup ([`Env`], [`env_var_name`])
//! - TOML configuration file loading ([`FileConfig`])
//! - Resolution and validation ([`EffectiveConfig`])
//! - Secret redaction ([`redact`]) and the diagnostic [`report`]
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI flags** - `--cloudflare-key`
//! 2. **Environment variables** - `DNS_CONTROLLER_<KEY>`
//! 3. **TOML config file** - `--config <path>` or `dns-controller.toml`
//! 4. **Built-in defaults** - an empty credential
//!
//! Empty flag and environment values count as not supplied. A missing or
//! unparseable config file is not an error; it simply contributes nothing
//! (run with `--verbose` to see why it was skipped).
//!
//! # Environment Names
//!
//! Setting names map onto environment variables by replacing `.` and `-`
//! with `_`, upper-casing and prefixing `DNS_CONTROLLER_`. Names that differ
//! only by separator (`a.b`, `a-b`) share one variable; this is logged as a
//! warning rather than resolved.

mod cli;
pub mod defaults;
mod env;
mod error;
mod file;
mod redact;
mod report;
mod resolved;

#[cfg(test)]
mod file_tests;
#[cfg(test)]
mod report_tests;

pub use cli::{Cli, Command};
pub use env::{Env, env_var_name};
pub use error::ConfigError;
pub use file::{FileConfig, default_config_template, expand_tilde, write_default_config};
pub use redact::redact;
pub use report::report;
pub use resolved::{EffectiveConfig, Origin, Setting, Sources};
