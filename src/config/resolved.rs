//! Effective configuration after merging flag, environment and file sources.
//!
//! Resolution is per top-level key. A key's value comes entirely from the
//! highest-priority source that defines it:
//!
//! 1. **Flag** - explicit command-line value
//! 2. **Environment** - `DNS_CONTROLLER_<KEY>`
//! 3. **File** - the TOML config file
//! 4. **Default** - built-in value (only the credential has one)
//!
//! Environment variables only override keys that are already known (the
//! credential, flag keys and file keys); they never introduce new keys.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use toml::Value;

use super::cli::Cli;
use super::defaults;
use super::env::{Env, env_var_name};
use super::error::ConfigError;
use super::file::FileConfig;
use super::redact::redact;

/// Source that supplied a setting's effective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Origin {
    /// Built-in default
    Default,
    /// Configuration file
    File,
    /// Environment variable
    Env,
    /// Command-line flag
    Flag,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::File => "file",
            Self::Env => "env",
            Self::Flag => "flag",
        };
        f.write_str(name)
    }
}

/// A resolved setting value and where it came from.
///
/// `Debug` masks the value of the credential setting.
#[derive(Clone, PartialEq)]
pub struct Setting {
    /// Effective value
    pub value: Value,
    /// Source that supplied it
    pub origin: Origin,
    sensitive: bool,
}

impl Setting {
    /// Returns true if this setting holds the credential.
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Setting");
        if self.sensitive {
            debug.field("value", &redact(&self.to_string()));
        } else {
            debug.field("value", &self.value);
        }
        debug.field("origin", &self.origin).finish()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, &self.value)
    }
}

/// Raw inputs to resolution, owned by the entry point.
#[derive(Clone)]
pub struct Sources<'a> {
    /// Explicitly supplied flags as `(canonical key, value)`
    pub flags: Vec<(&'a str, &'a str)>,
    /// Environment reader
    pub env: &'a Env,
    /// Config file, if one was found and parsed
    pub file: Option<&'a FileConfig>,
}

impl<'a> Sources<'a> {
    /// Collects the sources from parsed CLI flags, an environment and an optional file.
    #[must_use]
    pub fn new(cli: &'a Cli, env: &'a Env, file: Option<&'a FileConfig>) -> Self {
        Self {
            flags: cli.flag_settings(),
            env,
            file,
        }
    }

    fn flag(&self, key: &str) -> Option<&'a str> {
        self.flags
            .iter()
            .find(|(name, value)| *name == key && !value.is_empty())
            .map(|(_, value)| *value)
    }
}

impl fmt::Debug for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<(&str, String)> = self
            .flags
            .iter()
            .map(|(key, value)| {
                let shown = if *key == defaults::CREDENTIAL_KEY {
                    redact(value)
                } else {
                    (*value).to_string()
                };
                (*key, shown)
            })
            .collect();

        f.debug_struct("Sources")
            .field("flags", &flags)
            .field("env", &self.env)
            .field("file", &self.file)
            .finish()
    }
}

/// The single authoritative settings mapping for a run.
///
/// Built once by [`EffectiveConfig::resolve`] and read-only afterwards.
/// `Debug` and `Display` never show the credential's raw value.
#[derive(Clone, PartialEq)]
pub struct EffectiveConfig {
    settings: BTreeMap<String, Setting>,
}

impl EffectiveConfig {
    /// Merges the sources into one mapping by precedence.
    #[must_use]
    pub fn resolve(sources: &Sources<'_>) -> Self {
        let mut keys: BTreeSet<&str> = BTreeSet::new();
        keys.insert(defaults::CREDENTIAL_KEY);
        keys.extend(sources.flags.iter().map(|(key, _)| *key));
        if let Some(file) = sources.file {
            keys.extend(file.keys());
        }

        warn_env_collisions(&keys);

        let settings = keys
            .into_iter()
            .filter_map(|key| {
                let setting = resolve_key(sources, key)?;
                tracing::debug!("Resolved '{key}' from {}", setting.origin);
                Some((key.to_string(), setting))
            })
            .collect();

        Self { settings }
    }

    /// Checks that the credential is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if no source supplied it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credential().is_empty() {
            return Err(ConfigError::MissingCredential {
                env: env_var_name(defaults::CREDENTIAL_KEY),
            });
        }
        Ok(())
    }

    /// Raw credential value, empty if not supplied.
    ///
    /// Only for passing to the provider; never print it, use [`redact`].
    #[must_use]
    pub fn credential(&self) -> String {
        self.settings
            .get(defaults::CREDENTIAL_KEY)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Returns a resolved setting by canonical name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.settings.get(key)
    }

    /// Iterates settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if any setting came from a flag, the environment or the file.
    #[must_use]
    pub fn has_explicit_settings(&self) -> bool {
        self.settings.values().any(|s| s.origin != Origin::Default)
    }
}

fn resolve_key(sources: &Sources<'_>, key: &str) -> Option<Setting> {
    let (value, origin) = if let Some(value) = sources.flag(key) {
        (Value::String(value.to_string()), Origin::Flag)
    } else if let Some(value) = sources.env.setting(key) {
        (Value::String(value), Origin::Env)
    } else if let Some(value) = sources.file.and_then(|f| f.get(key)) {
        (value.clone(), Origin::File)
    } else if key == defaults::CREDENTIAL_KEY {
        (Value::String(defaults::CREDENTIAL.to_string()), Origin::Default)
    } else {
        return None;
    };

    Some(Setting {
        value,
        origin,
        sensitive: key == defaults::CREDENTIAL_KEY,
    })
}

/// Distinct keys sharing one environment variable all read the same value.
/// That ambiguity is left as-is and only reported.
fn warn_env_collisions(keys: &BTreeSet<&str>) {
    let mut by_env: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for key in keys {
        by_env.entry(env_var_name(key)).or_default().push(*key);
    }

    for (env, keys) in by_env.iter().filter(|(_, keys)| keys.len() > 1) {
        tracing::warn!(
            "Settings {} all map to environment variable {env}",
            keys.join(", ")
        );
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        Value::Integer(i) => write!(f, "{i}"),
        Value::Float(x) => write!(f, "{x}"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Datetime(d) => write!(f, "{d}"),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item)?;
            }
            f.write_str("]")
        }
        Value::Table(table) => {
            f.write_str("{")?;
            for (i, (key, item)) in table.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_value(f, item)?;
            }
            f.write_str("}")
        }
    }
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.settings).finish()
    }
}

impl fmt::Display for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Config {")?;
        for (i, (key, setting)) in self.settings.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{key}: {}", setting.origin)?;
        }
        f.write_str(" }")
    }
}
