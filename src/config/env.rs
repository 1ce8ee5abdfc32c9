//! Environment variable source.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::from_vars()`] backed by a `HashMap`, so resolution never
//! depends on (or mutates) the process environment.

use std::collections::HashMap;
use std::fmt;

use super::defaults;

/// Environment variable reader.
///
/// `Debug` lists variable names only, never values.
#[derive(Clone, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Creates an `Env` that reads from the real process environment.
    #[must_use]
    pub const fn real() -> Self {
        Self { overrides: None }
    }

    /// Creates an `Env` backed by explicit key-value pairs.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Looks up a variable. Unset, empty and non-Unicode values are all `None`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Looks up the variable mapped to a canonical setting name.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<String> {
        self.var(&env_var_name(key))
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.overrides {
            Some(map) => {
                let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
                names.sort_unstable();
                f.debug_struct("Env").field("vars", &names).finish()
            }
            None => f.debug_struct("Env").field("vars", &"process").finish(),
        }
    }
}

/// Maps a canonical setting name onto its environment variable name.
///
/// `.` and `-` become `_`, the result is upper-cased and prefixed, so
/// `cloudflare_key` and `cloudflare-key` both read `DNS_CONTROLLER_CLOUDFLARE_KEY`.
#[must_use]
pub fn env_var_name(key: &str) -> String {
    let suffix: String = key
        .chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    format!("{}_{suffix}", defaults::ENV_PREFIX)
}
