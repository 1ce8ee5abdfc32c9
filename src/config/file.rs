//! TOML configuration file source.
//!
//! The file is optional: [`FileConfig::discover`] turns every read or parse
//! failure into "no file" so resolution can continue with flags and environment.

use std::fmt;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::ConfigError;
use super::defaults;

/// Top-level settings read from a configuration file.
///
/// `Debug` shows the path and setting names, never values.
#[derive(Clone, PartialEq)]
pub struct FileConfig {
    path: PathBuf,
    settings: Table,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(path, &content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// Top-level keys are lower-cased; when two keys differ only by case the
    /// first one (in key order) is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let raw: Table = toml::from_str(content).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut settings = Table::new();
        for (key, value) in raw {
            let key = key.to_lowercase();
            if settings.contains_key(&key) {
                tracing::warn!("Config file defines '{key}' more than once (case-insensitive); keeping the first");
                continue;
            }
            settings.insert(key, value);
        }

        Ok(Self {
            path: path.to_path_buf(),
            settings,
        })
    }

    /// Finds and loads the config file, absorbing any failure.
    ///
    /// With an explicit path only that path is tried. Otherwise the default
    /// file name is searched for in the current directory, then next to the
    /// executable.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Option<Self> {
        let path = match explicit {
            Some(path) => expand_tilde(path),
            None => {
                let Some(path) = search_default() else {
                    tracing::debug!("No {} found in search path", defaults::CONFIG_FILE_NAME);
                    return None;
                };
                path
            }
        };

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!("Ignoring config file: {e}");
                None
            }
        }
    }

    /// Path the configuration was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value of a top-level setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Iterates the top-level setting names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }
}

impl fmt::Debug for FileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileConfig")
            .field("path", &self.path)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn search_default() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    search_in(cwd.into_iter().chain(exe_dir))
}

/// Returns the first directory's default config file that exists.
pub(super) fn search_in(dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(defaults::CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# DNS Controller Configuration File
#
# Every setting can be overridden by an environment variable named
# DNS_CONTROLLER_<KEY> (dots and dashes become underscores, upper-cased),
# and the credential also by the --cloudflare-key flag.
#
# Precedence (highest first): flag, environment, this file.

# Cloudflare API key (required)
# Prefer DNS_CONTROLLER_CLOUDFLARE_KEY over storing the key in this file.
# cloudflare_key = "your-api-key"
"#
    .to_string()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
