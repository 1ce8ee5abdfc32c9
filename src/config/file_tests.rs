//! Tests for the TOML configuration file source.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, tempdir};
use toml::Value;

use super::ConfigError;
use super::file::{
    FileConfig, default_config_template, expand_tilde, search_in, write_default_config,
};

fn parse(content: &str) -> FileConfig {
    FileConfig::parse(Path::new("test.toml"), content).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn parse_credential() {
        let config = parse(r#"cloudflare_key = "from-file""#);

        assert_eq!(
            config.get("cloudflare_key"),
            Some(&Value::String("from-file".to_string()))
        );
    }

    #[test]
    fn parse_mixed_scalars_and_tables() {
        let config = parse(
            r#"
            zone = "example.com"
            ttl = 300
            proxied = true

            [records]
            www = "203.0.113.7"
        "#,
        );

        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["proxied", "records", "ttl", "zone"]);
        assert_eq!(config.get("ttl"), Some(&Value::Integer(300)));
        assert!(matches!(config.get("records"), Some(Value::Table(_))));
    }

    #[test]
    fn keys_are_lower_cased() {
        let config = parse(r#"Cloudflare_Key = "abc""#);

        assert!(config.get("cloudflare_key").is_some());
        assert!(config.get("Cloudflare_Key").is_none());
    }

    #[test]
    fn case_only_duplicates_keep_first() {
        let config = parse(
            r#"
            ZONE = "upper"
            zone = "lower"
        "#,
        );

        assert_eq!(config.keys().count(), 1);
        assert_eq!(config.get("zone"), Some(&Value::String("upper".to_string())));
    }

    #[test]
    fn empty_file_has_no_settings() {
        assert_eq!(parse("").keys().count(), 0);
    }

    #[test]
    fn invalid_toml_returns_parse_error() {
        let result = FileConfig::parse(Path::new("bad.toml"), "cloudflare_key = ");

        assert!(matches!(result, Err(ConfigError::FileParse { .. })));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"cloudflare_key = "on-disk""#).unwrap();

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.path(), file.path());
        assert_eq!(
            config.get("cloudflare_key"),
            Some(&Value::String("on-disk".to_string()))
        );
    }

    #[test]
    fn load_nonexistent_file_returns_read_error() {
        let result = FileConfig::load(Path::new("nonexistent_file_12345.toml"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn discover_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"zone = "example.com""#).unwrap();

        let config = FileConfig::discover(Some(file.path())).unwrap();

        assert_eq!(config.path(), file.path());
    }

    #[test]
    fn discover_missing_explicit_path_is_none() {
        let config = FileConfig::discover(Some(Path::new("/nonexistent_dir_12345/c.toml")));
        assert!(config.is_none());
    }

    #[test]
    fn discover_unparseable_file_is_none() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();

        assert!(FileConfig::discover(Some(file.path())).is_none());
    }
}

mod default_search {
    use super::*;

    fn write_config(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("dns-controller.toml");
        fs::write(&path, r#"zone = "example.com""#).unwrap();
        path
    }

    #[test]
    fn first_directory_wins() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let expected = write_config(first.path());
        write_config(second.path());

        let found = search_in([first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(found, Some(expected));
    }

    #[test]
    fn falls_back_to_second_directory() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let expected = write_config(second.path());

        let found = search_in([first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(found, Some(expected));
    }

    #[test]
    fn none_when_no_directory_has_config() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        let found = search_in([first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(found, None);
    }

    #[test]
    fn directories_named_like_config_are_skipped() {
        let first = tempdir().unwrap();
        fs::create_dir(first.path().join("dns-controller.toml")).unwrap();

        assert_eq!(search_in([first.path().to_path_buf()]), None);
    }
}

mod debug_output {
    use super::*;

    #[test]
    fn debug_lists_keys_without_values() {
        let config = parse(
            r#"
            cloudflare_key = "file-secret-9876"
            zone = "example.com"
        "#,
        );

        let debug = format!("{config:?}");
        assert!(debug.contains("cloudflare_key"));
        assert!(debug.contains("zone"));
        assert!(!debug.contains("file-secret-9876"));
        assert!(!debug.contains("example.com"));
    }
}

mod tilde {
    use super::*;

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(expand_tilde(Path::new("/etc/a.toml")), Path::new("/etc/a.toml"));
        assert_eq!(expand_tilde(Path::new("a/~/b.toml")), Path::new("a/~/b.toml"));
    }

    #[test]
    fn leading_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_tilde(Path::new("~/dns-controller.toml")),
                home.join("dns-controller.toml")
            );
        }
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_as_empty_config() {
        let config = parse(&default_config_template());
        assert_eq!(config.keys().count(), 0);
    }

    #[test]
    fn template_documents_credential_sources() {
        let template = default_config_template();

        assert!(template.contains("cloudflare_key"));
        assert!(template.contains("DNS_CONTROLLER_CLOUDFLARE_KEY"));
    }

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dns-controller.toml");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, default_config_template());
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        let path = Path::new("/nonexistent_dir_12345/config.toml");
        let result = write_default_config(path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
