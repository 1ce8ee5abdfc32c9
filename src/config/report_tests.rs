//! Tests for the diagnostic report.

use std::path::Path;

use super::ConfigError;
use super::cli::Cli;
use super::env::Env;
use super::file::FileConfig;
use super::report::report;
use super::resolved::{EffectiveConfig, Sources};

fn resolve(args: &[&str], file_content: Option<&str>) -> EffectiveConfig {
    let mut full_args = vec!["dns-controller"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let env = Env::from_vars(Vec::<(&str, &str)>::new());
    let file = file_content.map(|c| FileConfig::parse(Path::new("test.toml"), c).unwrap());

    EffectiveConfig::resolve(&Sources::new(&cli, &env, file.as_ref()))
}

fn render(config: &EffectiveConfig) -> Result<String, ConfigError> {
    let mut out = Vec::new();
    report(config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn masks_credential_line() {
    let config = resolve(&["--cloudflare-key", "abcd1234efgh"], None);

    let output = render(&config).unwrap();

    assert!(output.contains("Using Cloudflare API key: ********efgh"));
    assert!(!output.contains("abcd1234efgh"));
}

#[test]
fn lists_other_settings_sorted_before_credential() {
    let config = resolve(
        &["--cloudflare-key", "abcd1234efgh"],
        Some(
            r#"
            zone = "example.com"
            ttl = 300
            proxied = true
        "#,
        ),
    );

    let output = render(&config).unwrap();

    assert_eq!(
        output,
        "Configuration settings:\n\
         ------------------------\n\
         proxied: true\n\
         ttl: 300\n\
         zone: example.com\n\
         ------------------------\n\
         Using Cloudflare API key: ********efgh\n"
    );
}

#[test]
fn credential_never_printed_as_setting() {
    let config = resolve(&[], Some(r#"cloudflare_key = "file-secret-9876""#));

    let output = render(&config).unwrap();

    assert!(!output.contains("cloudflare_key:"));
    assert!(!output.contains("file-secret-9876"));
    assert!(output.contains("************9876"));
}

#[test]
fn short_credential_is_fully_masked() {
    let config = resolve(&["--cloudflare-key", "abc"], None);

    let output = render(&config).unwrap();

    assert!(output.contains("Using Cloudflare API key: ****\n"));
}

#[test]
fn defaults_only_is_empty_config() {
    let config = resolve(&[], None);

    let result = render(&config);

    assert!(matches!(result, Err(ConfigError::EmptyEffectiveConfig)));
}

#[test]
fn empty_file_is_empty_config() {
    let config = resolve(&[], Some(""));

    assert!(matches!(render(&config), Err(ConfigError::EmptyEffectiveConfig)));
}
