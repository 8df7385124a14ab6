//! Config file loading tests

use std::fs;
use std::sync::Mutex;

use asod_cli::config::{AsodConfig, ConfigError};
use asod_cli::logging::report_init_warnings;
use asod_cli::render::OutputFormat;

#[test]
fn missing_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AsodConfig::load_from(&dir.path().join("absent.toml")).unwrap().is_none());
}

#[test]
fn valid_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n[log]\nfilter = \"debug\"\n").unwrap();

    let config = AsodConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.output_format(), Some(OutputFormat::Json));
    assert_eq!(config.log_filter(), Some("debug"));
}

#[test]
fn unparsable_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output\nformat = ").unwrap();
    assert!(matches!(AsodConfig::load_from(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(AsodConfig::load_from(dir.path()), Err(ConfigError::Read { .. })));
}

#[test]
fn broken_config_becomes_an_init_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output\nformat = ").unwrap();

    let mut warnings = Vec::new();
    assert!(AsodConfig::load_or_warn(Some(&path), &mut warnings).is_none());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("failed to parse config"), "{}", warnings[0]);
    assert!(warnings[0].ends_with("using defaults"), "{}", warnings[0]);
}

#[test]
fn healthy_config_adds_no_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"text\"\n").unwrap();

    let mut warnings = Vec::new();
    assert!(AsodConfig::load_or_warn(Some(&path), &mut warnings).is_some());
    assert!(warnings.is_empty());
}

#[test]
fn init_warnings_reach_the_subscriber() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[output\nformat = ").unwrap();
    let mut warnings = Vec::new();
    AsodConfig::load_or_warn(Some(&config_path), &mut warnings);

    let log_path = dir.path().join("asod.log");
    let file = fs::File::create(&log_path).unwrap();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::with_default(subscriber, || report_init_warnings(&warnings));

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("failed to parse config"), "{log}");
}
