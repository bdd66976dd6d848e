use listkeeper_domain::config::LogFormat;
use listkeeper_domain::{CliOverrides, Config, ConfigError, ListKind};
use std::io::Write;
use std::path::Path;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.max_upload_bytes, 32 * 1024 * 1024);
    assert_eq!(config.lists.blocklist_path, "data/blocklist.txt");
    assert_eq!(config.lists.allowlist_path, "data/allowlist.txt");
    assert_eq!(config.web.static_dir, "static");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_path_for_resolves_each_list() {
    let config = Config::default();

    assert_eq!(
        config.lists.path_for(ListKind::Blocklist),
        Path::new("data/blocklist.txt")
    );
    assert_eq!(
        config.lists.path_for(ListKind::Allowlist),
        Path::new("data/allowlist.txt")
    );
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [lists]
        blocklist_path = "/srv/lists/block.txt"

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.lists.blocklist_path, "/srv/lists/block.txt");
    assert_eq!(config.lists.allowlist_path, "data/allowlist.txt");
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[server]\nweb_port = \"eighty\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_win_over_file() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        web_port: Some(9090),
        bind_address: Some("127.0.0.1".to_string()),
        blocklist_path: Some("/tmp/b.txt".to_string()),
        allowlist_path: Some("/tmp/a.txt".to_string()),
        static_dir: Some("/srv/www".to_string()),
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.lists.blocklist_path, "/tmp/b.txt");
    assert_eq!(config.lists.allowlist_path, "/tmp/a.txt");
    assert_eq!(config.web.static_dir, "/srv/www");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_shared_list_file() {
    let mut config = Config::default();
    config.lists.allowlist_path = config.lists.blocklist_path.clone();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_empty_list_path() {
    let mut config = Config::default();
    config.lists.blocklist_path = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_from_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nweb_port = 3000").unwrap();

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();
    assert_eq!(config.server.web_port, 3000);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let result = Config::load(
        Some("/definitely/not/here/listkeeper.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
