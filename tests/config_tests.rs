use scriptboard::config::{Config, ENV_BIND, ENV_DATABASE};
use std::collections::HashMap;
use std::env;
use std::fs;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.bind, "127.0.0.1:8501");
    assert!(cfg.database.ends_with("scriptboard.sqlite"));
}

#[test]
fn test_env_overrides_win_over_file_values() {
    let mut cfg = Config {
        database: "/from/file.sqlite".into(),
        bind: "0.0.0.0:9000".into(),
    };
    let env: HashMap<&str, &str> =
        HashMap::from([(ENV_DATABASE, "/from/env.sqlite"), (ENV_BIND, "")]);

    cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(cfg.database, "/from/env.sqlite");
    // empty values are ignored
    assert_eq!(cfg.bind, "0.0.0.0:9000");
}

#[test]
fn test_load_file_partial_yaml_fills_defaults() {
    let mut path = env::temp_dir();
    path.push("scriptboard_partial.conf");
    fs::write(&path, "database: /data/events.sqlite\n").expect("write conf");

    let cfg = Config::load_file(&path).expect("load");
    assert_eq!(cfg.database, "/data/events.sqlite");
    assert_eq!(cfg.bind, "127.0.0.1:8501");
}

#[test]
fn test_load_file_missing_means_defaults() {
    let mut path = env::temp_dir();
    path.push("scriptboard_definitely_missing.conf");
    fs::remove_file(&path).ok();

    assert_eq!(Config::load_file(&path).expect("load"), Config::default());
}

#[test]
fn test_load_file_invalid_yaml_is_an_error() {
    let mut path = env::temp_dir();
    path.push("scriptboard_broken.conf");
    fs::write(&path, "database: [unterminated\n").expect("write conf");

    assert!(Config::load_file(&path).is_err());
}

#[test]
fn test_store_config_expands_tilde() {
    let cfg = Config {
        database: "~/events.sqlite".into(),
        bind: "127.0.0.1:8501".into(),
    };
    let store = cfg.store_config();

    if let Some(home) = dirs::home_dir() {
        assert_eq!(store.database, home.join("events.sqlite"));
    }
}
