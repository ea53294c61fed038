use rhabit::config::Config;
use rhabit::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rhabit.conf", name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_fields_use_defaults() {
    let path = temp_conf("partial", "database: /tmp/partial.sqlite\n");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/partial.sqlite");
    assert_eq!(cfg.default_weeks, 4);
    assert_eq!(cfg.history_days, 30);
    assert_eq!(cfg.log_retention_days, 30);
    assert_eq!(cfg.label_format, "%d.%m");

    let missing = Config::missing_keys(&path).unwrap();
    assert_eq!(
        missing,
        vec!["default_weeks", "history_days", "log_retention_days", "label_format"]
    );
}

#[test]
fn test_save_and_reload() {
    let mut path = env::temp_dir();
    path.push("roundtrip_dir_rhabit");
    path.push("rhabit.conf");
    let _ = fs::remove_file(&path);

    let cfg = Config {
        database: "/tmp/roundtrip.sqlite".into(),
        default_weeks: 8,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.default_weeks, 8);
    assert!(Config::missing_keys(&path).unwrap().is_empty());
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = temp_conf("zero_weeks", "default_weeks: 0\n");
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    let path = temp_conf("huge_weeks", "default_weeks: 4294967295\n");
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    let path = temp_conf("huge_history", "history_days: 4294967295\n");
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    let path = temp_conf("broken_yaml", "default_weeks: [\n");
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = env::temp_dir().join("definitely_missing_rhabit.conf");
    let _ = fs::remove_file(&path);

    let cfg = Config::load_from(&path).unwrap();
    assert!(cfg.database.ends_with("rhabit.sqlite"));
}
