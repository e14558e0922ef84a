mod common;
use common::temp_out;
use drilllog::config::{Config, KNOWN_KEYS, migrate::fill_missing_keys};
use drilllog::core::store::DepthPolicy;
use std::fs;
use std::path::Path;

#[test]
fn missing_file_gives_defaults() {
    let cfg = Config::load_from(Path::new("/nonexistent/drilllog.conf")).unwrap();

    assert_eq!(cfg.depth_policy, DepthPolicy::Strict);
    assert_eq!(cfg.large_interval_threshold, 5.0);
    assert_eq!(cfg.autosave_interval_secs, 3);
}

#[test]
fn partial_file_keeps_given_values() {
    let path = temp_out("config_partial", "conf");
    fs::write(&path, "database: /tmp/x.sqlite\ndepth_policy: legacy\n").unwrap();

    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.depth_policy, DepthPolicy::Legacy);
    assert_eq!(cfg.store_options().depth_policy, DepthPolicy::Legacy);
    assert_eq!(cfg.separator_char, "-");

    let missing = Config::missing_keys(Path::new(&path)).unwrap();
    assert_eq!(
        missing,
        ["large_interval_threshold", "autosave_interval_secs", "separator_char"]
    );
}

#[test]
fn invalid_values_are_rejected() {
    let path = temp_out("config_invalid", "conf");

    fs::write(&path, "large_interval_threshold: -2\n").unwrap();
    assert!(Config::load_from(Path::new(&path)).is_err());

    fs::write(&path, "autosave_interval_secs: 0\n").unwrap();
    assert!(Config::load_from(Path::new(&path)).is_err());

    fs::write(&path, "depth_policy: lenient\n").unwrap();
    assert!(Config::load_from(Path::new(&path)).is_err());
}

#[test]
fn migrate_fills_only_missing_keys() {
    let path = temp_out("config_migrate", "conf");
    fs::write(&path, "database: /tmp/keep.sqlite\nlarge_interval_threshold: 10.0\n").unwrap();

    let added = fill_missing_keys(Path::new(&path)).unwrap();
    assert_eq!(added, ["depth_policy", "autosave_interval_secs", "separator_char"]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# depth_policy options:"));

    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.database, "/tmp/keep.sqlite");
    assert_eq!(cfg.large_interval_threshold, 10.0);
    assert!(Config::missing_keys(Path::new(&path)).unwrap().is_empty());
    assert_eq!(KNOWN_KEYS.len(), 5);

    assert!(fill_missing_keys(Path::new(&path)).unwrap().is_empty());
}
