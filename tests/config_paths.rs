//! Log directory creation
//!
//! Lives in its own test binary because it points XDG_CONFIG_HOME at a
//! temp dir, which would race with other tests reading the config paths.

#![cfg(not(target_os = "windows"))]

use tokenbridge::config_paths;

#[test]
fn test_ensure_logs_dir_creates_nested_dirs() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", home.path());

    let logs = config_paths::ensure_logs_dir().unwrap();

    assert_eq!(logs, home.path().join("tokenbridge").join("logs"));
    assert!(logs.is_dir());
    assert_eq!(config_paths::logs_dir(), Some(logs));
}
