use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use taskdash_core::config::{
    config_path, load_config, resolve_config, ServeOptions, SitePaths, TaskdashConfig,
};

#[test]
fn defaults_without_config_file() {
    let temp = TempDir::new().expect("tempdir");
    let resolved = resolve_config(temp.path()).expect("resolve");
    assert_eq!(resolved.config_file, None);
    assert_eq!(resolved.paths, SitePaths::new(temp.path()));
    assert_eq!(resolved.paths.tasks_file, temp.path().join("tasks.md"));
    assert_eq!(resolved.paths.notes_dir, temp.path().join("notes"));
    assert_eq!(resolved.paths.output_dir, temp.path().join("_site"));
    assert_eq!(resolved.serve, ServeOptions::default());
    assert_eq!(resolved.serve.port, 4242);
    assert_eq!(resolved.serve.debounce, Duration::from_millis(300));
}

#[test]
fn config_file_overrides_paths_and_serve_options() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(
        config_path(temp.path()),
        "tasks_file = \"todo/list.md\"\noutput_dir = \"public\"\nport = 8080\ndebounce_ms = 50\n",
    )
    .expect("write config");

    let resolved = resolve_config(temp.path()).expect("resolve");
    assert_eq!(resolved.config_file, Some(config_path(temp.path())));
    assert_eq!(resolved.paths.tasks_file, temp.path().join("todo/list.md"));
    assert_eq!(resolved.paths.notes_dir, temp.path().join("notes"));
    assert_eq!(resolved.paths.output_dir, temp.path().join("public"));
    assert_eq!(resolved.serve.port, 8080);
    assert_eq!(resolved.serve.debounce, Duration::from_millis(50));
}

#[test]
fn rc_file_is_an_alternate_name() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join(".taskdashrc"), "notes_dir = \"journal\"\n").expect("write");
    let config = load_config(temp.path()).expect("load").expect("config present");
    assert_eq!(
        config,
        TaskdashConfig {
            notes_dir: Some("journal".to_string()),
            ..TaskdashConfig::default()
        }
    );
}

#[test]
fn malformed_config_is_an_error() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(config_path(temp.path()), "port = \"not a number\"\n").expect("write");
    let err = resolve_config(temp.path()).expect_err("parse error");
    assert!(err.to_string().contains(".taskdash.toml"));
}
