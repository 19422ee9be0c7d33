use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TASKS_FILE: &str = "tasks.md";
pub const DEFAULT_NOTES_DIR: &str = "notes";
pub const DEFAULT_OUTPUT_DIR: &str = "_site";
pub const DEFAULT_PORT: u16 = 4242;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `.taskdash.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskdashConfig {
    pub tasks_file: Option<String>,
    pub notes_dir: Option<String>,
    pub output_dir: Option<String>,
    pub port: Option<u16>,
    /// Quiet period for coalescing file-change events, in milliseconds.
    pub debounce_ms: Option<u64>,
}

pub fn config_filename_candidates() -> [&'static str; 2] {
    [".taskdash.toml", ".taskdashrc"]
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(".taskdash.toml")
}

pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    config_filename_candidates()
        .into_iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Parses the config file in `root`, if there is one.
pub fn load_config(root: &Path) -> Result<Option<TaskdashConfig>, ConfigError> {
    let Some(path) = find_config_file(root) else {
        return Ok(None);
    };
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str::<TaskdashConfig>(&text)
        .map_err(|source| ConfigError::Parse { path, source })?;
    Ok(Some(config))
}

/// Input and output locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub tasks_file: PathBuf,
    pub notes_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl SitePaths {
    pub fn new(root: &Path) -> Self {
        SitePaths::from_config(root, &TaskdashConfig::default())
    }

    pub fn from_config(root: &Path, config: &TaskdashConfig) -> Self {
        let resolve = |value: &Option<String>, default: &str| {
            root.join(value.as_deref().unwrap_or(default))
        };
        SitePaths {
            tasks_file: resolve(&config.tasks_file, DEFAULT_TASKS_FILE),
            notes_dir: resolve(&config.notes_dir, DEFAULT_NOTES_DIR),
            output_dir: resolve(&config.output_dir, DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeOptions {
    pub port: u16,
    pub debounce: Duration,
}

impl Default for ServeOptions {
    fn default() -> Self {
        ServeOptions {
            port: DEFAULT_PORT,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl From<&TaskdashConfig> for ServeOptions {
    fn from(config: &TaskdashConfig) -> Self {
        ServeOptions {
            port: config.port.unwrap_or(DEFAULT_PORT),
            debounce: Duration::from_millis(config.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)),
        }
    }
}

/// Everything derived from a project root and its optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub config_file: Option<PathBuf>,
    pub paths: SitePaths,
    pub serve: ServeOptions,
}

pub fn resolve_config(root: &Path) -> Result<ResolvedConfig, ConfigError> {
    let config = load_config(root)?.unwrap_or_default();
    Ok(ResolvedConfig {
        root: root.to_path_buf(),
        config_file: find_config_file(root),
        paths: SitePaths::from_config(root, &config),
        serve: ServeOptions::from(&config),
    })
}
