//! Locating and reading `config.toml`.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among [`candidate_paths`] wins, and plain defaults apply when there
//! is none.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use rectplot::{RectplotError, config::AppConfig};

const LOCAL_CONFIG: &str = "rectplot/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse `{path}`: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for RectplotError {
    fn from(err: ConfigError) -> Self {
        RectplotError::Config(err.to_string())
    }
}

/// Places searched when no explicit path is given, most specific first:
/// `rectplot/config.toml` under the working directory, then the platform
/// configuration directory.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "rectplot", "rectplot") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("No platform configuration directory"),
    }
    paths
}

/// Loads the application configuration.
///
/// # Errors
///
/// Fails when `explicit_path` names a missing file, or when the chosen file
/// is not valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RectplotError> {
    if let Some(path) = explicit_path {
        return read_config(path.as_ref());
    }

    let Some(found) = candidate_paths().into_iter().find(|path| path.is_file()) else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };
    read_config(&found)
}

fn read_config(path: &Path) -> Result<AppConfig, RectplotError> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    info!(path:? = path; "Loading configuration");
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nline_width = 4.0\n\n[export]\ndpi = 72\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.style().line_width(), 4.0);
        assert_eq!(config.export().dpi(), 72);
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, RectplotError::Config(msg) if msg.contains("missing")));
    }

    #[test]
    fn test_directory_is_not_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path())).unwrap_err();
        assert!(matches!(err, RectplotError::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[plot\nshow_grid = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, RectplotError::Config(msg) if msg.contains("failed to parse")));
    }

    #[test]
    fn test_local_candidate_comes_first() {
        let paths = candidate_paths();
        assert_eq!(paths[0], Path::new(LOCAL_CONFIG));
    }
}
