//! Configuration loading
//!
//! The shell reads [`AppConfig`] from a TOML file. A missing file is
//! not an error (defaults apply), but an unreadable or unparsable file
//! is reported instead of silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use up_core::config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        log::info!("config file {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("urlpaste.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [capture]
            marker_class = "editor-paste"
            capture_by_default = true

            [interop]
            autofocus_id = "main-input"
            "#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.capture.marker_class, "editor-paste");
        assert!(config.capture.capture_by_default);
        assert_eq!(config.interop.autofocus_id, "main-input");
    }

    #[test]
    fn test_partial_config_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [capture]
            capture_by_default = true
            "#,
        );

        let config = load_config(&path).unwrap();
        assert!(config.capture.capture_by_default);
        assert_eq!(config.capture.marker_class, "capture-paste");
        assert_eq!(config.interop.autofocus_id, "landing-paste-prompt");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "capture = \"not a table\"");
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
