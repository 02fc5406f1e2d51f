//! Configuration file discovery and loading.
//!
//! The requirements file lives at `.buildgate/requirements.yml` under the
//! project root. An explicit `--config` path replaces discovery entirely.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};

/// Directory holding buildgate files inside a project.
pub const CONFIG_DIR: &str = ".buildgate";

/// Requirements file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "requirements.yml";

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file found; the built-in checklist is in use.
    Builtin,
}

/// A configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GateConfig,
    pub source: ConfigSource,
}

/// Default requirements file path for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a single config file and parse it into GateConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GateConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<GateConfig> {
    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project's requirements file is used when present, and the built-in
/// checklist when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = config_override {
        debug!(path = %path.display(), "Loading explicit config");
        return Ok(LoadedConfig {
            config: load_config_file(path)?,
            source: ConfigSource::File(path.to_path_buf()),
        });
    }

    let path = default_config_path(project_root);
    if path.is_file() {
        debug!(path = %path.display(), "Loading project config");
        return Ok(LoadedConfig {
            config: load_config_file(&path)?,
            source: ConfigSource::File(path),
        });
    }

    debug!("No requirements file found, using built-in checklist");
    Ok(LoadedConfig {
        config: GateConfig::builtin(),
        source: ConfigSource::Builtin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), config).unwrap();
        temp
    }

    #[test]
    fn loads_project_config() {
        let temp = setup_project("requirements:\n  - id: a\n    title: A\n");
        let loaded = load_config(temp.path(), None).unwrap();
        assert_eq!(loaded.config.requirements[0].id, "a");
        assert_eq!(
            loaded.source,
            ConfigSource::File(default_config_path(temp.path()))
        );
    }

    #[test]
    fn falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let loaded = load_config(temp.path(), None).unwrap();
        assert_eq!(loaded.source, ConfigSource::Builtin);
        assert_eq!(loaded.config, GateConfig::builtin());
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, GateError::ConfigNotFound { path } if path == missing));
    }

    #[test]
    fn explicit_path_overrides_project_config() {
        let temp = setup_project("requirements:\n  - id: a\n    title: A\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "requirements:\n  - id: b\n    title: B\n").unwrap();

        let loaded = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(loaded.config.requirements[0].id, "b");
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = setup_project("requirements: [unclosed");
        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GateError::ConfigParseError { path, .. } => {
                assert_eq!(path, default_config_path(temp.path()))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
