//! Configuration loading, parsing, and validation for buildgate.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use buildgate::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".buildgate");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("requirements.yml"),
//!     "requirements:\n  - id: docker\n    title: Docker Check\n",
//! )
//! .unwrap();
//!
//! let loaded = load_config(temp.path(), None).unwrap();
//! validate(&loaded.config).unwrap();
//! assert_eq!(loaded.config.requirements[0].id, "docker");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, ConfigSource,
    LoadedConfig, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{GateConfig, OutputMode, Settings};
pub use validator::{validate, validate_config, ValidationError};
