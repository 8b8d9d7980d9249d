//! Configuration management for tsx-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `TSX_SCAFFOLD_` prefix)
//! 2. A file passed explicitly (`--config`)
//! 3. `./tsx-scaffold.toml` (project)
//! 4. `~/.config/tsx-scaffold/config.toml` (user config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # tsx-scaffold.toml
//! components_dir = "src/components"
//!
//! [defaults]
//! style_mode = "scss"
//! with_types = true
//! with_tests = true
//! ```
//!
//! Nested keys are reached from the environment with a double underscore,
//! e.g. `TSX_SCAFFOLD_DEFAULTS__STYLE_MODE=styled`.

use crate::error::Result;
use crate::generator::ComponentOptions;
use crate::stubs::StubSource;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TSX_SCAFFOLD_";

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "tsx-scaffold.toml";

/// Options applied to every generated component unless overridden
pub type ComponentDefaults = ComponentOptions;

/// Complete tsx-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory components are created in, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components_dir: Option<PathBuf>,

    /// Directory with stub overrides; the embedded stubs are used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_dir: Option<PathBuf>,

    /// Default component options
    pub defaults: ComponentDefaults,
}

impl ScaffoldConfig {
    /// Load configuration from every standard location.
    ///
    /// `explicit` is an extra file layered above the project file; it must
    /// exist when given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A configuration file contains invalid TOML
    /// - The explicit file does not exist
    /// - Values fail type conversion
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Self::defaults_figment();

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                debug!(path = %user_config.display(), "loading user config");
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            debug!(path = %project_config.display(), "loading project config");
            figment = figment.merge(Toml::file(&project_config));
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            figment = figment.merge(Toml::file_exact(path));
        }

        let config = figment.merge(Self::env()).extract()?;
        Ok(config)
    }

    /// Load configuration from a single file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid, or values fail
    /// type conversion.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::defaults_figment()
            .merge(Toml::file_exact(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Recommended user configuration path, `~/.config/tsx-scaffold/config.toml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tsx-scaffold").join("config.toml"))
    }

    /// Where stubs are read from
    #[must_use]
    pub fn stub_source(&self) -> StubSource {
        self.stubs_dir
            .clone()
            .map_or(StubSource::Embedded, StubSource::Directory)
    }

    /// Default component options
    #[must_use]
    pub fn options(&self) -> ComponentOptions {
        self.defaults.clone()
    }

    fn defaults_figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }
}
