//! Project root discovery and `package.json` access

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file that marks a project root
pub const MANIFEST_FILE: &str = "package.json";

/// Walk up from `start` to the first directory holding a `package.json`.
///
/// # Errors
///
/// Returns [`ScaffoldError::ProjectRootNotFound`] if no ancestor has one.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let found = start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf);

    found.map_or_else(
        || Err(ScaffoldError::ProjectRootNotFound(start.to_path_buf())),
        |root| {
            debug!(root = %root.display(), "found project root");
            Ok(root)
        },
    )
}

/// Absolute path of `relative` inside the project `root`
#[must_use]
pub fn root_path(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    root.join(relative)
}

/// The parts of `package.json` the scaffolder cares about
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,
    /// Package version
    #[serde(default)]
    pub version: Option<String>,
    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: Map<String, Value>,
    /// Development dependencies
    #[serde(default)]
    pub dev_dependencies: Map<String, Value>,
    /// Every other key, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`ScaffoldError::Manifest`] if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;

        serde_json::from_str(&raw).map_err(|source| ScaffoldError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse `package.json` in the project `root`.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_from_root(root: &Path) -> Result<Self> {
        Self::load(root_path(root, MANIFEST_FILE))
    }

    /// Whether `package` is a runtime or development dependency
    #[must_use]
    pub fn has_dependency(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    /// Declared version range of `package`, if any
    #[must_use]
    pub fn dependency_version(&self, package: &str) -> Option<&str> {
        self.dependencies
            .get(package)
            .or_else(|| self.dev_dependencies.get(package))
            .and_then(Value::as_str)
    }
}
