//! Scaffolding error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while scaffolding a component.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The component directory is already present. Nothing was written.
    #[error("component {name} already exists in {}", .target_dir.display())]
    AlreadyExists {
        /// Normalized component name.
        name: String,
        /// Parent directory the component was meant to be created in.
        target_dir: PathBuf,
    },

    /// The component name has no characters left after normalization.
    #[error("invalid component name: {0:?}")]
    InvalidName(String),

    /// Reading a stub or writing an output failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// `package.json` could not be parsed.
    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No `package.json` was found walking up from the start directory.
    #[error("no package.json found in {} or any parent directory", .0.display())]
    ProjectRootNotFound(PathBuf),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the recoverable "target already exists" conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_component_and_directory() {
        let err = ScaffoldError::AlreadyExists {
            name: "Home".to_string(),
            target_dir: PathBuf::from("src/components"),
        };

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "component Home already exists in src/components");
    }

    #[test]
    fn test_io_error_is_not_conflict() {
        let err = ScaffoldError::io(
            "stubs/index.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );

        assert!(!err.is_conflict());
        assert!(err.to_string().contains("stubs/index.ts"));
    }
}
