//! Stub templates and literal placeholder substitution
//!
//! Stubs are plain text files with literal tokens such as `{{ Component }}`.
//! There is no template language: every placeholder is replaced verbatim,
//! everywhere it occurs, and placeholders are never interpreted as patterns.

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Apply `substitutions` to `template` in order.
///
/// Each `(placeholder, replacement)` pair replaces every occurrence of the
/// placeholder. Later pairs see the output of earlier ones.
///
/// # Examples
///
/// ```
/// use tsx_scaffold::render;
///
/// let text = render("<{{ Component }} /> // {{ Component }}", &[("{{ Component }}", "Home")]);
/// assert_eq!(text, "<Home /> // Home");
/// ```
#[must_use]
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |text, (placeholder, replacement)| {
            if placeholder.is_empty() {
                text
            } else {
                text.replace(placeholder, replacement)
            }
        })
}

/// A single stub loaded into memory and transformed by chained replacements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    file_path: PathBuf,
    contents: String,
}

impl StubTemplate {
    /// Read the stub at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;

        Ok(Self {
            file_path: path.to_path_buf(),
            contents,
        })
    }

    /// Wrap stub text that is already in memory
    #[must_use]
    pub fn from_contents(file_path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            contents: contents.into(),
        }
    }

    /// Replace every occurrence of `placeholder` with `replacement`
    #[must_use]
    pub fn replace(mut self, placeholder: &str, replacement: &str) -> Self {
        self.contents = render(&self.contents, &[(placeholder, replacement)]);
        self
    }

    /// Write the current contents to `path`, creating or truncating the file.
    ///
    /// The parent directory is not created.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<&Self> {
        let path = path.as_ref();
        fs::write(path, &self.contents).map_err(|e| ScaffoldError::io(path, e))?;
        Ok(self)
    }

    /// Where the stub was read from
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Current text
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_replaces_all_occurrences() {
        let out = render("{{ A }} and {{ A }}", &[("{{ A }}", "x")]);
        assert_eq!(out, "x and x");
    }

    #[test]
    fn test_render_applies_pairs_in_order() {
        let out = render("{{ A }}", &[("{{ A }}", "{{ B }}"), ("{{ B }}", "done")]);
        assert_eq!(out, "done");
    }

    #[test]
    fn test_render_treats_placeholders_literally() {
        let out = render("a.b a+b", &[(".", "DOT"), ("+", "$1")]);
        assert_eq!(out, "aDOTb a$1b");
    }

    #[test]
    fn test_render_ignores_empty_placeholder() {
        assert_eq!(render("abc", &[("", "x")]), "abc");
    }

    #[test]
    fn test_longer_token_survives_prefix_replacement() {
        let out = render(
            "{{ Component }}: {{ ComponentPropsTypes }}",
            &[("{{ Component }}", "Home")],
        );
        assert_eq!(out, "Home: {{ ComponentPropsTypes }}");
    }

    #[test]
    fn test_load_replace_save() {
        let dir = tempdir().unwrap();
        let stub = dir.path().join("stub.tsx");
        fs::write(&stub, "export const {{ Component }} = 1;\n").unwrap();

        let out = dir.path().join("Home.tsx");
        StubTemplate::load(&stub)
            .unwrap()
            .replace("{{ Component }}", "Home")
            .save_to(&out)
            .unwrap();

        assert_eq!(fs::read_to_string(out).unwrap(), "export const Home = 1;\n");
        // the stub itself is untouched
        assert!(fs::read_to_string(stub).unwrap().contains("{{ Component }}"));
    }

    #[test]
    fn test_load_missing_stub_is_io_error() {
        let dir = tempdir().unwrap();
        let err = StubTemplate::load(dir.path().join("nope.ts")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[test]
    fn test_save_to_does_not_create_parent() {
        let dir = tempdir().unwrap();
        let template = StubTemplate::from_contents("inline", "text");

        let result = template.save_to(dir.path().join("missing").join("out.ts"));
        assert!(result.is_err());
        assert!(!dir.path().join("missing").exists());
    }
}
