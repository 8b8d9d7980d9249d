//! React component generator
//!
//! This module builds one component directory from the stub set:
//! - `index.ts` (always)
//! - `<Name>.tsx` (always)
//! - `<Name>.types.ts` when types are enabled
//! - `<Name>.styled.ts` and/or `<Name>.scss` depending on the style mode
//! - `<Name>.storybook.tsx` when storybook is enabled
//! - `<Name>.test.tsx` when tests are enabled

use crate::error::{Result, ScaffoldError};
use crate::naming::to_component_name;
use crate::stubs::{Stub, StubSource};
use crate::template::StubTemplate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const COMPONENT: &str = "{{ Component }}";
const COMPONENT_WRAPPER: &str = "{{ ComponentWrapper }}";
const PROPS_TYPE: &str = "{{ ComponentPropsTypes }}";
const IMPORTS: &str = "{{ imports }}";
const INDEX_IMPORTS: &str = "// {{ imports }}";
const DEFAULT_PROPS: &str = "{{ defaultProps }}";

/// Which styling files to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// No styling file
    #[default]
    None,
    /// A scss module file
    Scss,
    /// A co-located styled-components file
    Styled,
    /// Every styling file at once
    All,
}

/// A single styling file a [`StyleMode`] can turn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleArtifact {
    /// `<Name>.scss`, imported as `classes`
    Scss,
    /// `<Name>.styled.ts`, exporting `<Name>Wrapper`
    Styled,
}

impl StyleMode {
    /// The styling files this mode emits
    #[must_use]
    pub const fn artifacts(self) -> &'static [StyleArtifact] {
        match self {
            Self::None => &[],
            Self::Scss => &[StyleArtifact::Scss],
            Self::Styled => &[StyleArtifact::Styled],
            Self::All => &[StyleArtifact::Scss, StyleArtifact::Styled],
        }
    }

    /// Whether `artifact` is emitted in this mode
    #[must_use]
    pub fn includes(self, artifact: StyleArtifact) -> bool {
        self.artifacts().contains(&artifact)
    }
}

/// Default props attached to the component as a static `defaultProps` object
///
/// `Flag(false)` disables the block, `Flag(true)` emits an empty block and
/// `Values` emits one `key: value,` line per entry in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultProps {
    /// Block on or off, without entries
    Flag(bool),
    /// Block with entries
    Values(Map<String, Value>),
}

impl Default for DefaultProps {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for DefaultProps {
    fn from(enabled: bool) -> Self {
        Self::Flag(enabled)
    }
}

impl From<Map<String, Value>> for DefaultProps {
    fn from(values: Map<String, Value>) -> Self {
        Self::Values(values)
    }
}

impl DefaultProps {
    /// Whether a `defaultProps` block is emitted
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Flag(true) | Self::Values(_))
    }

    fn entries(&self) -> Vec<(&str, &Value)> {
        match self {
            Self::Flag(_) => Vec::new(),
            Self::Values(values) => values.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        }
    }
}

/// Render a default prop value as a source literal.
///
/// Strings are wrapped in double quotes as-is. Everything else uses its JSON
/// text, which is a best effort for nested values.
fn prop_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

/// Feature switches for a generated component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOptions {
    /// Styling files to emit
    pub style_mode: StyleMode,
    /// Emit `<Name>.storybook.tsx`
    pub with_story_book: bool,
    /// Emit `<Name>.test.tsx`
    pub with_tests: bool,
    /// Emit `<Name>.types.ts` and type the component props
    pub with_types: bool,
    /// Emit a `defaultProps` block
    pub with_default_props: DefaultProps,
}

/// Component generator
///
/// Configured through chained setters and consumed by [`generate`](Self::generate).
#[derive(Debug, Clone)]
pub struct ComponentGenerator {
    /// Name as given by the caller
    component_name: String,
    /// Parent directory of the component directory
    target_path: PathBuf,
    options: ComponentOptions,
    stubs: StubSource,
}

impl ComponentGenerator {
    /// Start a generator for `component_name` with every option off,
    /// targeting the current directory and the embedded stubs.
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            target_path: PathBuf::from("."),
            options: ComponentOptions::default(),
            stubs: StubSource::default(),
        }
    }

    /// Directory the component directory is created in
    #[must_use]
    pub fn save_to(mut self, target_path: impl Into<PathBuf>) -> Self {
        self.target_path = target_path.into();
        self
    }

    /// Styling files to emit
    #[must_use]
    pub fn style_mode(mut self, style_mode: StyleMode) -> Self {
        self.options.style_mode = style_mode;
        self
    }

    /// Emit a storybook story
    #[must_use]
    pub fn with_story_book(mut self, with_story_book: bool) -> Self {
        self.options.with_story_book = with_story_book;
        self
    }

    /// Emit a types file and type the component props
    #[must_use]
    pub fn with_types(mut self, with_types: bool) -> Self {
        self.options.with_types = with_types;
        self
    }

    /// Emit a test file
    #[must_use]
    pub fn with_tests(mut self, with_tests: bool) -> Self {
        self.options.with_tests = with_tests;
        self
    }

    /// Emit a `defaultProps` block; accepts a flag or a map of values
    #[must_use]
    pub fn with_default_props(mut self, default_props: impl Into<DefaultProps>) -> Self {
        self.options.with_default_props = default_props.into();
        self
    }

    /// Replace every option at once
    #[must_use]
    pub fn with_options(mut self, options: ComponentOptions) -> Self {
        self.options = options;
        self
    }

    /// Where stubs are read from
    #[must_use]
    pub fn stub_source(mut self, stubs: StubSource) -> Self {
        self.stubs = stubs;
        self
    }

    /// Current options
    #[must_use]
    pub const fn options(&self) -> &ComponentOptions {
        &self.options
    }

    /// Canonical component name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if nothing is left after
    /// normalization.
    pub fn component_name(&self) -> Result<String> {
        let name = to_component_name(&self.component_name);
        if name.is_empty() {
            return Err(ScaffoldError::InvalidName(self.component_name.clone()));
        }
        Ok(name)
    }

    /// `target_path/<Name>`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the name is empty after
    /// normalization.
    pub fn full_target_path(&self) -> Result<PathBuf> {
        Ok(self.target_path.join(self.component_name()?))
    }

    /// Render every output file without touching the target directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or a stub cannot be read.
    pub fn render_files(&self) -> Result<Vec<GeneratedFile>> {
        let name = self.component_name()?;
        self.render_named(&name)
    }

    /// Create the component directory and write every file into it.
    ///
    /// Nothing is written when the directory already exists; the call then
    /// fails with [`ScaffoldError::AlreadyExists`]. Stubs are all rendered
    /// before the directory is created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The component directory already exists
    /// - The name is empty after normalization
    /// - A stub cannot be read
    /// - The directory or a file cannot be written
    pub fn generate(self) -> Result<GeneratedComponent> {
        let name = self.component_name()?;
        let directory = self.target_path.join(&name);

        // any entry counts, including files and dangling links
        if fs::symlink_metadata(&directory).is_ok() {
            warn!(
                component = %name,
                target = %self.target_path.display(),
                "component already exists"
            );
            return Err(ScaffoldError::AlreadyExists {
                name,
                target_dir: self.target_path,
            });
        }

        let files = self.render_named(&name)?;

        fs::create_dir(&directory).map_err(|e| ScaffoldError::io(&directory, e))?;

        for file in &files {
            file.write_into(&directory)?;
            debug!(file = %file.path.display(), "wrote component file");
        }

        info!(
            component = %name,
            directory = %directory.display(),
            files = files.len(),
            "component generated"
        );

        Ok(GeneratedComponent {
            name,
            directory,
            files,
        })
    }

    fn render_named(&self, name: &str) -> Result<Vec<GeneratedFile>> {
        let style = self.options.style_mode;
        let mut files = vec![self.index_file(name)?, self.component_file(name)?];

        if self.options.with_types {
            files.push(self.simple_file(
                Stub::Types,
                COMPONENT,
                name,
                format!("{name}.types.ts"),
                "props types",
            )?);
        }

        if style.includes(StyleArtifact::Styled) {
            files.push(self.simple_file(
                Stub::Styled,
                COMPONENT_WRAPPER,
                &format!("{name}Wrapper"),
                format!("{name}.styled.ts"),
                "styled wrapper",
            )?);
        }

        if style.includes(StyleArtifact::Scss) {
            files.push(self.simple_file(
                Stub::Scss,
                COMPONENT_WRAPPER,
                &format!("{name}Wrapper"),
                format!("{name}.scss"),
                "scss module",
            )?);
        }

        if self.options.with_story_book {
            files.push(self.simple_file(
                Stub::StoryBook,
                COMPONENT,
                name,
                format!("{name}.storybook.tsx"),
                "storybook story",
            )?);
        }

        if self.options.with_tests {
            files.push(self.simple_file(
                Stub::Test,
                COMPONENT,
                name,
                format!("{name}.test.tsx"),
                "component test",
            )?);
        }

        debug!(component = %name, files = files.len(), "rendered stubs");

        Ok(files)
    }

    fn index_file(&self, name: &str) -> Result<GeneratedFile> {
        let template = self
            .stubs
            .template(Stub::Index)?
            .replace(INDEX_IMPORTS, &self.index_exports(name));

        Ok(GeneratedFile::new("index.ts", "entry point", template))
    }

    fn component_file(&self, name: &str) -> Result<GeneratedFile> {
        let template = self
            .stubs
            .template(Stub::Component)?
            .replace(COMPONENT, name)
            .replace(IMPORTS, &self.component_imports(name))
            .replace(DEFAULT_PROPS, &self.default_props_block(name))
            .replace(PROPS_TYPE, &self.props_type(name));

        Ok(GeneratedFile::new(format!("{name}.tsx"), "component", template))
    }

    fn simple_file(
        &self,
        stub: Stub,
        placeholder: &str,
        replacement: &str,
        file_name: String,
        description: &str,
    ) -> Result<GeneratedFile> {
        let template = self.stubs.template(stub)?.replace(placeholder, replacement);
        Ok(GeneratedFile::new(file_name, description, template))
    }

    fn index_exports(&self, name: &str) -> String {
        let mut exports = vec![format!("export {{ default }} from \"./{name}\";")];

        if self.options.with_types {
            exports.push(format!("export * from \"./{name}.types\";"));
        }

        exports.join("\n") + "\n"
    }

    fn component_imports(&self, name: &str) -> String {
        let style = self.options.style_mode;
        let mut imports = Vec::new();

        if self.options.with_types {
            imports.push(format!("import {{ {name}Props }} from \"./{name}.types\";"));
        }

        if style.includes(StyleArtifact::Scss) {
            imports.push(format!("import classes from \"./{name}.scss\";"));
        }

        if style.includes(StyleArtifact::Styled) {
            imports.push(format!("import {{ {name}Wrapper }} from \"./{name}.styled\";"));
        }

        if imports.is_empty() {
            String::new()
        } else {
            imports.join("\n") + "\n\n"
        }
    }

    fn props_type(&self, name: &str) -> String {
        if self.options.with_types {
            format!("{name}Props")
        } else {
            "any".to_string()
        }
    }

    fn default_props_block(&self, name: &str) -> String {
        let props = &self.options.with_default_props;
        if !props.is_enabled() {
            return String::new();
        }

        let entries: Vec<String> = props
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{key}: {},", prop_literal(value)))
            .collect();

        format!(
            "\n\n{name}.defaultProps = {{\n  // your default props here\n  {}\n}};",
            entries.join("\n  ")
        )
    }
}

/// A rendered output file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the component directory
    pub path: PathBuf,
    /// Short description for user feedback
    pub description: String,
    template: StubTemplate,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, description: &str, template: StubTemplate) -> Self {
        Self {
            path: path.into(),
            description: description.to_string(),
            template,
        }
    }

    /// Rendered text
    #[must_use]
    pub fn contents(&self) -> &str {
        self.template.contents()
    }

    /// Write the file into `directory`, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the file cannot be written.
    pub fn write_into(&self, directory: &Path) -> Result<()> {
        self.template.save_to(directory.join(&self.path))?;
        Ok(())
    }
}

/// Result of a successful [`ComponentGenerator::generate`]
#[derive(Debug)]
pub struct GeneratedComponent {
    /// Canonical component name
    pub name: String,
    /// Created component directory
    pub directory: PathBuf,
    /// Files written, in write order
    pub files: Vec<GeneratedFile>,
}
