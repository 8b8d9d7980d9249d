//! Component generation command
//!
//! # Example
//!
//! ```bash
//! tsx-scaffold component user-card \
//!   --style scss \
//!   --types --tests \
//!   --prop title=Welcome --prop size=2
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use dialoguer::{Confirm, Select};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tsx_scaffold::project;
use tsx_scaffold::{
    ComponentGenerator, ComponentOptions, DefaultProps, ScaffoldConfig, ScaffoldError, StubSource,
    StyleMode,
};

/// Generate a component directory
#[derive(Debug, Args)]
pub struct ComponentCommand {
    /// Component name, in any case (`user-card`, `userCard`, `UserCard`)
    pub name: String,

    /// Parent directory of the component (default: configured
    /// `components_dir` under the project root, else the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Styling files to generate
    #[arg(short, long, value_enum)]
    pub style: Option<StyleMode>,

    /// Generate a types file and type the props
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub types: Option<bool>,

    /// Generate a test file
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub tests: Option<bool>,

    /// Generate a storybook story
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub storybook: Option<bool>,

    /// Add a `defaultProps` block
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub default_props: Option<bool>,

    /// Default prop entry; the value is parsed as JSON when possible, else
    /// kept as a string. Implies `--default-props`.
    #[arg(long = "prop", value_name = "KEY=VALUE", value_parser = parse_prop)]
    pub props: Vec<(String, Value)>,

    /// Directory with stub overrides
    #[arg(long, value_name = "DIR")]
    pub stubs: Option<PathBuf>,

    /// Print the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Ask for every option interactively
    #[arg(short, long)]
    pub interactive: bool,
}

impl ComponentCommand {
    /// Execute the command
    ///
    /// Returns a failure exit code, without an error, when the component
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The component name is empty after normalization
    /// - A stub cannot be read
    /// - The target directory or a file cannot be written
    pub fn execute(&self, config: &ScaffoldConfig) -> Result<ExitCode> {
        let mut options = self.resolve_options(config);
        if self.interactive {
            options = prompt_options(options)?;
        }

        let target = self.target_dir(config)?;
        let stubs = self
            .stubs
            .clone()
            .map_or_else(|| config.stub_source(), StubSource::Directory);

        let generator = ComponentGenerator::new(&self.name)
            .save_to(&target)
            .with_options(options)
            .stub_source(stubs);

        let name = generator
            .component_name()
            .context("Failed to normalize component name")?;

        println!(
            "\n{} {} {}",
            style("Generating component").cyan().bold(),
            style(&name).green().bold(),
            style("...").cyan().bold()
        );

        if self.dry_run {
            let files = generator.render_files().context("Failed to render stubs")?;
            let directory = target.join(&name);

            println!(
                "\n{} {} files would be written to {}:",
                style("Dry run:").yellow().bold(),
                files.len(),
                style(directory.display()).dim()
            );
            for file in &files {
                println!(
                    "  {} {} ({})",
                    style("•").yellow(),
                    file.path.display(),
                    style(&file.description).dim()
                );
            }
            return Ok(ExitCode::SUCCESS);
        }

        fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create directory: {}", target.display()))?;

        match generator.generate() {
            Ok(component) => {
                println!(
                    "\n{} {} files in {}:",
                    style("Generated").green().bold(),
                    component.files.len(),
                    style(component.directory.display()).dim()
                );
                for file in &component.files {
                    println!(
                        "  {} {} ({})",
                        style("✓").green(),
                        file.path.display(),
                        style(&file.description).dim()
                    );
                }
                println!(
                    "\n{} Component {} is ready!",
                    style("✨").green().bold(),
                    style(&component.name).green().bold()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(ScaffoldError::AlreadyExists { name, target_dir }) => {
                println!(
                    "\n{} Component {} already exists in {}",
                    style("!").yellow().bold(),
                    style(name).cyan(),
                    style(target_dir.display()).yellow()
                );
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err).context("Failed to generate component"),
        }
    }

    /// Merge command-line flags over the configured defaults
    fn resolve_options(&self, config: &ScaffoldConfig) -> ComponentOptions {
        let mut options = config.options();

        if let Some(style_mode) = self.style {
            options.style_mode = style_mode;
        }
        if let Some(types) = self.types {
            options.with_types = types;
        }
        if let Some(tests) = self.tests {
            options.with_tests = tests;
        }
        if let Some(storybook) = self.storybook {
            options.with_story_book = storybook;
        }

        if !self.props.is_empty() {
            let mut values = match options.with_default_props {
                DefaultProps::Values(values) => values,
                DefaultProps::Flag(_) => Map::new(),
            };
            for (key, value) in &self.props {
                values.insert(key.clone(), value.clone());
            }
            options.with_default_props = DefaultProps::Values(values);
        } else if let Some(enabled) = self.default_props {
            if !enabled {
                options.with_default_props = DefaultProps::Flag(false);
            } else if !options.with_default_props.is_enabled() {
                options.with_default_props = DefaultProps::Flag(true);
            }
        }

        options
    }

    fn target_dir(&self, config: &ScaffoldConfig) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let Some(components_dir) = &config.components_dir else {
            return Ok(cwd);
        };

        Ok(project::find_project_root(&cwd).map_or_else(
            |_| cwd.join(components_dir),
            |root| project::root_path(&root, components_dir),
        ))
    }
}

/// Parse a `KEY=VALUE` default prop
fn parse_prop(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid prop '{raw}', expected KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid prop '{raw}', the key is empty"));
    }

    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    Ok((key.to_string(), value))
}

/// Ask for every option, starting from `options`
fn prompt_options(mut options: ComponentOptions) -> Result<ComponentOptions> {
    let modes = StyleMode::value_variants();
    let labels: Vec<String> = modes
        .iter()
        .filter_map(StyleMode::to_possible_value)
        .map(|value| value.get_name().to_string())
        .collect();
    let current = modes
        .iter()
        .position(|mode| *mode == options.style_mode)
        .unwrap_or_default();

    let selected = Select::new()
        .with_prompt("Style mode")
        .items(&labels)
        .default(current)
        .interact()
        .context("Failed to read style mode")?;

    let Some(style_mode) = modes.get(selected) else {
        bail!("Unknown style mode selection: {selected}");
    };
    options.style_mode = *style_mode;

    options.with_types = confirm("Generate a types file?", options.with_types)?;
    options.with_tests = confirm("Generate a test file?", options.with_tests)?;
    options.with_story_book = confirm("Generate a storybook story?", options.with_story_book)?;

    let with_default_props = confirm(
        "Add a defaultProps block?",
        options.with_default_props.is_enabled(),
    )?;
    if !with_default_props {
        options.with_default_props = DefaultProps::Flag(false);
    } else if !options.with_default_props.is_enabled() {
        options.with_default_props = DefaultProps::Flag(true);
    }

    Ok(options)
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .with_context(|| format!("Failed to read answer to '{prompt}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: ComponentCommand,
    }

    fn parse(args: &[&str]) -> ComponentCommand {
        let argv = std::iter::once("test").chain(args.iter().copied());
        TestCli::parse_from(argv).cmd
    }

    #[test]
    fn test_parse_prop_json_and_string() {
        assert_eq!(parse_prop("count=3").unwrap(), ("count".to_string(), json!(3)));
        assert_eq!(parse_prop("open=true").unwrap(), ("open".to_string(), json!(true)));
        assert_eq!(
            parse_prop("name=Hasan").unwrap(),
            ("name".to_string(), json!("Hasan"))
        );
        assert_eq!(
            parse_prop("label=\"quoted\"").unwrap(),
            ("label".to_string(), json!("quoted"))
        );
        assert_eq!(
            parse_prop("query=a=b").unwrap(),
            ("query".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_prop_invalid() {
        assert!(parse_prop("novalue").is_err());
        assert!(parse_prop("=3").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ScaffoldConfig::default();
        config.defaults.with_tests = true;
        config.defaults.style_mode = StyleMode::Scss;

        let cmd = parse(&["home", "--style", "styled", "--types", "--tests=false"]);
        let options = cmd.resolve_options(&config);

        assert_eq!(options.style_mode, StyleMode::Styled);
        assert!(options.with_types);
        assert!(!options.with_tests);
        assert!(!options.with_story_book);
    }

    #[test]
    fn test_config_used_when_flags_absent() {
        let mut config = ScaffoldConfig::default();
        config.defaults.with_story_book = true;
        config.defaults.style_mode = StyleMode::All;

        let options = parse(&["home"]).resolve_options(&config);

        assert_eq!(options.style_mode, StyleMode::All);
        assert!(options.with_story_book);
    }

    #[test]
    fn test_props_imply_default_props() {
        let cmd = parse(&["home", "--prop", "name=Hasan", "--prop", "age=30"]);
        let options = cmd.resolve_options(&ScaffoldConfig::default());

        let DefaultProps::Values(values) = options.with_default_props else {
            panic!("expected default prop values");
        };
        let keys: Vec<_> = values.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(values["age"], json!(30));
    }

    #[test]
    fn test_default_props_flag() {
        let options = parse(&["home", "--default-props"]).resolve_options(&ScaffoldConfig::default());
        assert_eq!(options.with_default_props, DefaultProps::Flag(true));

        let mut config = ScaffoldConfig::default();
        config.defaults.with_default_props = DefaultProps::Flag(true);
        let options = parse(&["home", "--default-props=false"]).resolve_options(&config);
        assert_eq!(options.with_default_props, DefaultProps::Flag(false));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut config = ScaffoldConfig::default();
        config.components_dir = Some(PathBuf::from("src/components"));

        let cmd = parse(&["home", "--path", "ui"]);
        assert_eq!(cmd.target_dir(&config).unwrap(), PathBuf::from("ui"));
    }
}
