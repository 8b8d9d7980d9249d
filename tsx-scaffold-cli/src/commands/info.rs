//! Project information command

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;
use tsx_scaffold::project::{self, MANIFEST_FILE};
use tsx_scaffold::PackageManifest;

/// Packages that affect what a generated component needs
const RELEVANT_PACKAGES: &[&str] = &[
    "react",
    "typescript",
    "sass",
    "@emotion/styled",
    "styled-components",
    "@storybook/react",
    "@testing-library/react",
];

/// Show the detected project
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Directory to start the project search from (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

impl InfoCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if no project root is found or its manifest cannot be
    /// read.
    pub fn execute(&self) -> Result<()> {
        let start = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let root = project::find_project_root(&start)?;
        let manifest = PackageManifest::load_from_root(&root)
            .with_context(|| format!("Failed to read {MANIFEST_FILE}"))?;

        println!(
            "\n{} {}",
            style("Project root:").cyan().bold(),
            root.display()
        );
        println!(
            "  {} {}",
            style("name:").bold(),
            manifest.name.as_deref().unwrap_or("(unnamed)")
        );
        println!(
            "  {} {}",
            style("version:").bold(),
            manifest.version.as_deref().unwrap_or("(none)")
        );

        println!("\n{}", style("Dependencies:").cyan().bold());
        for package in RELEVANT_PACKAGES {
            if manifest.has_dependency(package) {
                println!(
                    "  {} {} {}",
                    style("✓").green(),
                    package,
                    style(manifest.dependency_version(package).unwrap_or("")).dim()
                );
            } else {
                println!("  {} {}", style("✗").red(), style(package).dim());
            }
        }

        Ok(())
    }
}
