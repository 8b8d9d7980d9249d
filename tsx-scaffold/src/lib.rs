//! tsx-scaffold
//!
//! Generates a directory of React + TypeScript component files from a fixed set
//! of stubs. A component is described with a chained [`ComponentGenerator`] and
//! written by a single call to [`ComponentGenerator::generate`].
//!
//! # Example
//!
//! ```rust,no_run
//! use tsx_scaffold::{ComponentGenerator, StyleMode};
//!
//! # fn main() -> tsx_scaffold::Result<()> {
//! let component = ComponentGenerator::new("user-card")
//!     .save_to("./src/components")
//!     .style_mode(StyleMode::Scss)
//!     .with_types(true)
//!     .generate()?;
//!
//! assert_eq!(component.name, "UserCard");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod observability;
pub mod project;
pub mod stubs;
pub mod template;

pub use config::{ComponentDefaults, ScaffoldConfig};
pub use error::{Result, ScaffoldError};
pub use generator::{
    ComponentGenerator, ComponentOptions, DefaultProps, GeneratedComponent, GeneratedFile, StyleArtifact,
    StyleMode,
};
pub use project::PackageManifest;
pub use stubs::{Stub, StubSource};
pub use template::{render, StubTemplate};
