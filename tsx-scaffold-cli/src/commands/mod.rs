//! CLI command implementations

pub mod component;
pub mod info;

pub use component::ComponentCommand;
pub use info::InfoCommand;
