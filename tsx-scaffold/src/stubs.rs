//! The fixed stub set
//!
//! Stubs ship inside the binary (see `src/stubs/`). A project can override them
//! by pointing [`StubSource::Directory`] at a folder holding files with the same
//! names.

use crate::error::Result;
use crate::template::StubTemplate;
use std::path::PathBuf;

/// One of the stub files a component is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stub {
    /// `index.ts`
    Index,
    /// `component.tsx`
    Component,
    /// `types.ts`
    Types,
    /// `component.styled.tsx`
    Styled,
    /// `component.module.scss`
    Scss,
    /// `component.storybook.tsx`
    StoryBook,
    /// `component.test.tsx`
    Test,
}

impl Stub {
    /// Every stub, in output order
    pub const ALL: [Self; 7] = [
        Self::Index,
        Self::Component,
        Self::Types,
        Self::Styled,
        Self::Scss,
        Self::StoryBook,
        Self::Test,
    ];

    /// File name of the stub inside a stub directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Index => "index.ts",
            Self::Component => "component.tsx",
            Self::Types => "types.ts",
            Self::Styled => "component.styled.tsx",
            Self::Scss => "component.module.scss",
            Self::StoryBook => "component.storybook.tsx",
            Self::Test => "component.test.tsx",
        }
    }

    /// Built-in stub text
    #[must_use]
    pub const fn embedded(self) -> &'static str {
        match self {
            Self::Index => include_str!("stubs/index.ts"),
            Self::Component => include_str!("stubs/component.tsx"),
            Self::Types => include_str!("stubs/types.ts"),
            Self::Styled => include_str!("stubs/component.styled.tsx"),
            Self::Scss => include_str!("stubs/component.module.scss"),
            Self::StoryBook => include_str!("stubs/component.storybook.tsx"),
            Self::Test => include_str!("stubs/component.test.tsx"),
        }
    }
}

/// Where stubs are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StubSource {
    /// Stubs compiled into the crate
    #[default]
    Embedded,
    /// A directory with one file per [`Stub::file_name`]
    Directory(PathBuf),
}

impl StubSource {
    /// Load `stub` as a fresh [`StubTemplate`].
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source is a directory and the stub file is
    /// missing or unreadable.
    pub fn template(&self, stub: Stub) -> Result<StubTemplate> {
        match self {
            Self::Embedded => Ok(StubTemplate::from_contents(stub.file_name(), stub.embedded())),
            Self::Directory(dir) => StubTemplate::load(dir.join(stub.file_name())),
        }
    }
}
