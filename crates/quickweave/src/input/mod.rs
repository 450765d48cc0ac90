//! Build inputs presented by the host and the archive relevance filter.
//!
//! The host hands over two ordered groups of inputs: the ones this transform
//! must process and the ones it may only reference for type resolution. Each
//! entry is either a directory of compiled classes or a packaged archive.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name fragment identifying the permission annotation library.
pub const ANNOTATIONS_MARKER: &str = "quickpermissions-annotations";

/// Name fragment identifying the aspect runtime library.
pub const RUNTIME_MARKER: &str = "aspectjrt";

/// Physical shape of a build input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// A directory of compiled class files.
    Directory,
    /// A packaged archive such as a dependency jar.
    Archive,
}

/// Ownership scope of a build input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Code compiled by the current module.
    Project,
    /// Code compiled by other modules of the same build.
    SubProject,
    /// Third-party dependency code.
    ExternalLibrary,
}

impl Scope {
    /// Stable lowercase label used in output keys and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::SubProject => "sub_project",
            Self::ExternalLibrary => "external_library",
        }
    }
}

/// One unit of compiled code supplied by the host.
///
/// # Example
///
/// ```
/// use quickweave::input::{BuildInput, Scope};
///
/// let jar = BuildInput::archive("/libs/aspectjrt-1.8.13.jar", Scope::ExternalLibrary);
/// assert_eq!(jar.name(), "aspectjrt-1.8.13.jar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInput {
    path: PathBuf,
    kind: InputKind,
    scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl BuildInput {
    /// Creates an input of the given kind.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: InputKind, scope: Scope) -> Self {
        Self {
            path: path.into(),
            kind,
            scope,
            name: None,
        }
    }

    /// Creates a directory input.
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>, scope: Scope) -> Self {
        Self::new(path, InputKind::Directory, scope)
    }

    /// Creates an archive input.
    #[must_use]
    pub fn archive(path: impl Into<PathBuf>, scope: Scope) -> Self {
        Self::new(path, InputKind::Archive, scope)
    }

    /// Overrides the name used for archive filtering.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filesystem location of the input.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Whether the input is a directory or an archive.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        self.kind
    }

    /// Ownership scope.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Name used for filtering; the final path component unless overridden.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) => name,
            None => self
                .path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default(),
        }
    }
}

/// All inputs handed to one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    #[serde(default)]
    inputs: Vec<BuildInput>,
    #[serde(default)]
    referenced: Vec<BuildInput>,
}

impl InputSet {
    /// Creates an input set from its two groups, keeping host order.
    #[must_use]
    pub const fn new(inputs: Vec<BuildInput>, referenced: Vec<BuildInput>) -> Self {
        Self { inputs, referenced }
    }

    /// Inputs this transform processes.
    #[must_use]
    pub fn inputs(&self) -> &[BuildInput] {
        &self.inputs
    }

    /// Inputs available for resolution only.
    #[must_use]
    pub fn referenced(&self) -> &[BuildInput] {
        &self.referenced
    }
}

/// Selects the dependency archives the weaver itself needs.
///
/// An archive is relevant when its name contains one of the markers. Anything
/// else is unrelated third-party code and never reaches the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantArchiveFilter {
    markers: Vec<String>,
}

impl Default for RelevantArchiveFilter {
    fn default() -> Self {
        Self::new([ANNOTATIONS_MARKER, RUNTIME_MARKER])
    }
}

impl RelevantArchiveFilter {
    /// Creates a filter from explicit markers.
    #[must_use]
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Extends the filter with further markers; empty markers are ignored.
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers.extend(
            markers
                .into_iter()
                .map(Into::into)
                .filter(|marker| !marker.is_empty()),
        );
        self
    }

    /// Markers currently recognised.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns whether the archive name carries one of the markers.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
    }
}

#[cfg(test)]
mod tests;
