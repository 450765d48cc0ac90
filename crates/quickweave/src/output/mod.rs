//! Output directory allocation keyed by transform stage.
//!
//! The transform never picks its own output path. It describes what it
//! produces with an [`OutputKey`] and asks an [`OutputProvider`] for the
//! location, so repeated builds resolve to the same directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::WeaveError;
use crate::input::Scope;

const OUTPUT_TARGET: &str = "quickweave::output";

/// Number of digest bytes kept in a content-addressed directory name.
const DIGEST_PREFIX_BYTES: usize = 8;

/// Kind of content a transform consumes or produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Compiled class files.
    Classes,
}

impl ContentType {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classes => "classes",
        }
    }
}

/// Layout of a produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// A directory tree of class files.
    Directory,
}

impl Format {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
        }
    }
}

/// Identifies one output of a transform stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputKey {
    name: String,
    content_types: Vec<ContentType>,
    scopes: Vec<Scope>,
    format: Format,
}

impl OutputKey {
    /// Creates a key; content types and scopes are normalised so the key is
    /// independent of the order they were listed in.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mut content_types: Vec<ContentType>,
        mut scopes: Vec<Scope>,
        format: Format,
    ) -> Self {
        content_types.sort_unstable();
        content_types.dedup();
        scopes.sort_unstable();
        scopes.dedup();
        Self {
            name: name.into(),
            content_types,
            scopes,
            format,
        }
    }

    /// Output name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Canonical text form hashed into the directory name.
    #[must_use]
    pub fn canonical(&self) -> String {
        let types: Vec<&str> = self.content_types.iter().map(|ty| ty.as_str()).collect();
        let scopes: Vec<&str> = self.scopes.iter().map(|scope| scope.as_str()).collect();
        format!(
            "{}|{}|{}|{}",
            self.name,
            types.join(","),
            scopes.join(","),
            self.format.as_str()
        )
    }
}

/// Allocates output locations for a transform.
pub trait OutputProvider {
    /// Returns the directory for `key`, creating it when needed.
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::Output`] if the directory cannot be created.
    fn content_location(&self, key: &OutputKey) -> Result<PathBuf, WeaveError>;
}

/// Derives output directories from a digest of the output key.
///
/// # Example
///
/// ```no_run
/// use quickweave::input::Scope;
/// use quickweave::output::{
///     ContentAddressedOutputs, ContentType, Format, OutputKey, OutputProvider,
/// };
///
/// let outputs = ContentAddressedOutputs::new("/out/transforms/quickweave");
/// let key = OutputKey::new(
///     "main",
///     vec![ContentType::Classes],
///     vec![Scope::Project],
///     Format::Directory,
/// );
/// let dir = outputs.content_location(&key).expect("directory created");
/// assert!(dir.starts_with("/out/transforms/quickweave/main"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAddressedOutputs {
    root: PathBuf,
}

impl ContentAddressedOutputs {
    /// Creates a provider rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory under which outputs are allocated.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Computes the location for `key` without touching the filesystem.
    #[must_use]
    pub fn location_for(&self, key: &OutputKey) -> PathBuf {
        let digest = Sha256::digest(key.canonical().as_bytes());
        let hex: String = digest
            .iter()
            .take(DIGEST_PREFIX_BYTES)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        self.root.join(key.name()).join(hex)
    }
}

impl OutputProvider for ContentAddressedOutputs {
    fn content_location(&self, key: &OutputKey) -> Result<PathBuf, WeaveError> {
        let location = self.location_for(key);
        fs::create_dir_all(&location).map_err(|source| WeaveError::Output {
            path: location.clone(),
            source: Arc::new(source),
        })?;
        debug!(
            target: OUTPUT_TARGET,
            key = %key.canonical(),
            path = %location.display(),
            "allocated output directory"
        );
        Ok(location)
    }
}
