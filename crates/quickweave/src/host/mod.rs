//! JSON description of one build step, as written by the host build.
//!
//! The host lists its inputs, the platform boot classpath, and the root under
//! which this transform may allocate output:
//!
//! ```json
//! {
//!   "inputs": [{ "path": "/out/classes", "kind": "directory", "scope": "project" }],
//!   "referenced": [{ "path": "/libs/aspectjrt-1.8.13.jar", "kind": "archive", "scope": "external_library" }],
//!   "boot_classpath": ["/sdk/android.jar"],
//!   "output_root": "/out/transforms/quickweave"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputSet;
use crate::output::ContentAddressedOutputs;
use crate::transform::TransformInvocation;

/// Errors raised while reading a build description.
#[derive(Debug, Error)]
pub enum BuildDescriptionError {
    /// The description file could not be read.
    #[error("failed to read build description {}: {source}", .path.display())]
    Read {
        /// Description file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
    /// The description is not valid JSON of the expected shape.
    #[error("invalid build description {}: {source}", .path.display())]
    Parse {
        /// Description file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Host-supplied inputs and output root for one transform run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescription {
    #[serde(flatten)]
    inputs: InputSet,
    #[serde(default)]
    boot_classpath: Vec<PathBuf>,
    output_root: PathBuf,
}

impl BuildDescription {
    /// Creates a description.
    #[must_use]
    pub fn new(
        inputs: InputSet,
        boot_classpath: Vec<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inputs,
            boot_classpath,
            output_root: output_root.into(),
        }
    }

    /// Reads a description from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildDescriptionError`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, BuildDescriptionError> {
        let text = fs::read_to_string(path).map_err(|source| BuildDescriptionError::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        serde_json::from_str(&text).map_err(|source| BuildDescriptionError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Root under which outputs are allocated.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        self.output_root.as_path()
    }

    /// Output provider rooted at [`Self::output_root`].
    #[must_use]
    pub fn outputs(&self) -> ContentAddressedOutputs {
        ContentAddressedOutputs::new(self.output_root.clone())
    }

    /// Splits the description into the per-run invocation.
    #[must_use]
    pub fn into_invocation(self) -> TransformInvocation {
        TransformInvocation::new(self.inputs, self.boot_classpath)
    }
}

#[cfg(test)]
mod tests;
