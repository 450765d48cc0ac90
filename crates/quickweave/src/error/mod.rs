//! Domain errors raised by the weave transform.
//!
//! Compiler-reported failures are carried as [`WeaveFailure`] and displayed
//! verbatim so the build aborts with the compiler's own words. I/O errors are
//! wrapped in `Arc` to satisfy the `result_large_err` Clippy lint.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::diagnostics::WeaveFailure;

/// Errors arising while running the weave transform.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// The compiler reported an error-or-worse diagnostic.
    #[error(transparent)]
    Compiler(#[from] WeaveFailure),

    /// The compiler process could not be started.
    #[error("failed to start weaver '{program}': {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The compiler's console output could not be captured.
    #[error("failed to read output of weaver '{program}': {source}")]
    Capture {
        /// Program whose output was being read.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The output location could not be prepared.
    #[error("failed to prepare output directory {}: {source}", .path.display())]
    Output {
        /// Directory that was being created or resolved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A path could not be made absolute.
    #[error("cannot resolve absolute path for {}: {source}", .path.display())]
    AbsolutePath {
        /// Path that was being resolved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A path list could not be joined with the platform separator.
    #[error("cannot build {argument} path list: {source}")]
    JoinPaths {
        /// Compiler argument the list was meant for.
        argument: &'static str,
        /// Underlying join error.
        #[source]
        source: std::env::JoinPathsError,
    },
}

#[cfg(test)]
mod tests;
