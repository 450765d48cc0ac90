//! Logging sink through which the transform reports to the host build.
//!
//! Components receive a [`BuildLogger`] instead of writing to ambient output.
//! [`TracingLogger`] forwards to `tracing`, which the binary routes to stderr.

use tracing::{debug, error, info, warn};

/// Tracing target for compiler diagnostics relayed to the build.
const WEAVER_TARGET: &str = "quickweave::weaver";

/// Build log levels, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildLevel {
    /// Build error; the step fails.
    Error,
    /// Build warning.
    Warn,
    /// Informational output.
    Info,
    /// Lowest verbosity.
    Debug,
}

/// Sink for build-level log output.
pub trait BuildLogger {
    /// Reports a build error with optional cause detail.
    fn error(&self, message: &str, cause: Option<&str>);
    /// Reports a build warning.
    fn warn(&self, message: &str);
    /// Reports informational output.
    fn info(&self, message: &str);
    /// Reports low-verbosity output.
    fn debug(&self, message: &str);

    /// Dispatches a message to the method matching `level`.
    fn log(&self, level: BuildLevel, message: &str, cause: Option<&str>) {
        match level {
            BuildLevel::Error => self.error(message, cause),
            BuildLevel::Warn => self.warn(message),
            BuildLevel::Info => self.info(message),
            BuildLevel::Debug => self.debug(message),
        }
    }
}

/// Forwards build log output to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl BuildLogger for TracingLogger {
    fn error(&self, message: &str, cause: Option<&str>) {
        match cause {
            Some(cause) => error!(target: WEAVER_TARGET, cause, "{message}"),
            None => error!(target: WEAVER_TARGET, "{message}"),
        }
    }

    fn warn(&self, message: &str) {
        warn!(target: WEAVER_TARGET, "{message}");
    }

    fn info(&self, message: &str) {
        info!(target: WEAVER_TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: WEAVER_TARGET, "{message}");
    }
}
