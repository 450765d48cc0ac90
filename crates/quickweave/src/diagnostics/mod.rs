//! Translates compiler diagnostics into build outcomes.
//!
//! Messages are consumed in the order the compiler emitted them. Each is
//! logged at the build level matching its rank; the first error-or-worse
//! message ends the reduction with a [`WeaveFailure`], so nothing after it is
//! ever logged.

use std::ops::ControlFlow;

use thiserror::Error;

use crate::logger::{BuildLevel, BuildLogger};
use crate::message::{MessageKind, WeaveMessage};

/// Outcome of a weave: a summary on success, the first fatal message otherwise.
pub type TransformResult = Result<WeaveSummary, WeaveFailure>;

/// Fatal compiler diagnostic that fails the build.
///
/// Displays as the compiler's own message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WeaveFailure {
    message: String,
    cause: Option<String>,
}

impl WeaveFailure {
    /// Creates a failure from message text and optional cause detail.
    #[must_use]
    pub fn new(message: impl Into<String>, cause: Option<String>) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// Text of the fatal message.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Cause detail attached to the fatal message.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl From<WeaveMessage> for WeaveFailure {
    fn from(message: WeaveMessage) -> Self {
        let cause = message.cause().map(str::to_owned);
        Self::new(message.text(), cause)
    }
}

/// Count of messages relayed per build level during a successful weave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaveSummary {
    /// Messages logged as warnings.
    pub warnings: usize,
    /// Messages logged as informational output.
    pub infos: usize,
    /// Messages logged at the lowest verbosity.
    pub debugs: usize,
}

impl WeaveSummary {
    const fn record(mut self, level: BuildLevel) -> Self {
        match level {
            BuildLevel::Warn => self.warnings += 1,
            BuildLevel::Info => self.infos += 1,
            BuildLevel::Debug => self.debugs += 1,
            BuildLevel::Error => {}
        }
        self
    }

    /// Total messages relayed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.warnings + self.infos + self.debugs
    }
}

/// Maps a message kind onto the build log level.
///
/// Thresholds are checked from the most severe down, each as "same or more
/// severe", so intermediate kinds such as `task` or `fail` are never dropped.
#[must_use]
pub fn build_level(kind: MessageKind) -> BuildLevel {
    if kind.is_at_least(MessageKind::Error) {
        BuildLevel::Error
    } else if kind.is_at_least(MessageKind::Warning) {
        BuildLevel::Warn
    } else if kind.is_at_least(MessageKind::Debug) {
        BuildLevel::Info
    } else {
        BuildLevel::Debug
    }
}

/// Logs every message in order and stops at the first fatal one.
///
/// # Errors
///
/// Returns the first error-or-worse message as a [`WeaveFailure`] after it
/// has been logged as a build error.
///
/// # Example
///
/// ```
/// use quickweave::diagnostics::translate;
/// use quickweave::logger::TracingLogger;
/// use quickweave::message::{MessageKind, WeaveMessage};
///
/// let messages = vec![
///     WeaveMessage::new(MessageKind::Warning, "advice defined in Aspect has not been applied"),
///     WeaveMessage::new(MessageKind::WeaveInfo, "Join point 'method-execution(...)'"),
/// ];
/// let summary = translate(messages, &TracingLogger).expect("no fatal messages");
/// assert_eq!(summary.warnings, 1);
/// ```
pub fn translate<I>(messages: I, logger: &dyn BuildLogger) -> TransformResult
where
    I: IntoIterator<Item = WeaveMessage>,
{
    let outcome = messages
        .into_iter()
        .try_fold(WeaveSummary::default(), |summary, message| {
            let level = build_level(message.kind());
            logger.log(level, message.text(), message.cause());
            match level {
                BuildLevel::Error => ControlFlow::Break(WeaveFailure::from(message)),
                other => ControlFlow::Continue(summary.record(other)),
            }
        });

    match outcome {
        ControlFlow::Continue(summary) => Ok(summary),
        ControlFlow::Break(failure) => Err(failure),
    }
}
