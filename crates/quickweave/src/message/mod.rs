//! Diagnostics emitted by the weaving compiler.
//!
//! The compiler ranks its message kinds on a single scale. [`MessageKind`]
//! mirrors that scale in declaration order, least severe first, so the derived
//! `Ord` is the severity order and thresholds compare by rank rather than by
//! equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a compiler message, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Join point match report produced by `-showWeaveInfo`.
    WeaveInfo,
    /// Progress and informational output.
    Info,
    /// Diagnostic detail for compiler developers.
    Debug,
    /// Task tag found in source comments.
    Task,
    /// Non-fatal problem.
    Warning,
    /// Compilation or weaving error.
    Error,
    /// Internal compiler failure.
    Fail,
    /// The compiler gave up.
    Abort,
}

impl MessageKind {
    /// All kinds, least severe first.
    pub const ALL: [Self; 8] = [
        Self::WeaveInfo,
        Self::Info,
        Self::Debug,
        Self::Task,
        Self::Warning,
        Self::Error,
        Self::Fail,
        Self::Abort,
    ];

    /// Returns whether this kind is the same as or more severe than `threshold`.
    ///
    /// # Example
    ///
    /// ```
    /// use quickweave::message::MessageKind;
    ///
    /// assert!(MessageKind::Abort.is_at_least(MessageKind::Error));
    /// assert!(!MessageKind::Task.is_at_least(MessageKind::Warning));
    /// ```
    #[must_use]
    pub fn is_at_least(self, threshold: Self) -> bool {
        self >= threshold
    }

    /// Label the compiler prints for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeaveInfo => "weaveinfo",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Task => "task",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fail => "fail",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when text names no known message kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message kind '{0}'")]
pub struct UnknownMessageKind(pub String);

impl FromStr for MessageKind {
    type Err = UnknownMessageKind;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| UnknownMessageKind(input.to_owned()))
    }
}

/// One diagnostic reported by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaveMessage {
    kind: MessageKind,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

impl WeaveMessage {
    /// Creates a message without cause detail.
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            cause: None,
        }
    }

    /// Attaches cause detail such as a stack trace.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Appends one line of cause detail.
    pub fn push_cause_line(&mut self, line: &str) {
        match self.cause.as_mut() {
            Some(cause) => {
                cause.push('\n');
                cause.push_str(line);
            }
            None => self.cause = Some(line.to_owned()),
        }
    }

    /// Severity kind.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Human-readable text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Cause detail, if the compiler supplied any.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}
