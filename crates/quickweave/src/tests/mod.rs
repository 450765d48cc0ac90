//! Crate-level test support and behaviour tests.

use std::cell::RefCell;

use mockall::mock;

use crate::error::WeaveError;
use crate::invocation::CompilerInvocation;
use crate::invoker::WeaverInvoker;
use crate::logger::{BuildLevel, BuildLogger};
use crate::message::WeaveMessage;


mock! {
    pub Weaver {}
    impl WeaverInvoker for Weaver {
        fn invoke(&self, invocation: &CompilerInvocation) -> Result<Vec<WeaveMessage>, WeaveError>;
    }
}

/// One line captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogEntry {
    pub(crate) level: BuildLevel,
    pub(crate) message: String,
    pub(crate) cause: Option<String>,
}

impl LogEntry {
    pub(crate) fn new(level: BuildLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_owned(),
            cause: None,
        }
    }
}

/// Logger that remembers everything it was asked to log.
#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub(crate) fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    fn record(&self, level: BuildLevel, message: &str, cause: Option<&str>) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_owned(),
            cause: cause.map(str::to_owned),
        });
    }
}

impl BuildLogger for RecordingLogger {
    fn error(&self, message: &str, cause: Option<&str>) {
        self.record(BuildLevel::Error, message, cause);
    }

    fn warn(&self, message: &str) {
        self.record(BuildLevel::Warn, message, None);
    }

    fn info(&self, message: &str) {
        self.record(BuildLevel::Info, message, None);
    }

    fn debug(&self, message: &str) {
        self.record(BuildLevel::Debug, message, None);
    }
}
