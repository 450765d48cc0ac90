//! Process-based compiler execution.
//!
//! [`AjcProcessInvoker`] launches the weaving compiler as a child process,
//! blocks until it exits, and parses its console output into
//! [`WeaveMessage`]s. Standard output and standard error share one pipe so
//! messages keep the order the compiler wrote them in.
//!
//! The compiler prints one message per line, tagged either with a leading
//! kind word (`warning`, `abort`, ...) or a bracketed kind
//! (`Foo.java:3 [error] ...`). Indented lines continue the previous message
//! and become its cause detail.

use std::ffi::OsString;
use std::io::{self, PipeReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::WeaveError;
use crate::invocation::CompilerInvocation;
use crate::invoker::WeaverInvoker;
use crate::message::{MessageKind, WeaveMessage};

/// Tracing target for compiler process operations.
const PROCESS_TARGET: &str = "quickweave::process";

/// Entry point class of the compiler inside `aspectjtools.jar`.
pub const AJC_MAIN_CLASS: &str = "org.aspectj.tools.ajc.Main";

/// Runs the weaving compiler as a child process.
///
/// # Example
///
/// ```
/// use quickweave::process::AjcProcessInvoker;
///
/// let direct = AjcProcessInvoker::new("ajc");
/// assert_eq!(direct.program(), "ajc");
///
/// let hosted = AjcProcessInvoker::jvm("java", "/opt/aspectj/lib/aspectjtools.jar");
/// assert_eq!(hosted.leading_args().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjcProcessInvoker {
    program: OsString,
    leading_args: Vec<OsString>,
}

impl AjcProcessInvoker {
    /// Runs `program` directly with the compiler arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Runs the compiler main class from `tools_jar` on the given JVM launcher.
    #[must_use]
    pub fn jvm(java: impl Into<OsString>, tools_jar: impl Into<OsString>) -> Self {
        Self::new(java).with_leading_args([
            OsString::from("-cp"),
            tools_jar.into(),
            OsString::from(AJC_MAIN_CLASS),
        ])
    }

    /// Adds arguments placed before the compiler arguments.
    #[must_use]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program that is launched.
    #[must_use]
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Arguments placed before the compiler arguments.
    #[must_use]
    pub fn leading_args(&self) -> &[OsString] {
        &self.leading_args
    }

    fn program_label(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl AjcProcessInvoker {
    /// Starts the compiler with both output streams feeding one pipe.
    fn spawn(&self, invocation: &CompilerInvocation) -> io::Result<(Child, PipeReader)> {
        let (reader, writer) = io::pipe()?;
        let error_writer = writer.try_clone()?;
        // The command owns the write ends; it is dropped on return so the
        // reader sees end of file once the compiler exits.
        let child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(error_writer)
            .spawn()?;
        Ok((child, reader))
    }
}

impl WeaverInvoker for AjcProcessInvoker {
    fn invoke(&self, invocation: &CompilerInvocation) -> Result<Vec<WeaveMessage>, WeaveError> {
        let program = self.program_label();

        debug!(
            target: PROCESS_TARGET,
            program = %program,
            args = invocation.args().len(),
            output = %invocation.output_dir().display(),
            "spawning weaver process"
        );

        let start = Instant::now();
        let (mut child, mut reader) = self.spawn(invocation).map_err(|source| WeaveError::Spawn {
            program: program.clone(),
            source: Arc::new(source),
        })?;

        let capture_error = |source| WeaveError::Capture {
            program: program.clone(),
            source: Arc::new(source),
        };
        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait().map_err(capture_error)?;
        read.map_err(capture_error)?;

        debug!(
            target: PROCESS_TARGET,
            program = %program,
            status = ?status,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "weaver process exited"
        );

        let console = String::from_utf8_lossy(&raw);
        Ok(collect_messages(&program, &console, status))
    }
}

/// Converts the captured console output into the ordered message list.
fn collect_messages(program: &str, console: &str, status: ExitStatus) -> Vec<WeaveMessage> {
    let mut messages = parse_messages(console);

    let reported_fatal = messages
        .iter()
        .any(|message| message.kind().is_at_least(MessageKind::Error));
    if !status.success() && !reported_fatal {
        let status = status
            .code()
            .map_or_else(|| String::from("a signal"), |code| format!("status {code}"));
        warn!(
            target: PROCESS_TARGET,
            program,
            %status,
            "weaver failed without reporting an error"
        );
        messages.push(WeaveMessage::new(
            MessageKind::Abort,
            format!("weaver '{program}' exited with {status}"),
        ));
    }
    messages
}

/// Parses compiler console output into messages, preserving order.
///
/// # Example
///
/// ```
/// use quickweave::message::MessageKind;
/// use quickweave::process::parse_messages;
///
/// let messages = parse_messages("Foo.java:3 [warning] unused import\n\timport java.util.List;\n");
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].kind(), MessageKind::Warning);
/// assert_eq!(messages[0].cause(), Some("import java.util.List;"));
/// ```
#[must_use]
pub fn parse_messages(text: &str) -> Vec<WeaveMessage> {
    let mut messages: Vec<WeaveMessage> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let continuation = is_continuation(line);
        if !continuation {
            if let Some(message) = tagged(trimmed) {
                messages.push(message);
                continue;
            }
        }
        // Untagged lines after a compiler failure are its stack trace.
        if let Some(previous) = messages.last_mut() {
            if continuation || previous.kind().is_at_least(MessageKind::Fail) {
                previous.push_cause_line(trimmed);
                continue;
            }
        }
        messages.push(WeaveMessage::new(MessageKind::Info, trimmed));
    }
    messages
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) || line.trim_start().starts_with('^')
}

fn tagged(line: &str) -> Option<WeaveMessage> {
    bracketed(line).or_else(|| leading_word(line))
}

/// Handles `context [kind] text` lines.
fn bracketed(line: &str) -> Option<WeaveMessage> {
    let open = line.find('[')?;
    let (context, rest) = line.split_at(open);
    let close = rest.find(']')?;
    let kind = rest.get(1..close)?.parse::<MessageKind>().ok()?;
    let text = rest.get(close + 1..).unwrap_or_default().trim();
    let context = context.trim();
    let text = if context.is_empty() {
        text.to_owned()
    } else {
        format!("{context} {text}")
    };
    Some(WeaveMessage::new(kind, text))
}

/// Handles `kind text` and `kind: text` lines.
fn leading_word(line: &str) -> Option<WeaveMessage> {
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let kind = word.trim_end_matches(':').parse::<MessageKind>().ok()?;
    Some(WeaveMessage::new(kind, rest.trim()))
}
