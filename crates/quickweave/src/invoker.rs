//! Seam between the transform and the weaving compiler.

use crate::error::WeaveError;
use crate::invocation::CompilerInvocation;
use crate::message::WeaveMessage;

/// Runs the weaving compiler and returns every message it emitted.
///
/// The production implementation is
/// [`AjcProcessInvoker`](crate::process::AjcProcessInvoker). Compiler-reported
/// problems come back in the message list; only a failure to run the
/// compiler at all is an `Err`.
///
/// # Example
///
/// ```
/// use quickweave::invocation::CompilerInvocation;
/// use quickweave::invoker::WeaverInvoker;
/// use quickweave::message::WeaveMessage;
/// use quickweave::WeaveError;
///
/// struct SilentWeaver;
///
/// impl WeaverInvoker for SilentWeaver {
///     fn invoke(
///         &self,
///         _invocation: &CompilerInvocation,
///     ) -> Result<Vec<WeaveMessage>, WeaveError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait WeaverInvoker {
    /// Runs the compiler to completion with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`WeaveError`] if the compiler cannot be started or its
    /// output cannot be collected.
    fn invoke(&self, invocation: &CompilerInvocation) -> Result<Vec<WeaveMessage>, WeaveError>;
}
