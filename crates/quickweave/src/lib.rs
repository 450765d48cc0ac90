//! Build-time aspect weaving for compiled Android classes.
//!
//! The `quickweave` crate implements the weave transform that a host build
//! runs after compilation. It decides which inputs the weaving compiler
//! rewrites and which it only resolves against, builds the compiler's argument
//! vector, runs the compiler, and turns the compiler's diagnostics into build
//! log output and, on error, a build failure.
//!
//! # Architecture
//!
//! Four stages run in sequence for every build step:
//!
//! 1. [`collector`] partitions the host's [`InputSet`] using a
//!    [`RelevantArchiveFilter`].
//! 2. [`invocation`] assembles the [`CompilerInvocation`].
//! 3. A [`WeaverInvoker`] runs the compiler; [`AjcProcessInvoker`] does so
//!    in a child process.
//! 4. [`diagnostics`] relays each message to a [`BuildLogger`] and stops at
//!    the first error.
//!
//! [`WeaveTransform`] ties the stages together. [`module`] describes how the
//! transform is registered with a host Android module.
//!
//! # Example
//!
//! ```rust,no_run
//! use quickweave::{
//!     AjcProcessInvoker, BuildInput, ContentAddressedOutputs, InputSet, Scope, TracingLogger,
//!     TransformInvocation, WeaveTransform,
//! };
//!
//! let transform = WeaveTransform::new(
//!     AjcProcessInvoker::new("ajc"),
//!     ContentAddressedOutputs::new("/out/transforms/quickweave"),
//! );
//! let inputs = InputSet::new(
//!     vec![BuildInput::directory("/out/classes", Scope::Project)],
//!     vec![BuildInput::archive("/libs/aspectjrt-1.8.13.jar", Scope::ExternalLibrary)],
//! );
//! let invocation = TransformInvocation::new(inputs, vec!["/sdk/android.jar".into()]);
//! let summary = transform.transform(&invocation, &TracingLogger).expect("weave succeeds");
//! println!("{} warnings", summary.warnings);
//! ```

pub mod collector;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod input;
pub mod invocation;
pub mod invoker;
pub mod logger;
pub mod message;
pub mod module;
pub mod output;
pub mod process;
pub mod transform;

#[cfg(test)]
mod tests;

pub use self::diagnostics::{TransformResult, WeaveFailure, WeaveSummary};
pub use self::error::WeaveError;
pub use self::host::{BuildDescription, BuildDescriptionError};
pub use self::input::{BuildInput, InputKind, InputSet, RelevantArchiveFilter, Scope};
pub use self::invocation::{CompilerInvocation, LanguageLevels};
pub use self::invoker::WeaverInvoker;
pub use self::logger::{BuildLevel, BuildLogger, TracingLogger};
pub use self::message::{MessageKind, WeaveMessage};
pub use self::module::{ConfigurationError, ModuleKind, PluginVariant, Registration};
pub use self::output::{ContentAddressedOutputs, OutputProvider};
pub use self::process::AjcProcessInvoker;
pub use self::transform::{TransformDescriptor, TransformInvocation, WeaveTransform};
