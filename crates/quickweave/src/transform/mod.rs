//! The weave transform: collect, build, invoke, translate.
//!
//! [`WeaveTransform`] is what the host registers in its build pipeline. Each
//! run recomputes everything from the inputs it is handed; the incremental
//! flag in the [`TransformDescriptor`] is only a hint to the host.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::collector::collect;
use crate::diagnostics::{WeaveSummary, translate};
use crate::error::WeaveError;
use crate::input::{InputSet, RelevantArchiveFilter, Scope};
use crate::invocation::{LanguageLevels, build_invocation};
use crate::invoker::WeaverInvoker;
use crate::logger::BuildLogger;
use crate::output::{ContentType, Format, OutputKey, OutputProvider};

const TRANSFORM_TARGET: &str = "quickweave::transform";

/// Name under which the transform is registered.
pub const TRANSFORM_NAME: &str = "QuickPermissions";

/// Name of the single output the transform produces.
pub const OUTPUT_NAME: &str = "main";

/// Identity and declared capabilities of the transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformDescriptor {
    name: String,
    input_types: Vec<ContentType>,
    scopes: Vec<Scope>,
    referenced_scopes: Vec<Scope>,
    incremental: bool,
}

impl Default for TransformDescriptor {
    fn default() -> Self {
        Self {
            name: TRANSFORM_NAME.to_owned(),
            input_types: vec![ContentType::Classes],
            scopes: vec![Scope::Project, Scope::ExternalLibrary],
            referenced_scopes: vec![Scope::SubProject, Scope::ExternalLibrary],
            incremental: true,
        }
    }
}

impl TransformDescriptor {
    /// Transform name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Content consumed by the transform.
    #[must_use]
    pub fn input_types(&self) -> &[ContentType] {
        &self.input_types
    }

    /// Scopes whose inputs the transform processes.
    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Scopes whose inputs are visible for resolution only.
    #[must_use]
    pub fn referenced_scopes(&self) -> &[Scope] {
        &self.referenced_scopes
    }

    /// Whether the host may treat the transform as incremental.
    #[must_use]
    pub const fn is_incremental(&self) -> bool {
        self.incremental
    }

    /// Key of the directory the woven classes are written to.
    #[must_use]
    pub fn output_key(&self) -> OutputKey {
        OutputKey::new(
            OUTPUT_NAME,
            self.input_types.clone(),
            vec![Scope::Project],
            Format::Directory,
        )
    }
}

/// Per-run data supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformInvocation {
    inputs: InputSet,
    boot_classpath: Vec<PathBuf>,
}

impl TransformInvocation {
    /// Creates an invocation from the host's inputs and boot classpath.
    #[must_use]
    pub const fn new(inputs: InputSet, boot_classpath: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            boot_classpath,
        }
    }

    /// Inputs for this run.
    #[must_use]
    pub const fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Platform boot classpath.
    #[must_use]
    pub fn boot_classpath(&self) -> &[PathBuf] {
        &self.boot_classpath
    }
}

/// Weaves compiled classes through an external compiler.
///
/// # Example
///
/// ```no_run
/// use quickweave::input::{BuildInput, InputSet, Scope};
/// use quickweave::invocation::LanguageLevels;
/// use quickweave::logger::TracingLogger;
/// use quickweave::output::ContentAddressedOutputs;
/// use quickweave::process::AjcProcessInvoker;
/// use quickweave::transform::{TransformInvocation, WeaveTransform};
///
/// let transform = WeaveTransform::new(
///     AjcProcessInvoker::new("ajc"),
///     ContentAddressedOutputs::new("/out/transforms/quickweave"),
/// )
/// .with_levels(LanguageLevels::new("1.7", "1.7"));
///
/// let inputs = InputSet::new(vec![BuildInput::directory("/out/classes", Scope::Project)], vec![]);
/// let invocation = TransformInvocation::new(inputs, vec!["/sdk/android.jar".into()]);
/// transform.transform(&invocation, &TracingLogger).expect("weave succeeds");
/// ```
#[derive(Debug)]
pub struct WeaveTransform<I, O> {
    descriptor: TransformDescriptor,
    levels: LanguageLevels,
    filter: RelevantArchiveFilter,
    invoker: I,
    outputs: O,
}

impl<I, O> WeaveTransform<I, O> {
    /// Creates a transform with the default descriptor, language levels and
    /// archive filter.
    #[must_use]
    pub fn new(invoker: I, outputs: O) -> Self {
        Self {
            descriptor: TransformDescriptor::default(),
            levels: LanguageLevels::default(),
            filter: RelevantArchiveFilter::default(),
            invoker,
            outputs,
        }
    }

    /// Replaces the language levels.
    #[must_use]
    pub fn with_levels(mut self, levels: LanguageLevels) -> Self {
        self.levels = levels;
        self
    }

    /// Replaces the archive filter.
    #[must_use]
    pub fn with_filter(mut self, filter: RelevantArchiveFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Declared identity of the transform.
    #[must_use]
    pub const fn descriptor(&self) -> &TransformDescriptor {
        &self.descriptor
    }

    /// Archive filter in use.
    #[must_use]
    pub const fn filter(&self) -> &RelevantArchiveFilter {
        &self.filter
    }
}

impl<I: WeaverInvoker, O: OutputProvider> WeaveTransform<I, O> {
    /// Runs one weave over the supplied inputs.
    ///
    /// The compiler runs even when nothing needs weaving so the output
    /// directory always exists afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::Compiler`] with the compiler's own message when
    /// it reports an error, or any error raised while allocating the output
    /// directory, building the arguments, or starting the compiler.
    pub fn transform(
        &self,
        invocation: &TransformInvocation,
        logger: &dyn BuildLogger,
    ) -> Result<WeaveSummary, WeaveError> {
        let paths = collect(invocation.inputs(), &self.filter);
        let output_dir = self.outputs.content_location(&self.descriptor.output_key())?;
        let compiler_invocation = build_invocation(
            &paths,
            invocation.boot_classpath(),
            &output_dir,
            &self.levels,
        )?;

        info!(
            target: TRANSFORM_TARGET,
            transform = self.descriptor.name(),
            to_weave = paths.to_weave().len(),
            classpath = paths.classpath_only().len(),
            output = %compiler_invocation.output_dir().display(),
            "weaving classes"
        );

        let messages = self.invoker.invoke(&compiler_invocation)?;
        let summary = translate(messages, logger)?;

        info!(
            target: TRANSFORM_TARGET,
            transform = self.descriptor.name(),
            warnings = summary.warnings,
            messages = summary.total(),
            "weave complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests;
