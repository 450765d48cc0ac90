//! Partitions build inputs into weave targets and classpath context.
//!
//! Directories always belong to the build and are kept. Archives drag in the
//! whole transitive dependency graph, so only the ones selected by the
//! [`RelevantArchiveFilter`] survive. Host order is preserved: the result
//! feeds a separator-joined argument, and a stable argument keeps the host's
//! caching effective.

use std::path::PathBuf;

use tracing::debug;

use crate::input::{BuildInput, InputKind, InputSet, RelevantArchiveFilter};

const COLLECTOR_TARGET: &str = "quickweave::collector";

/// Paths chosen for one compiler invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedPaths {
    to_weave: Vec<PathBuf>,
    classpath_only: Vec<PathBuf>,
}

impl CollectedPaths {
    /// Inputs the compiler rewrites.
    #[must_use]
    pub fn to_weave(&self) -> &[PathBuf] {
        &self.to_weave
    }

    /// Inputs the compiler only resolves against.
    #[must_use]
    pub fn classpath_only(&self) -> &[PathBuf] {
        &self.classpath_only
    }
}

/// Collects the weave targets and classpath entries from an input set.
///
/// # Example
///
/// ```
/// use quickweave::collector::collect;
/// use quickweave::input::{BuildInput, InputSet, RelevantArchiveFilter, Scope};
///
/// let inputs = InputSet::new(
///     vec![BuildInput::directory("/out/classes", Scope::Project)],
///     vec![BuildInput::archive("/libs/gson-2.8.jar", Scope::ExternalLibrary)],
/// );
/// let paths = collect(&inputs, &RelevantArchiveFilter::default());
/// assert_eq!(paths.to_weave().len(), 1);
/// assert!(paths.classpath_only().is_empty());
/// ```
#[must_use]
pub fn collect(inputs: &InputSet, filter: &RelevantArchiveFilter) -> CollectedPaths {
    let to_weave = select(inputs.inputs(), filter, "input");
    let classpath_only = select(inputs.referenced(), filter, "referenced");
    debug!(
        target: COLLECTOR_TARGET,
        to_weave = to_weave.len(),
        classpath_only = classpath_only.len(),
        "collected weaving paths"
    );
    CollectedPaths {
        to_weave,
        classpath_only,
    }
}

fn select(group: &[BuildInput], filter: &RelevantArchiveFilter, label: &str) -> Vec<PathBuf> {
    group
        .iter()
        .filter(|input| accept(input, filter, label))
        .map(|input| input.path().to_path_buf())
        .collect()
}

fn accept(input: &BuildInput, filter: &RelevantArchiveFilter, label: &str) -> bool {
    let accepted = match input.kind() {
        InputKind::Directory => true,
        InputKind::Archive => filter.matches(input.name()),
    };
    debug!(
        target: COLLECTOR_TARGET,
        group = label,
        kind = ?input.kind(),
        scope = input.scope().as_str(),
        path = %input.path().display(),
        accepted,
        "classified build input"
    );
    accepted
}
