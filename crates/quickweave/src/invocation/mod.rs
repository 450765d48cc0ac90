//! Builds the argument vector for the weaving compiler.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::collector::CollectedPaths;
use crate::error::WeaveError;

/// Language level used when none is configured.
pub const DEFAULT_LANGUAGE_LEVEL: &str = "1.7";

/// Source and target language levels passed to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLevels {
    source: String,
    target: String,
}

impl Default for LanguageLevels {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_LEVEL, DEFAULT_LANGUAGE_LEVEL)
    }
}

impl LanguageLevels {
    /// Creates language levels.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Level for `-source`.
    #[must_use]
    pub const fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Level for `-target`.
    #[must_use]
    pub const fn target(&self) -> &str {
        self.target.as_str()
    }
}

/// Ordered compiler arguments and the directory they write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    args: Vec<OsString>,
    output_dir: PathBuf,
}

impl CompilerInvocation {
    /// Argument vector, without the program name.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Absolute output directory passed through `-d`.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    /// Returns the value following `flag`, if the flag is present.
    #[must_use]
    pub fn value_of(&self, flag: &str) -> Option<&OsString> {
        self.args
            .iter()
            .position(|arg| arg == flag)
            .and_then(|index| self.args.get(index + 1))
    }
}

/// Assembles the compiler arguments for one weave.
///
/// The result is `-verbose -source L -target L -showWeaveInfo -inpath P
/// -d DIR -bootclasspath P`, followed by `-classpath P` only when there are
/// classpath entries. An empty weave set still yields an invocation with an
/// empty `-inpath` value.
///
/// # Errors
///
/// Returns [`WeaveError::JoinPaths`] when an entry contains the platform path
/// separator and [`WeaveError::AbsolutePath`] when an entry cannot be made
/// absolute.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use quickweave::collector::collect;
/// use quickweave::input::{BuildInput, InputSet, RelevantArchiveFilter, Scope};
/// use quickweave::invocation::{build_invocation, LanguageLevels};
///
/// let inputs = InputSet::new(vec![BuildInput::directory("/out/classes", Scope::Project)], vec![]);
/// let paths = collect(&inputs, &RelevantArchiveFilter::default());
/// let invocation = build_invocation(
///     &paths,
///     &[],
///     Path::new("/out/woven"),
///     &LanguageLevels::new("1.7", "1.7"),
/// )
/// .expect("paths join");
/// assert!(invocation.value_of("-classpath").is_none());
/// ```
pub fn build_invocation(
    paths: &CollectedPaths,
    boot_classpath: &[PathBuf],
    output_dir: &Path,
    levels: &LanguageLevels,
) -> Result<CompilerInvocation, WeaveError> {
    let inpath = join("-inpath", paths.to_weave())?;
    let output_dir = absolute(output_dir)?;
    let bootpath = join("-bootclasspath", boot_classpath)?;
    let classpath_entries = paths
        .classpath_only()
        .iter()
        .map(|path| absolute(path))
        .collect::<Result<Vec<_>, _>>()?;
    let classpath = join("-classpath", &classpath_entries)?;

    let mut args: Vec<OsString> = vec![
        "-verbose".into(),
        "-source".into(),
        levels.source().into(),
        "-target".into(),
        levels.target().into(),
        "-showWeaveInfo".into(),
        "-inpath".into(),
        inpath,
        "-d".into(),
        output_dir.clone().into_os_string(),
        "-bootclasspath".into(),
        bootpath,
    ];

    if !classpath.is_empty() {
        args.push("-classpath".into());
        args.push(classpath);
    }

    Ok(CompilerInvocation { args, output_dir })
}

fn join(argument: &'static str, paths: &[PathBuf]) -> Result<OsString, WeaveError> {
    env::join_paths(paths).map_err(|source| WeaveError::JoinPaths { argument, source })
}

fn absolute(path: &Path) -> Result<PathBuf, WeaveError> {
    std::path::absolute(path).map_err(|source| WeaveError::AbsolutePath {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })
}

#[cfg(test)]
mod tests;
