//! Unit tests for the invocation builder.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rstest::{fixture, rstest};

use super::*;
use crate::collector::collect;
use crate::input::{BuildInput, InputSet, RelevantArchiveFilter, Scope};

#[fixture]
fn levels() -> LanguageLevels {
    LanguageLevels::new("1.7", "1.7")
}

fn paths_for(inputs: Vec<BuildInput>, referenced: Vec<BuildInput>) -> CollectedPaths {
    collect(
        &InputSet::new(inputs, referenced),
        &RelevantArchiveFilter::default(),
    )
}

fn joined(paths: &[&str]) -> OsString {
    env::join_paths(paths.iter().map(PathBuf::from)).expect("join")
}

#[rstest]
fn emits_fixed_flags_in_order(levels: LanguageLevels) {
    let paths = paths_for(
        vec![
            BuildInput::directory("/out/classes", Scope::Project),
            BuildInput::directory("/out/kotlin", Scope::Project),
        ],
        vec![],
    );
    let boot = vec![PathBuf::from("/sdk/android.jar"), PathBuf::from("/sdk/optional.jar")];

    let invocation =
        build_invocation(&paths, &boot, Path::new("/out/woven"), &levels).expect("build");

    let expected: Vec<OsString> = vec![
        "-verbose".into(),
        "-source".into(),
        "1.7".into(),
        "-target".into(),
        "1.7".into(),
        "-showWeaveInfo".into(),
        "-inpath".into(),
        joined(&["/out/classes", "/out/kotlin"]),
        "-d".into(),
        "/out/woven".into(),
        "-bootclasspath".into(),
        joined(&["/sdk/android.jar", "/sdk/optional.jar"]),
    ];
    assert_eq!(invocation.args(), expected.as_slice());
    assert_eq!(invocation.output_dir(), Path::new("/out/woven"));
}

#[rstest]
fn classpath_present_only_when_non_empty(levels: LanguageLevels) {
    let without = paths_for(vec![BuildInput::directory("/out/classes", Scope::Project)], vec![]);
    let with = paths_for(
        vec![BuildInput::directory("/out/classes", Scope::Project)],
        vec![BuildInput::archive("/libs/aspectjrt-1.8.13.jar", Scope::ExternalLibrary)],
    );

    let bare = build_invocation(&without, &[], Path::new("/out/woven"), &levels).expect("build");
    let full = build_invocation(&with, &[], Path::new("/out/woven"), &levels).expect("build");

    assert!(bare.value_of("-classpath").is_none());
    assert_eq!(
        full.value_of("-classpath"),
        Some(&OsString::from("/libs/aspectjrt-1.8.13.jar"))
    );
    assert_eq!(full.args().last(), Some(&OsString::from("/libs/aspectjrt-1.8.13.jar")));
}

#[rstest]
fn empty_weave_set_keeps_empty_inpath(levels: LanguageLevels) {
    let paths = CollectedPaths::default();
    let invocation =
        build_invocation(&paths, &[], Path::new("/out/woven"), &levels).expect("build");
    assert_eq!(invocation.value_of("-inpath"), Some(&OsString::new()));
    assert_eq!(invocation.value_of("-d"), Some(&OsString::from("/out/woven")));
}

#[rstest]
fn relative_paths_become_absolute(levels: LanguageLevels) {
    let paths = paths_for(
        vec![],
        vec![BuildInput::archive("aspectjrt-1.8.13.jar", Scope::ExternalLibrary)],
    );
    let invocation =
        build_invocation(&paths, &[], Path::new("build/woven"), &levels).expect("build");

    let cwd = env::current_dir().expect("cwd");
    assert_eq!(invocation.output_dir(), cwd.join("build/woven"));
    assert_eq!(
        invocation.value_of("-classpath"),
        Some(&cwd.join("aspectjrt-1.8.13.jar").into_os_string())
    );
}

#[rstest]
fn language_levels_are_configurable() {
    let paths = CollectedPaths::default();
    let invocation = build_invocation(
        &paths,
        &[],
        Path::new("/out/woven"),
        &LanguageLevels::new("1.8", "1.6"),
    )
    .expect("build");
    assert_eq!(invocation.value_of("-source"), Some(&OsString::from("1.8")));
    assert_eq!(invocation.value_of("-target"), Some(&OsString::from("1.6")));
}

#[cfg(unix)]
#[rstest]
fn separator_inside_a_path_is_rejected(levels: LanguageLevels) {
    let paths = paths_for(vec![BuildInput::directory("/out/a:b", Scope::Project)], vec![]);
    let error = build_invocation(&paths, &[], Path::new("/out/woven"), &levels)
        .expect_err("separator cannot be joined");
    assert!(matches!(error, WeaveError::JoinPaths { argument: "-inpath", .. }));
}
