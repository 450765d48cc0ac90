//! Unit tests for the weave transform.

use std::ffi::OsString;
use std::sync::Arc;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;
use crate::input::BuildInput;
use crate::message::{MessageKind, WeaveMessage};
use crate::output::ContentAddressedOutputs;
use crate::tests::{MockWeaver, RecordingLogger};

#[fixture]
fn output_root() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn transform(
    weaver: MockWeaver,
    root: &TempDir,
) -> WeaveTransform<MockWeaver, ContentAddressedOutputs> {
    WeaveTransform::new(weaver, ContentAddressedOutputs::new(root.path()))
}

fn scenario_invocation() -> TransformInvocation {
    TransformInvocation::new(
        InputSet::new(
            vec![BuildInput::directory("/out/classes", Scope::Project)],
            vec![
                BuildInput::archive("/libs/aspectjrt-1.8.13.jar", Scope::ExternalLibrary),
                BuildInput::archive("/libs/gson-2.8.jar", Scope::ExternalLibrary),
            ],
        ),
        vec![PathBuf::from("/sdk/android.jar")],
    )
}

#[test]
fn descriptor_declares_classes_and_scopes() {
    let descriptor = TransformDescriptor::default();
    assert_eq!(descriptor.name(), "QuickPermissions");
    assert_eq!(descriptor.input_types(), [ContentType::Classes]);
    assert_eq!(descriptor.scopes(), [Scope::Project, Scope::ExternalLibrary]);
    assert_eq!(
        descriptor.referenced_scopes(),
        [Scope::SubProject, Scope::ExternalLibrary]
    );
    assert!(descriptor.is_incremental());
}

#[rstest]
fn weaves_project_classes_against_relevant_archives(output_root: TempDir) {
    let mut weaver = MockWeaver::new();
    weaver
        .expect_invoke()
        .withf(|invocation| {
            invocation.value_of("-inpath") == Some(&OsString::from("/out/classes"))
                && invocation.value_of("-classpath")
                    == Some(&OsString::from("/libs/aspectjrt-1.8.13.jar"))
                && invocation.value_of("-bootclasspath")
                    == Some(&OsString::from("/sdk/android.jar"))
        })
        .times(1)
        .returning(|_| Ok(vec![WeaveMessage::new(MessageKind::WeaveInfo, "Join point")]));
    let logger = RecordingLogger::default();

    let summary = transform(weaver, &output_root)
        .transform(&scenario_invocation(), &logger)
        .expect("weave succeeds");

    assert_eq!(summary.debugs, 1);
}

#[rstest]
fn output_directory_comes_from_the_provider(output_root: TempDir) {
    let outputs = ContentAddressedOutputs::new(output_root.path());
    let expected = outputs.location_for(&TransformDescriptor::default().output_key());
    let mut weaver = MockWeaver::new();
    weaver
        .expect_invoke()
        .withf(move |invocation| invocation.output_dir() == expected)
        .times(1)
        .returning(|_| Ok(Vec::new()));

    WeaveTransform::new(weaver, outputs)
        .transform(&scenario_invocation(), &RecordingLogger::default())
        .expect("weave succeeds");
}

#[rstest]
fn empty_inputs_still_invoke_and_create_output(output_root: TempDir) {
    let mut weaver = MockWeaver::new();
    weaver
        .expect_invoke()
        .withf(|invocation| invocation.value_of("-inpath") == Some(&OsString::new()))
        .times(1)
        .returning(|invocation| {
            assert!(invocation.output_dir().is_dir(), "output must exist before weaving");
            Ok(Vec::new())
        });

    let summary = transform(weaver, &output_root)
        .transform(&TransformInvocation::default(), &RecordingLogger::default())
        .expect("empty weave succeeds");

    assert_eq!(summary.total(), 0);
}

#[rstest]
fn compiler_error_fails_with_its_own_text(output_root: TempDir) {
    let mut weaver = MockWeaver::new();
    weaver.expect_invoke().times(1).returning(|_| {
        Ok(vec![
            WeaveMessage::new(MessageKind::Warning, "no match for this type name: Permission"),
            WeaveMessage::new(MessageKind::Error, "Foo.java:3 Syntax error")
                .with_cause("@Permission("),
        ])
    });
    let logger = RecordingLogger::default();

    let error = transform(weaver, &output_root)
        .transform(&scenario_invocation(), &logger)
        .expect_err("compiler error fails the weave");

    assert_eq!(error.to_string(), "Foo.java:3 Syntax error");
    match error {
        WeaveError::Compiler(failure) => assert_eq!(failure.cause(), Some("@Permission(")),
        other => panic!("expected compiler failure, got {other:?}"),
    }
    assert_eq!(logger.entries().len(), 2);
}

#[rstest]
fn spawn_failure_is_propagated_unchanged(output_root: TempDir) {
    let mut weaver = MockWeaver::new();
    weaver.expect_invoke().times(1).returning(|_| {
        Err(WeaveError::Spawn {
            program: "ajc".into(),
            source: Arc::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
        })
    });
    let logger = RecordingLogger::default();

    let error = transform(weaver, &output_root)
        .transform(&scenario_invocation(), &logger)
        .expect_err("spawn failure propagates");

    assert!(matches!(error, WeaveError::Spawn { .. }));
    assert!(logger.entries().is_empty());
}

#[rstest]
fn custom_filter_admits_extra_archives(output_root: TempDir) {
    let mut weaver = MockWeaver::new();
    weaver
        .expect_invoke()
        .withf(|invocation| {
            invocation.value_of("-classpath") == Some(&OsString::from("/libs/tracing-aspects.jar"))
        })
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let invocation = TransformInvocation::new(
        InputSet::new(
            vec![],
            vec![BuildInput::archive("/libs/tracing-aspects.jar", Scope::ExternalLibrary)],
        ),
        vec![],
    );

    transform(weaver, &output_root)
        .with_filter(RelevantArchiveFilter::default().with_markers(["tracing-aspects"]))
        .transform(&invocation, &RecordingLogger::default())
        .expect("weave succeeds");
}
