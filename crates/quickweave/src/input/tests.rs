//! Unit tests for build inputs and the archive filter.

use rstest::rstest;

use super::*;

#[rstest]
#[case::runtime("aspectjrt-1.8.13.jar", true)]
#[case::annotations("quickpermissions-annotations-0.3.1.jar", true)]
#[case::unrelated("gson-2.8.jar", false)]
#[case::empty("", false)]
fn default_filter_selects_weaving_libraries(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(RelevantArchiveFilter::default().matches(name), expected);
}

#[test]
fn extra_markers_extend_the_default_set() {
    let filter = RelevantArchiveFilter::default().with_markers(["tracing-aspects", ""]);
    assert!(filter.matches("tracing-aspects-2.0.jar"));
    assert!(filter.matches("aspectjrt-1.9.jar"));
    assert_eq!(filter.markers().len(), 3, "empty markers must be ignored");
}

#[test]
fn name_defaults_to_file_name() {
    let input = BuildInput::archive(
        "/cache/files-2.1/aspectjrt-1.8.13.jar",
        Scope::ExternalLibrary,
    );
    assert_eq!(input.name(), "aspectjrt-1.8.13.jar");
}

#[test]
fn explicit_name_overrides_file_name() {
    let input = BuildInput::archive("/cache/0f3a/classes.jar", Scope::ExternalLibrary)
        .with_name("quickpermissions-annotations");
    assert_eq!(input.name(), "quickpermissions-annotations");
}

#[test]
fn deserialises_host_description_entries() {
    let json = r#"{
        "inputs": [{"path": "/out/classes", "kind": "directory", "scope": "project"}],
        "referenced": [{"path": "/libs/gson-2.8.jar", "kind": "archive", "scope": "external_library"}]
    }"#;
    let set: InputSet = serde_json::from_str(json).expect("parse input set");
    assert_eq!(set.inputs().len(), 1);
    let first = set.inputs().first().expect("one input");
    assert_eq!(first.kind(), InputKind::Directory);
    assert_eq!(first.scope(), Scope::Project);
    let referenced = set.referenced().first().expect("one referenced input");
    assert_eq!(referenced.name(), "gson-2.8.jar");
}
