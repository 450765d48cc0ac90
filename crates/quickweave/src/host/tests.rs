//! Unit tests for build description loading.

use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::input::{InputKind, Scope};

const DESCRIPTION: &str = r#"{
  "inputs": [{ "path": "/out/classes", "kind": "directory", "scope": "project" }],
  "referenced": [
    { "path": "/libs/aspectjrt-1.8.13.jar", "kind": "archive", "scope": "external_library" },
    { "path": "/libs/gson-2.8.jar", "kind": "archive", "scope": "external_library" }
  ],
  "boot_classpath": ["/sdk/android.jar"],
  "output_root": "/out/transforms/quickweave"
}"#;

#[test]
fn reads_description_from_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("build.json");
    fs::write(&path, DESCRIPTION).expect("write description");

    let description = BuildDescription::from_path(&path).expect("parse description");

    assert_eq!(description.output_root(), Path::new("/out/transforms/quickweave"));
    assert_eq!(description.outputs().root(), Path::new("/out/transforms/quickweave"));
    let invocation = description.into_invocation();
    assert_eq!(invocation.boot_classpath(), [PathBuf::from("/sdk/android.jar")]);
    assert_eq!(invocation.inputs().referenced().len(), 2);
    let first = invocation.inputs().inputs().first().expect("project input");
    assert_eq!(first.kind(), InputKind::Directory);
    assert_eq!(first.scope(), Scope::Project);
}

#[test]
fn missing_file_is_a_read_error() {
    let temp = TempDir::new().expect("temp dir");
    let error = BuildDescription::from_path(&temp.path().join("absent.json"))
        .expect_err("file is missing");
    assert!(matches!(error, BuildDescriptionError::Read { .. }));
}

#[test]
fn missing_output_root_is_a_parse_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("build.json");
    fs::write(&path, r#"{ "inputs": [] }"#).expect("write description");
    let error = BuildDescription::from_path(&path).expect_err("output_root is required");
    assert!(matches!(error, BuildDescriptionError::Parse { .. }));
}
