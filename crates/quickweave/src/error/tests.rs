//! Unit tests for weave error types.

use std::path::PathBuf;
use std::sync::Arc;

use super::*;

#[test]
fn compiler_failure_displays_the_compiler_text_verbatim() {
    let error = WeaveError::from(WeaveFailure::new(
        "Foo.java:12 can't determine superclass of missing type Bar",
        None,
    ));
    assert_eq!(
        error.to_string(),
        "Foo.java:12 can't determine superclass of missing type Bar"
    );
}

#[test]
fn spawn_error_names_the_program() {
    let error = WeaveError::Spawn {
        program: "ajc".into(),
        source: Arc::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
    };
    let message = error.to_string();
    assert!(message.contains("ajc"), "expected program in message: {message}");
}

#[test]
fn output_error_includes_path() {
    let error = WeaveError::Output {
        path: PathBuf::from("/out/transforms/main"),
        source: Arc::new(std::io::Error::other("read-only filesystem")),
    };
    let message = error.to_string();
    assert!(
        message.contains("/out/transforms/main"),
        "expected path in message: {message}"
    );
}

#[test]
fn capture_error_names_the_program() {
    let error = WeaveError::Capture {
        program: "ajc".into(),
        source: Arc::new(std::io::Error::other("broken pipe")),
    };
    let message = error.to_string();
    assert!(message.contains("ajc"), "expected program in message: {message}");
    assert!(message.contains("broken pipe"), "expected cause in message: {message}");
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WeaveError>();
}
