//! The global subscriber can be installed once per process, so everything
//! about `setup_logging` lives in this single test binary.

use lib_wanted::loggers::{setup_logging, LoggingError, LoggingOptions};

#[test]
fn installs_once_with_file_layer() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let options = LoggingOptions {
        level: "debug".to_string(),
        log_dir: Some(log_dir.clone()),
        file_prefix: "wanted-test".to_string(),
    };

    let guard = setup_logging(&options).expect("first install succeeds");
    assert!(guard.is_some());
    assert!(log_dir.is_dir());

    tracing::warn!(attempt = 1, "written through the installed subscriber");

    let second = setup_logging(&LoggingOptions::default());
    assert!(matches!(second, Err(LoggingError::InitError(_))));

    drop(guard);
}
