use tempfile::TempDir;
use vc_assign::utils::logger;

// Lives in its own test binary: the tracing subscriber is a process-wide
// global and can only be installed once.
#[test]
fn test_log_file_receives_debug_and_is_flushed_on_drop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    std::fs::write(&path, "earlier run line\n").unwrap();

    let guard = logger::init_logger(&path).unwrap();

    tracing::info!("info line");
    tracing::debug!("debug line");

    drop(guard);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("info line"));
    assert!(contents.contains("debug line"));
    // Opening the sink must append, not truncate what was already there.
    assert!(contents.starts_with("earlier run line\n"));
}

#[test]
fn test_default_log_path_is_timestamped() {
    let path = logger::default_log_path();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("vc-assign-"));
    assert!(name.ends_with(".log"));
}
