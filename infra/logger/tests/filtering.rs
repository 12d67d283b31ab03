use nucard_logger::{Logger, LoggerError, Rotation};
use std::fs;
use std::time::Duration;

fn read_log(dir: &std::path::Path) -> String {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .map(|path| fs::read_to_string(path).unwrap())
        .collect()
}

#[test]
fn directive_scopes_levels_and_subscriber_is_installed_once() {
    let tmp = tempfile::tempdir().unwrap();

    let logger = Logger::builder()
        .name("nucard-filtering")
        .env_filter("nucard_catalog=debug,hyper=warn")
        .console(false)
        .path(tmp.path())
        .rotation(Rotation::NEVER)
        .init()
        .unwrap();

    tracing::debug!(target: "nucard_catalog", cards = 4, "cache lookup hit");
    tracing::info!(target: "hyper", "connection accepted");
    tracing::warn!(target: "hyper", "connection reset");
    tracing::debug!(target: "nucard_search", "query sent");

    let err = Logger::builder().name("nucard-second").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let contents = read_log(tmp.path());
    assert!(contents.contains("cache lookup hit"));
    assert!(contents.contains("connection reset"));
    assert!(!contents.contains("connection accepted"));
    assert!(!contents.contains("query sent"));
}
