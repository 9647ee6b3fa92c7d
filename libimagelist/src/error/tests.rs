use super::*;
use std::error::Error;
use std::io;

#[test]
fn test_read_error_includes_path() {
    let err = ImageListError::read(
        "manifests/deploy.yaml",
        io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    );

    assert!(matches!(err, ImageListError::Read { .. }));
    let message = err.to_string();
    assert!(message.contains("manifests/deploy.yaml"));
    assert!(message.contains("permission denied"));
}

#[test]
fn test_read_error_has_source() {
    let err = ImageListError::read("a.yml", io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert!(err.source().is_some());
}

#[test]
fn test_decode_error_includes_format_and_path() {
    let json_err = serde_json::from_str::<serde_json::Value>("{\"image\":").unwrap_err();
    let err = ImageListError::decode("pod.json", "json", json_err);

    let message = err.to_string();
    assert!(message.contains("json"));
    assert!(message.contains("pod.json"));
    assert!(err.source().is_some());
}

#[test]
fn test_decode_error_is_not_fatal() {
    let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let err = ImageListError::decode("x.json", "json", json_err);
    assert!(!err.is_fatal());
}

#[test]
fn test_read_error_is_not_fatal() {
    let err = ImageListError::read("x.yaml", io::Error::other("boom"));
    assert!(!err.is_fatal());
}

#[test]
fn test_walk_error_is_fatal() {
    let walk_err = walkdir::WalkDir::new("/definitely/not/a/real/path/for/image-list")
        .into_iter()
        .find_map(|entry| entry.err())
        .expect("walking a missing root yields an error");
    let err = ImageListError::walk("/definitely/not/a/real/path/for/image-list", walk_err);

    assert!(err.is_fatal());
    assert!(err.to_string().contains("Error reading files from directory"));
    assert!(err.source().is_some());
}

#[test]
fn test_config_error_without_path() {
    let err = ImageListError::config("bad value", None);
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "Configuration error: bad value");
    if let ImageListError::Config { path, source, .. } = err {
        assert!(path.is_none());
        assert!(source.is_none());
    } else {
        panic!("expected config error");
    }
}

#[test]
fn test_config_error_with_source() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err = ImageListError::config_with_source("failed to read config", Some("/etc/x.yaml"), io_err);

    assert!(err.source().is_some());
    if let ImageListError::Config { path, .. } = err {
        assert_eq!(path.as_deref(), Some("/etc/x.yaml"));
    } else {
        panic!("expected config error");
    }
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImageListError>();
}
