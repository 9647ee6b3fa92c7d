use super::*;

fn sets(valid: &[&str], invalid: &[&str]) -> ImageSets {
    let mut images = ImageSets::with_seed(valid.iter().copied());
    images.invalid.extend(invalid.iter().map(|s| s.to_string()));
    images
}

#[test]
fn test_report_sorts_lexicographically() {
    let report = Report::new(sets(&["quay.io/z:v1", "docker.io/a:v1", "gcr.io/m:v1"], &[]), false);
    assert_eq!(report.valid, vec!["docker.io/a:v1", "gcr.io/m:v1", "quay.io/z:v1"]);
}

#[test]
fn test_report_without_validation_drops_invalid_section() {
    let report = Report::new(sets(&["gcr.io/a:v1"], &["example.com/b:v1"]), false);
    assert!(!report.is_validation());
    assert!(report.invalid.is_none());
    assert_eq!(report.total(), 1);
}

#[test]
fn test_report_with_validation_keeps_both_sections() {
    let report = Report::new(
        sets(&["gcr.io/a:v1"], &["quay.io/foo:latest", "example.com/b:v1"]),
        true,
    );
    assert!(report.is_validation());
    assert_eq!(
        report.invalid,
        Some(vec!["example.com/b:v1".to_string(), "quay.io/foo:latest".to_string()])
    );
    assert_eq!(report.total(), 3);
}

#[test]
fn test_report_with_validation_and_no_invalid_images() {
    let report = Report::new(sets(&["gcr.io/a:v1"], &[]), true);
    assert_eq!(report.invalid, Some(vec![]));
}

#[test]
fn test_report_serialises_without_invalid_when_not_validating() {
    let report = Report::new(sets(&["gcr.io/a:v1"], &[]), false);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({ "valid": ["gcr.io/a:v1"] }));
}

#[test]
fn test_report_serialises_both_sections_when_validating() {
    let report = Report::new(sets(&["gcr.io/a:v1"], &["b:latest"]), true);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["valid"][0], "gcr.io/a:v1");
    assert_eq!(json["invalid"][0], "b:latest");
}
