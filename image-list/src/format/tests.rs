use super::*;
use libimagelist::ImageSets;

fn report(valid: &[&str], invalid: &[&str], validation: bool) -> Report {
    let mut images = ImageSets::with_seed(valid.iter().copied());
    images.invalid.extend(invalid.iter().map(|s| s.to_string()));
    Report::new(images, validation)
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("YAML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("Never"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::from("sometimes"), ColorChoice::Auto);
}

#[test]
fn test_should_color_explicit_choices() {
    assert!(should_color(ColorChoice::Always));
    assert!(!should_color(ColorChoice::Never));
}

#[test]
fn test_error_line_plain() {
    assert_eq!(error_line(ColorChoice::Never, "boom"), "✗ boom");
}

#[test]
fn test_error_line_colored_contains_message() {
    let line = error_line(ColorChoice::Always, "boom");
    assert!(line.contains("boom"));
    assert!(line.contains('\u{1b}'));
}

#[test]
fn test_pretty_listing_has_no_headers() {
    let r = report(&["quay.io/b:v1", "gcr.io/a:v1"], &[], false);
    assert_eq!(r.format_pretty(), "gcr.io/a:v1\nquay.io/b:v1");
}

#[test]
fn test_pretty_listing_empty() {
    let r = report(&[], &[], false);
    assert_eq!(r.format_pretty(), "");
}

#[test]
fn test_pretty_validation_sections() {
    let r = report(&["gcr.io/a:v1"], &["quay.io/foo:latest", "example.com/x:v1"], true);
    let expected = "\
************* VALID IMAGES *************
gcr.io/a:v1

************* INVALID IMAGES *************
example.com/x:v1
quay.io/foo:latest";
    assert_eq!(r.format_pretty(), expected);
}

#[test]
fn test_pretty_validation_with_empty_sections() {
    let r = report(&[], &[], true);
    assert_eq!(
        r.format_pretty(),
        "************* VALID IMAGES *************\n\n************* INVALID IMAGES *************"
    );
}

#[test]
fn test_format_json_listing() {
    let r = report(&["gcr.io/a:v1"], &[], false);
    let output = format_output(&r, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["valid"][0], "gcr.io/a:v1");
    assert!(json.get("invalid").is_none());
}

#[test]
fn test_format_yaml_validation() {
    let r = report(&["gcr.io/a:v1"], &["b:latest"], true);
    let output = format_output(&r, OutputFormat::Yaml).unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(yaml["invalid"][0], serde_yaml::Value::String("b:latest".to_string()));
}
