use super::*;

#[test]
fn output_format_parses_case_insensitively() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_matches_format() {
    let colors = vec!["red".to_string()];
    let text = OutputFormat::Text.formatter().format_colors(&colors).unwrap();
    let json = OutputFormat::Json.formatter().format_colors(&colors).unwrap();
    assert_eq!(text, "red\n");
    assert!(json.starts_with('['));
}
