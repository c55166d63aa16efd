use super::Config;

#[test]
fn test_defaults() {
    let cfg = Config::defaults();
    assert_eq!(cfg.heading_marker, "#");
    assert_eq!(cfg.breadcrumb_separator, " > ");
    assert_eq!(cfg.untitled_label.chars().count(), 5);
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::parse("heading_marker = \"*\"\nfile_extensions = [\"org\"]\n").unwrap();
    assert_eq!(cfg.heading_marker, "*");
    assert_eq!(cfg.file_extensions, vec!["org".to_string()]);
    assert_eq!(cfg.breadcrumb_separator, " > ");
}

#[test]
fn test_invalid_file_is_rejected() {
    assert!(Config::parse("heading_marker = [1, 2]").is_none());
}
