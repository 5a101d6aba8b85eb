use std::path::Path;

use super::*;

#[test]
fn parses_sources_in_file_order() {
    let yaml = r"
sources:
  - name: lightbrd
    base_url: https://lightbrd.com
  - name: nitter-net
    base_url: https://nitter.net/
";
    let file = parse_sources(yaml).unwrap();
    let names: Vec<&str> = file.sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["lightbrd", "nitter-net"]);
    assert_eq!(file.sources[1].base_url, "https://nitter.net");
}

#[test]
fn rejects_empty_source_list() {
    let result = parse_sources("sources: []");
    assert!(
        matches!(result, Err(ConfigError::Validation(_))),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn rejects_blank_name() {
    let yaml = r#"
sources:
  - name: "  "
    base_url: https://nitter.net
"#;
    assert!(matches!(
        parse_sources(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn rejects_non_http_base_url() {
    let yaml = r"
sources:
  - name: local
    base_url: ftp://nitter.net
";
    let err = parse_sources(yaml).unwrap_err();
    assert!(
        err.to_string().contains("http://"),
        "unexpected message: {err}"
    );
}

#[test]
fn rejects_duplicate_names_case_insensitively() {
    let yaml = r"
sources:
  - name: Nitter
    base_url: https://nitter.net
  - name: nitter
    base_url: https://nitter.example.com
";
    let err = parse_sources(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate source name"));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let result = parse_sources("sources: [name: : :");
    assert!(matches!(result, Err(ConfigError::SourcesFileParse(_))));
}

#[test]
fn missing_file_is_io_error() {
    let result = load_sources(Path::new("/definitely/not/here/sources.yaml"));
    assert!(matches!(result, Err(ConfigError::SourcesFileIo { .. })));
}

#[test]
fn loads_repo_sources_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/sources.yaml");
    let file = load_sources(&path).expect("config/sources.yaml should be valid");
    assert!(!file.sources.is_empty());
}
