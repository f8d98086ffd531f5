//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE, RoleOption};
use crate::error::QaError;
use crate::test_support::DirGuard;
use serial_test::serial;
use tempfile::TempDir;

fn assert_validation_error(yaml: &str, fragment: &str) {
    match Config::from_yaml(yaml) {
        Err(QaError::UserError(msg)) => {
            assert!(msg.starts_with("config validation failed"), "got: {}", msg);
            assert!(msg.contains(fragment), "'{}' should mention '{}'", msg, fragment);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.model, "gpt-3.5-turbo-instruct");
    assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.max_tokens, 256);
    assert_eq!(config.api_base_url, "https://api.openai.com/v1");
    assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.timeout_seconds, 60);
    assert_eq!(config.role_labels(), vec!["개발자", "UX 디자이너", "기획자"]);
    assert_eq!(config.examples.len(), 3);
    config.validate().unwrap();
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.model, "gpt-3.5-turbo-instruct");
    assert_eq!(config.roles.len(), 3);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
temperature: 0.2
model: my-instruct-model
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.model, "my-instruct-model");

    // Unspecified values should use defaults
    assert_eq!(config.max_tokens, 256);
    assert_eq!(config.examples[0].role, "개발자");
}

#[test]
fn test_parse_custom_roles_and_examples() {
    let yaml = r##"
roles:
  - label: 데이터 엔지니어
    color: "#FF9800"
  - label: QA
examples:
  - role: 백엔드 개발자
    question: 장애 대응 경험?
    answer: 롤백 후 원인 분석
"##;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.roles,
        vec![
            RoleOption::new("데이터 엔지니어", "#FF9800"),
            RoleOption::new("QA", "#607D8B"),
        ]
    );
    assert_eq!(config.examples.len(), 1);
    assert_eq!(config.examples[0].answer, "롤백 후 원인 분석");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
model: m
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.model, "m");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    match Config::from_yaml("roles: [unclosed") {
        Err(QaError::UserError(msg)) => assert!(msg.contains("failed to parse config YAML")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_values() {
    assert_validation_error("temperature: 3.5", "temperature must be between");
    assert_validation_error("max_tokens: 0", "max_tokens");
    assert_validation_error("timeout_seconds: 0", "timeout_seconds");
    assert_validation_error("api_base_url: api.openai.com", "api_base_url");
    assert_validation_error("roles: []", "at least one role");
    assert_validation_error("examples: []", "at least one entry");
    assert_validation_error(
        "roles:\n  - label: A\n  - label: A\n",
        "duplicate role label 'A'",
    );
    assert_validation_error(
        "roles:\n  - label: A\n    color: blue\n",
        "expected the form #RRGGBB",
    );
    assert_validation_error(
        "examples:\n  - role: A\n    question: ''\n    answer: B\n",
        "example #1",
    );
}

#[test]
fn test_find_role() {
    let config = Config::default();
    assert_eq!(config.find_role(" 기획자 ").unwrap().color, "#4CAF50");

    match config.find_role("디자이너") {
        Err(QaError::InvalidInput(msg)) => {
            assert!(msg.contains("unknown role '디자이너'"));
            assert!(msg.contains("개발자, UX 디자이너, 기획자"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }

    assert!(matches!(
        config.find_role("  "),
        Err(QaError::InvalidInput(_))
    ));
}

#[test]
fn test_effective_temperature() {
    let config = Config::default();
    assert!((config.effective_temperature(None).unwrap() - 0.7).abs() < f32::EPSILON);
    assert!((config.effective_temperature(Some(1.2)).unwrap() - 1.2).abs() < f32::EPSILON);
    assert!(matches!(
        config.effective_temperature(Some(-0.1)),
        Err(QaError::InvalidInput(_))
    ));
    assert!(matches!(
        config.effective_temperature(Some(f32::NAN)),
        Err(QaError::InvalidInput(_))
    ));
}

#[test]
fn test_yaml_round_trip_preserves_config() {
    let config = Config::default();
    let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(reparsed.roles, config.roles);
    assert_eq!(reparsed.examples, config.examples);
    assert_eq!(reparsed.model, config.model);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");
    match Config::resolve(Some(missing.as_path())) {
        Err(QaError::UserError(msg)) => assert!(msg.contains("failed to read config file")),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_resolve_uses_file_in_current_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "model: from-cwd\n").unwrap();

    let _guard = DirGuard::new(temp.path());
    let config = Config::resolve(None).unwrap();
    assert_eq!(config.model, "from-cwd");
}

#[test]
#[serial]
fn test_resolve_defaults_without_file() {
    let temp = TempDir::new().unwrap();

    let _guard = DirGuard::new(temp.path());
    let config = Config::resolve(None).unwrap();
    assert_eq!(config.model, "gpt-3.5-turbo-instruct");
}
