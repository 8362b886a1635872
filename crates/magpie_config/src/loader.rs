//! Reading and validating `magpie.toml`.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `magpie.toml` configuration from a project
/// directory.
///
/// Reads `<project_dir>/magpie.toml`, parses it, and validates required
/// fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("magpie.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `magpie.toml` configuration from a string,
/// without touching the filesystem.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and the rule overrides are
/// consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.model.is_empty() {
        return Err(ConfigError::MissingField("project.model".to_string()));
    }
    for code in &config.rules.deny {
        if config.rules.allow.contains(code) {
            return Err(ConfigError::ValidationError(format!(
                "rule '{code}' is both denied and allowed"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "payments"
model = "out/model.json"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "payments");
        assert_eq!(config.project.model, "out/model.json");
        assert_eq!(config.project.version, "");
        assert!(config.project.source_root.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "payments"
version = "1.4.0"
description = "Payment processing service"
model = "out/model.json"
source_root = "src"

[rules]
deny = ["A101"]
allow = ["C203"]
warn = ["U110"]

[output]
format = "json"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "payments");
        assert_eq!(config.project.version, "1.4.0");
        assert_eq!(config.project.source_root.as_deref(), Some("src"));
        assert_eq!(config.rules.deny, vec!["A101"]);
        assert_eq!(config.rules.allow, vec!["C203"]);
        assert_eq!(config.rules.warn, vec!["U110"]);
        assert_eq!(config.output.format, crate::types::OutputFormat::Json);
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
model = "model.json"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_model_errors() {
        let toml = r#"
[project]
name = "test"
model = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn denied_and_allowed_rule_errors() {
        let toml = r#"
[project]
name = "test"
model = "model.json"

[rules]
deny = ["A101"]
allow = ["A101"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(format!("{err}").contains("A101"));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
