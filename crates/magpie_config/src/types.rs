//! Configuration types deserialized from `magpie.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `magpie.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, exported model path).
    pub project: ProjectMeta,
    /// Per-rule severity overrides.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Core project metadata required in every `magpie.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// Path to the host-exported model file, relative to the project
    /// directory.
    pub model: String,
    /// Base directory for resolving the source paths the model records.
    /// Defaults to the project directory.
    #[serde(default)]
    pub source_root: Option<String>,
}

/// Per-rule severity overrides.
///
/// Codes appearing in `deny` are promoted to errors, codes in `warn` are
/// forced to warnings, and codes in `allow` are suppressed entirely.
#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    /// Rule codes to treat as errors.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule codes to suppress.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Rule codes to treat as warnings.
    #[serde(default)]
    pub warn: Vec<String>,
}

/// Report output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// The report format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// The report format for diagnostics, matching the CLI's `--format` values.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output (default).
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn output_format_variants() {
        for (input, expected) in [("text", OutputFormat::Text), ("json", OutputFormat::Json)] {
            let toml = format!(
                r#"
[project]
name = "test"
model = "model.json"

[output]
format = "{input}"
"#
            );
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.output.format, expected);
        }
    }

    #[test]
    fn rules_default_to_empty() {
        let toml = r#"
[project]
name = "test"
model = "model.json"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert!(config.rules.deny.is_empty());
        assert!(config.rules.allow.is_empty());
        assert!(config.rules.warn.is_empty());
    }
}
