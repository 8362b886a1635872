//! Failure modes of configuration loading.

/// Why a `magpie.toml` could not be turned into a usable configuration.
///
/// Everything here is a user-facing setup problem; the CLI prints these and
/// exits rather than attempting any analysis.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read at all.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the expected shape.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A field the analyzer cannot run without was left out.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The configuration parsed but contradicts itself.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let cases: Vec<(ConfigError, &str)> = vec![
            (
                ConfigError::MissingField("project.model".to_string()),
                "missing required field: project.model",
            ),
            (
                ConfigError::ParseError("expected '=' at line 3".to_string()),
                "failed to parse configuration: expected '=' at line 3",
            ),
            (
                ConfigError::ValidationError(
                    "rule 'A101' is both denied and allowed".to_string(),
                ),
                "validation error: rule 'A101' is both denied and allowed",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().starts_with("failed to read configuration:"));
    }
}
