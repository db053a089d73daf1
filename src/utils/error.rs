use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid content in {table}: {reason}")]
    InvalidContentError { table: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::IoError(_) => ErrorCategory::Io,
            PortfolioError::SerializationError(_) => ErrorCategory::Serialization,
            PortfolioError::TomlError(_)
            | PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortfolioError::InvalidContentError { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Critical,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Serialization => "Report this as a bug; the render tree could not be serialized",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags and retry",
            ErrorCategory::Content => "Fix the content tables so ids and names are unique and levels are within 0-100",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not write the page: {}", e),
            PortfolioError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        PortfolioError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_severity() {
        let err = PortfolioError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "pdf".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("output.format"));

        let io = PortfolioError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_display() {
        let err = PortfolioError::InvalidContentError {
            table: "skills".to_string(),
            reason: "duplicate name".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid content in skills: duplicate name");
    }
}
