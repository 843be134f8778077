use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    /// A supplied input violates a function's precondition.
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("{failed} of {total} check cases failed")]
    CheckFailed { failed: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    Configuration,
    System,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalcError::InvalidArgument { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidArgument { .. } => ErrorCategory::InvalidArgument,
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
            CalcError::CheckFailed { .. } => ErrorCategory::Check,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::InvalidArgument => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Check => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument { .. } => "Check the operands passed to the operation",
            CalcError::IoError(_) => "Make sure the file exists and is readable",
            CalcError::SerializationError(_) => "Retry without --format json",
            CalcError::ConfigError { .. } => "Make sure the check file is valid TOML",
            CalcError::InvalidConfigValueError { .. } | CalcError::MissingConfigError { .. } => {
                "Fix the reported field in the check file"
            }
            CalcError::CheckFailed { .. } => "Inspect the failed cases listed above",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidArgument { message } => format!("Invalid argument: {}", message),
            CalcError::CheckFailed { failed, total } => {
                format!("Check run failed ({} of {} cases)", failed, total)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = CalcError::invalid_argument("Cannot divide by zero");
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert!(err.is_invalid_argument());
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(CalcError::invalid_argument("x").exit_code(), 2);
        assert_eq!(CalcError::CheckFailed { failed: 1, total: 3 }.exit_code(), 1);
        let io = CalcError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = CalcError::MissingConfigError {
            field: "cases".to_string(),
        };
        assert!(!err.is_invalid_argument());
        assert_eq!(err.user_friendly_message(), "Missing configuration field: cases");
        assert_eq!(
            CalcError::invalid_argument("Radius cannot be negative").user_friendly_message(),
            "Invalid argument: Radius cannot be negative"
        );
    }
}
