use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Route not implemented in mock backend: {method} {path}")]
    RouteNotImplemented { method: String, path: String },

    /// 非 2xx 回應，訊息即伺服器原始回應內容
    #[error("{body}")]
    Http { status: u16, body: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::ValidationError { .. } => ErrorSeverity::Low,
            BoardError::Http { .. } | BoardError::ApiError(_) => ErrorSeverity::Medium,
            BoardError::SerializationError(_) | BoardError::RouteNotImplemented { .. } => {
                ErrorSeverity::High
            }
            BoardError::IoError(_)
            | BoardError::ConfigError { .. }
            | BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardError::RouteNotImplemented { .. } => {
                "Use one of the supported /api routes or switch to live mode"
            }
            BoardError::Http { .. } => "Check the request payload and the server logs",
            BoardError::ApiError(_) => "Check that the API base URL is reachable",
            BoardError::IoError(_) => "Check file paths and permissions",
            BoardError::SerializationError(_) => {
                "The payload did not match the expected JSON schema"
            }
            BoardError::ValidationError { .. } => "Fill in the required fields and retry",
            BoardError::ConfigError { .. }
            | BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_raw_body() {
        let err = BoardError::Http {
            status: 404,
            body: "User not found".to_string(),
        };
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn route_not_implemented_names_method_and_path() {
        let err = BoardError::RouteNotImplemented {
            method: "POST".to_string(),
            path: "/api/unknown".to_string(),
        };
        assert!(err.to_string().contains("POST /api/unknown"));
    }
}
