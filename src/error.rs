use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    pub fn store_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn notification<S: Into<String>>(msg: S) -> Self {
        Self::Notification(msg.into())
    }

    pub fn directory<S: Into<String>>(msg: S) -> Self {
        Self::Directory(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn operation_failed<S: Into<String>>(msg: S) -> Self {
        Self::OperationFailed(msg.into())
    }

    /// Whether the message may be shown to the user as-is.
    ///
    /// Validation messages name the field the user must correct. Everything
    /// carrying a transport or remote cause is reduced to a generic notice by
    /// `to_safe_string`; the original goes to the log.
    pub fn is_user_safe(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Config(_) | Self::OperationFailed(_) => true,
            Self::Network(_)
            | Self::StoreUnavailable(_)
            | Self::NotFound(_)
            | Self::Notification(_)
            | Self::Directory(_)
            | Self::Anyhow(_) => false,
        }
    }

    pub fn to_safe_string(&self) -> String {
        if self.is_user_safe() {
            self.to_string()
        } else {
            match self {
                Self::Network(_) | Self::StoreUnavailable(_) | Self::NotFound(_) => {
                    "The operation could not be completed. Please try again.".to_string()
                }
                Self::Directory(_) => "Participant list is unavailable.".to_string(),
                _ => "Operation failed".to_string(),
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::validation("event name is required");
        assert!(err.is_user_safe());
        assert_eq!(err.to_safe_string(), "event name is required");
    }

    #[test]
    fn test_store_errors_surface_generic_notice() {
        let err = AppError::store_unavailable("connection refused");
        assert!(!err.is_user_safe());
        let shown = err.to_safe_string();
        assert!(!shown.contains("connection refused"));
        assert!(shown.contains("try again"));
    }

    #[test]
    fn test_not_found_surfaces_generic_notice() {
        let err = AppError::not_found("events/abc123");
        assert!(!err.to_safe_string().contains("abc123"));
    }

    #[test]
    fn test_directory_failure_has_own_notice() {
        let err = AppError::directory("HTTP 502");
        assert_eq!(err.to_safe_string(), "Participant list is unavailable.");
    }
}
