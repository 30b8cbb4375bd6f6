use thiserror::Error;

/// Failure reported by the backend service.
///
/// The message is for display only; callers never branch on its content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    Service(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Text suitable for an inline error banner.
    pub fn display_message(&self) -> String {
        match self {
            GatewayError::Service(message) => message.clone(),
            GatewayError::Unavailable(_) => {
                "Unable to reach the server. Please try again.".to_string()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(String),

    #[error("storage data corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_display_verbatim() {
        let err = GatewayError::service("Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.display_message(), "Invalid login credentials");
    }

    #[test]
    fn unavailable_hides_transport_detail_from_banner() {
        let err = GatewayError::Unavailable("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
        assert!(!err.display_message().contains("connection refused"));
    }
}
