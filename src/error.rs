use thiserror::Error;

/// Application-wide error types.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Missing page element: {0}")]
    MissingElement(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Returns `true` for failures caused by the remote side or the transport,
    /// as opposed to a broken page contract or local setup.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Status { .. } | AppError::Decode(_) | AppError::Io(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = AppError::Status {
            status: 503,
            url: "https://example.com/releases".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 503 from https://example.com/releases"
        );
    }

    #[test]
    fn test_fetch_failure_classification() {
        assert!(AppError::Network("refused".into()).is_fetch_failure());
        assert!(AppError::Decode("eof".into()).is_fetch_failure());
        assert!(!AppError::MissingElement("#faq-title".into()).is_fetch_failure());
        assert!(!AppError::Render("bad template".into()).is_fetch_failure());
    }

    #[test]
    fn test_from_serde_json_is_decode() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }
}
