use thiserror::Error;

/// Application-wide error types.
///
/// Every failure a `load_next` call can hit is represented here. All of them
/// are terminal for the triggering call and leave listing state untouched;
/// there is no retry policy anywhere in the workspace.
#[derive(Error, Debug)]
pub enum AppError {
    /// The content API answered with a non-success status.
    #[error("Fetch failed: HTTP {status} from {url}")]
    FetchFailure { status: u16, url: String },

    /// The response body does not match the expected listing page shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network or connection error before any response arrived.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The configured API base URL (or a cursor) could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Generic application error for cases not covered by specific variants.
    ///
    /// Use this sparingly - prefer creating specific error variants
    /// for better error handling and debugging.
    #[error("Error: {0}")]
    Generic(String),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::FetchFailure { status, url } => {
                if *status == 404 {
                    format!(
                        "The content API returned 404 for {}\n   Check the repository URL and that the \"posts\" type exists.",
                        url
                    )
                } else {
                    format!("The content API returned HTTP {} for {}", status, url)
                }
            }
            AppError::MalformedResponse(msg) => {
                format!(
                    "The content API returned an unexpected response: {}\n   The endpoint may not be a document-search API.",
                    msg
                )
            }
            AppError::NetworkError(msg) => {
                format!("Network error: {}\n   Check your internet connection.", msg)
            }
            AppError::Timeout(secs) => {
                format!(
                    "Request timed out after {} seconds.\n   The content API may be overloaded. Try again later.",
                    secs
                )
            }
            AppError::InvalidUrl(url) => {
                format!(
                    "Invalid API URL: {}\n   Example: https://my-blog.cdn.example.com/api/v2",
                    url
                )
            }
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::FetchFailure {
            status: 500,
            url: "https://blog.example.com/page/2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fetch failed: HTTP 500 from https://blog.example.com/page/2"
        );
    }

    #[test]
    fn test_generic_error() {
        let err = AppError::Generic("Something went wrong".to_string());
        assert_eq!(err.to_string(), "Error: Something went wrong");
    }

    #[test]
    fn test_timeout_error() {
        let err = AppError::Timeout(30);
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
    }

    #[test]
    fn test_error_from_serde() {
        let json = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(json);
        let serde_err = result.unwrap_err();
        let app_err: AppError = serde_err.into();
        assert!(matches!(app_err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_user_message_not_found() {
        let err = AppError::FetchFailure {
            status: 404,
            url: "https://blog.example.com/api/v2/documents/search".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("404"));
        assert!(msg.contains("repository URL"));
    }

    #[test]
    fn test_user_message_invalid_url() {
        let err = AppError::InvalidUrl("not a url".to_string());
        assert!(err.user_message().contains("Invalid API URL"));
    }
}
