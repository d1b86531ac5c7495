use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session expired, please log in again")]
    Unauthorized,

    #[error("No refresh token available")]
    MissingRefreshToken,
}

impl ApiError {
    /// Message the backend put in its error body, if any.
    pub fn backend_message(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("message")?
                .as_str()
                .map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_from_json_body() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"success":false,"message":"Invalid search"}"#.to_string(),
        };
        assert_eq!(err.backend_message().as_deref(), Some("Invalid search"));
    }

    #[test]
    fn backend_message_absent_for_plain_body() {
        let err = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.backend_message(), None);
        assert_eq!(err.to_string(), "Backend returned 502 Bad Gateway: upstream down");
    }
}
