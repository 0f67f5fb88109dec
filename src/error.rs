use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum PsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by the PS in foodservice API, carrying the HTTP status
    /// code and the trace id from the response body when one was present.
    #[error("API error ({status_code}): {message}{}", TraceSuffix(.trace_id))]
    Api {
        message: String,
        status_code: u16,
        trace_id: Option<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PsError {
    /// HTTP status code for API-level errors, `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PsError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Trace id from the API response, if the server sent one.
    pub fn trace_id(&self) -> Option<&str> {
        match self {
            PsError::Api { trace_id, .. } => trace_id.as_deref(),
            _ => None,
        }
    }
}

struct TraceSuffix<'a>(&'a Option<String>);

impl fmt::Display for TraceSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, " - [{}]", id),
            None => Ok(()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PsError>;
