use thiserror::Error;

/// What the provider layer actually knows about an upstream failure: an HTTP
/// status when the API answered, or a transport-level message when it did
/// not. The raw message is kept for classification only and is never echoed
/// back to callers.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The API answered with a non-success status.
    #[error("upstream API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed completion response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // Prefer a status carried by the error itself; only then fall back
        // to describing the transport failure.
        if let Some(status) = err.status() {
            ProviderError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_timeout() {
            ProviderError::Transport(format!("timeout: {}", err))
        } else if err.is_connect() {
            ProviderError::Transport(format!("connection failed: {}", err))
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// HTTP status plus a sanitized detail string, safe to return to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedError {
    pub status: u16,
    pub detail: &'static str,
}

pub const AUTH_FAILED: &str = "Authentication with the completion provider failed";
pub const RATE_LIMITED: &str = "Completion provider rate limit or quota exceeded";
pub const UNAVAILABLE: &str = "Completion provider is temporarily unavailable";
pub const INVALID_REQUEST: &str = "Completion provider rejected the request as invalid";
pub const UPSTREAM_ERROR: &str = "Unexpected error from the completion provider";

/// Maps an upstream failure to the status and detail reported to the caller.
///
/// Total over every `ProviderError`: rules are applied in a fixed priority
/// order and anything unrecognized degrades to a generic 502. Quota and rate
/// limit failures are always reported as errors, never converted into a mock
/// success.
pub fn classify(err: &ProviderError) -> ClassifiedError {
    let status = match err {
        ProviderError::Api { status, .. } => Some(*status),
        ProviderError::Transport(_) | ProviderError::InvalidResponse(_) => None,
    };
    let message = err.to_string().to_lowercase();
    let has = |needle: &str| message.contains(needle);

    if status == Some(401) || has("invalid_api_key") || has("authentication") {
        ClassifiedError {
            status: 401,
            detail: AUTH_FAILED,
        }
    } else if status == Some(429)
        || has("rate limit")
        || has("429")
        || has("insufficient_quota")
        || has("quota")
    {
        ClassifiedError {
            status: 429,
            detail: RATE_LIMITED,
        }
    } else if matches!(status, Some(502 | 503 | 504)) || has("service unavailable") || has("timeout")
    {
        ClassifiedError {
            status: 503,
            detail: UNAVAILABLE,
        }
    } else if status == Some(400) || has("invalid_request") || has("invalid") {
        ClassifiedError {
            status: 400,
            detail: INVALID_REQUEST,
        }
    } else {
        ClassifiedError {
            status: 502,
            detail: UPSTREAM_ERROR,
        }
    }
}
