//! Text-generation error types.
//!
//! Every failure is a value: handlers render it into one of the fixed
//! caller-visible strings via [`LlmError::user_message`].

/// Error from text-generation API calls.
#[derive(Debug)]
pub struct LlmError {
    /// The kind of error
    pub kind: LlmErrorKind,
    /// HTTP status code, if applicable
    pub status_code: Option<u16>,
    /// Error detail (logged, never shown to the caller)
    pub message: String,
}

impl LlmError {
    /// Create an empty-prompt error. No request was sent.
    pub fn empty_prompt() -> Self {
        Self {
            kind: LlmErrorKind::EmptyPrompt,
            status_code: None,
            message: "prompt is empty".to_string(),
        }
    }

    /// Create an error from a non-success HTTP status.
    pub fn from_status(status_code: u16, message: String) -> Self {
        Self {
            kind: classify_http_status(status_code),
            status_code: Some(status_code),
            message,
        }
    }

    /// Create a network error.
    pub fn network_error(message: String) -> Self {
        Self {
            kind: LlmErrorKind::NetworkError,
            status_code: None,
            message,
        }
    }

    /// Create a parse error.
    pub fn parse_error(message: String) -> Self {
        Self {
            kind: LlmErrorKind::ParseError,
            status_code: None,
            message,
        }
    }

    /// The fixed string shown to the caller in place of generated text.
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (HTTP {}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for LlmError {}

/// Classification of text-generation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Prompt was empty; nothing was sent
    EmptyPrompt,
    /// 403 - the model is gated or the token lacks access
    AccessRestricted,
    /// 503 - the model is cold and still loading
    ModelLoading,
    /// Any other non-success status
    RequestFailed,
    /// Connection failed, timeout, body read failure
    NetworkError,
    /// Response body did not have the expected shape
    ParseError,
}

impl LlmErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            LlmErrorKind::EmptyPrompt => "Error: No prompt provided.",
            LlmErrorKind::AccessRestricted => {
                "Error: Access to this model is restricted. Please try a different model."
            }
            LlmErrorKind::ModelLoading => "Error: Model is loading. Please try again shortly.",
            LlmErrorKind::RequestFailed
            | LlmErrorKind::NetworkError
            | LlmErrorKind::ParseError => "Error: Could not generate a response.",
        }
    }
}

impl std::fmt::Display for LlmErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmErrorKind::EmptyPrompt => write!(f, "Empty prompt"),
            LlmErrorKind::AccessRestricted => write!(f, "Access restricted"),
            LlmErrorKind::ModelLoading => write!(f, "Model loading"),
            LlmErrorKind::RequestFailed => write!(f, "Request failed"),
            LlmErrorKind::NetworkError => write!(f, "Network error"),
            LlmErrorKind::ParseError => write!(f, "Parse error"),
        }
    }
}

/// Parse HTTP status code into error kind.
pub fn classify_http_status(status: u16) -> LlmErrorKind {
    match status {
        403 => LlmErrorKind::AccessRestricted,
        503 => LlmErrorKind::ModelLoading,
        _ => LlmErrorKind::RequestFailed,
    }
}
