use fabo_core::GameError;

/// Errors from talking to the game server
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or the reply could not be parsed
    #[error(transparent)]
    Game(#[from] GameError),
    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
    /// Connection, DNS or I/O failure
    #[error("transport error: {0}")]
    Transport(String),
    /// The JSON reply did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// An environment override could not be read
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// Status text the store shows for a rejected request
    pub fn status_text(&self) -> String {
        match self {
            ApiError::Status(code) => code.to_string(),
            ApiError::Game(_) | ApiError::Config(_) => String::from("CLIENT_ERROR"),
            ApiError::Transport(_) => String::from("FETCH_ERROR"),
            ApiError::Decode(_) => String::from("PARSING_ERROR"),
        }
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ApiError::Status(code),
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
