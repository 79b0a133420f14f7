//! Error types for client operations
//!
//! Variants carry just enough context to log; the wasm bindings flatten
//! them to strings at the JS boundary.

use serde::{Deserialize, Serialize};

/// Errors raised while turning server data into client state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// The turn blob ended before the line we read by position
    #[error("turn data has no section {index}")]
    MissingSection { index: usize },
    /// The equipment line has too few `|`-separated fields
    #[error("equipment line has {fields} fields, need at least 6")]
    MalformedEquipment { fields: usize },
    /// The request needs a selected game but game id is 0
    #[error("no game selected")]
    NoGameSelected,
    /// A request body could not be encoded
    #[error("could not encode request body: {message}")]
    Encode { message: String },
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Encode {
            message: err.to_string(),
        }
    }
}

/// Result type alias for client operations
pub type GameResult<T> = Result<T, GameError>;
