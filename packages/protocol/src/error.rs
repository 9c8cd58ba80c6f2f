use thiserror::Error;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Message has no string `kind` field")]
    MissingKind,

    #[error("Unknown message kind: {0}")]
    UnknownKind(String),

    #[error("Invalid payload for `{kind}`: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ProtocolError {
    /// Whether the peer sent something this build does not understand at all,
    /// as opposed to a known message with a broken payload.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            ProtocolError::Malformed(_) | ProtocolError::MissingKind | ProtocolError::UnknownKind(_)
        )
    }
}
