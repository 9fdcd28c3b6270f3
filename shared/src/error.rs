use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("frame is not valid JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("frame does not match any known message shape")]
    UnrecognizedPayload,

    #[error("path '{path}' does not name a chat room")]
    InvalidRoomPath { path: String },

    #[error("failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),
}
