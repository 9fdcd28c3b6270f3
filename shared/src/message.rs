use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Frames a page sends to the chat endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClientMessage {
    /// Sent once when the identity form is submitted. Pairs the sender with
    /// the friend they want to talk to.
    Auth {
        user: String,
        friend: String,
        password: String,
    },
    /// A direct message for the pairing established by `Auth`.
    Chat {
        sender: String,
        receiver: String,
        message: String,
    },
    /// A message posted to a room.
    Room { key: String, message: String },
}

impl ClientMessage {
    pub fn to_frame(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

/// Frames the chat endpoint pushes to a page. Variant order matters: a
/// payload is matched against `Direct`, then `Room`, then `RoomMeta`, and
/// fields outside a variant are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ServerMessage {
    Direct {
        user: String,
        text: String,
    },
    Room {
        #[serde(rename = "Firstname")]
        firstname: String,
        #[serde(rename = "Message")]
        message: String,
    },
    RoomMeta {
        #[serde(rename = "ChatRoomName")]
        name: String,
        #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
}

impl ServerMessage {
    pub fn from_frame(frame: &str) -> Result<Self, ProtocolError> {
        let value: serde_json::Value =
            serde_json::from_str(frame).map_err(ProtocolError::MalformedPayload)?;

        Self::deserialize(value).map_err(|_| ProtocolError::UnrecognizedPayload)
    }

    pub fn into_dispatch(self) -> Dispatch {
        match self {
            Self::Direct { user, text } => Dispatch::AppendLine(render_line(&user, &text)),
            Self::Room { firstname, message } => {
                Dispatch::AppendLine(render_line(&firstname, &message))
            }
            Self::RoomMeta { name, .. } => Dispatch::SetRoomTitle(name),
        }
    }
}

/// What a page should do with one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Append a message row.
    AppendLine(String),
    /// Replace the room title. No row is appended.
    SetRoomTitle(String),
}

/// Decodes a text frame and maps it to the page update it calls for.
pub fn dispatch(frame: &str) -> Result<Dispatch, ProtocolError> {
    ServerMessage::from_frame(frame).map(ServerMessage::into_dispatch)
}

pub fn render_line(name: &str, text: &str) -> String {
    format!("{name}: {text}")
}
