use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ProtocolError;

/// Opaque identifier of a chat room, taken from the page path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomKey(String);

impl RoomKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two room page variants. Rooms created from the room list live under
/// `/chatroom/c/`, older pages under `/chatroom/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomRoute {
    Legacy,
    Listed,
}

impl RoomRoute {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Legacy => "/chatroom/",
            Self::Listed => "/chatroom/c/",
        }
    }

    /// Picks the variant whose prefix matches `path`, preferring the longer
    /// prefix.
    pub fn detect(path: &str) -> Option<Self> {
        [Self::Listed, Self::Legacy]
            .into_iter()
            .find(|route| path.starts_with(route.prefix()))
    }

    /// Strips the route prefix and any trailing slashes. The remainder must
    /// be a single, non-empty path segment.
    pub fn room_key(self, path: &str) -> Result<RoomKey, ProtocolError> {
        let invalid = || ProtocolError::InvalidRoomPath {
            path: path.to_string(),
        };

        let key = path
            .strip_prefix(self.prefix())
            .ok_or_else(invalid)?
            .trim_end_matches('/');

        if key.is_empty() || key.contains('/') {
            return Err(invalid());
        }

        Ok(RoomKey(key.to_string()))
    }
}

pub fn room_key_from_path(path: &str) -> Result<RoomKey, ProtocolError> {
    RoomRoute::detect(path)
        .ok_or_else(|| ProtocolError::InvalidRoomPath {
            path: path.to_string(),
        })?
        .room_key(path)
}

/// Body of the room list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomListing {
    #[serde(rename = "Chatrooms", default, deserialize_with = "null_as_empty")]
    pub chatrooms: Vec<RoomEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "ChatRoomName")]
    pub name: String,
}

/// One rendered entry of the room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLink {
    pub href: String,
    pub label: String,
}

impl RoomEntry {
    pub fn href(&self, origin: &str) -> String {
        format!(
            "{}{}{}/",
            origin.trim_end_matches('/'),
            RoomRoute::Listed.prefix(),
            self.key
        )
    }
}

impl RoomListing {
    pub fn links(&self, origin: &str) -> Vec<RoomLink> {
        self.chatrooms
            .iter()
            .map(|entry| RoomLink {
                href: entry.href(origin),
                label: entry.name.clone(),
            })
            .collect()
    }
}

// The listing endpoint encodes an empty room list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RoomEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RoomEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
