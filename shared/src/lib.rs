//! Wire types shared by the chat client and the page server.
//!
//! Frames are plain JSON objects. Neither direction carries a type tag; a
//! payload is identified by which fields it has.

mod error;
mod message;
mod room;

pub use error::ProtocolError;
pub use message::{ClientMessage, Dispatch, ServerMessage, dispatch, render_line};
pub use room::{RoomEntry, RoomKey, RoomLink, RoomListing, RoomRoute, room_key_from_path};
