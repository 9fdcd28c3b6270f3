//! Browser side of the chat: one WebSocket session per chat page and a
//! loader for the room list page.
//!
//! Everything outside `dom`, `pages` and the socket tasks is plain Rust and
//! runs under `cargo test` on the host.

mod config;
mod error;
pub mod rooms;
pub mod session;
pub mod socket;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod pages;

pub use config::{ClientConfig, DEFAULT_ROOM_LIST_ENDPOINT, DEFAULT_WEBSOCKET_PATH};
pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main_wasm()
{
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());
	log::info!("WASM client loaded");
}

/// Entry point of the one-to-one chat page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_chatbox()
{
	dom::on_ready(||
	{
		if let Err(e) = pages::start_chatbox(&ClientConfig::default())
		{
			log::error!("Chat page failed to start: {}", e);
		}
	});
}

/// Entry point of the room chat page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_chatroom()
{
	dom::on_ready(||
	{
		if let Err(e) = pages::start_chatroom(&ClientConfig::default())
		{
			log::error!("Room page failed to start: {}", e);
		}
	});
}

/// Entry point of the room list page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn load_room_list()
{
	dom::on_ready(||
	{
		if let Err(e) = pages::load_room_list(&ClientConfig::default())
		{
			log::error!("Room list failed to start: {}", e);
		}
	});
}
