use futures_channel::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::ClientError;
use crate::session::Outbox;

/// Feeds outbound frames to the socket's sender task.
#[derive(Clone)]
pub struct ChannelOutbox
{
	tx: UnboundedSender<String>,
}

/// The receiving half is handed to [`connect`], which drains it into the
/// socket.
pub fn channel() -> (ChannelOutbox, UnboundedReceiver<String>)
{
	let (tx, rx) = futures_channel::mpsc::unbounded::<String>();
	(ChannelOutbox { tx }, rx)
}

impl Outbox for ChannelOutbox
{
	fn send_frame(&self, frame: String) -> Result<(), ClientError>
	{
		self.tx.unbounded_send(frame).map_err(|e|
		{
			log::error!("Failed to send to WS task (channel error)");
			ClientError::Connection(format!("send channel closed: {}", e))
		})
	}
}

#[cfg(target_arch = "wasm32")]
pub use wasm::connect;

#[cfg(target_arch = "wasm32")]
mod wasm
{
	use std::cell::RefCell;
	use std::rc::Rc;

	use futures_channel::mpsc::UnboundedReceiver;
	use futures_util::sink::SinkExt as _;
	use futures_util::stream::StreamExt;
	use gloo_net::websocket::{Message as WsMessage, futures::WebSocket};
	use wasm_bindgen_futures::spawn_local;

	use crate::ClientError;
	use crate::session::{ChatSession, Outbox};
	use crate::view::ChatView;

	/// Opens the page's one socket and starts its sender and receiver tasks.
	pub fn connect<O, V>(
		ws_url: &str,
		mut outgoing: UnboundedReceiver<String>,
		session: Rc<RefCell<ChatSession<O, V>>>,
	) -> Result<(), ClientError>
	where
		O: Outbox + 'static,
		V: ChatView + 'static,
	{
		log::info!("Connecting to WebSocket at: {}", ws_url);
		let ws_socket = WebSocket::open(ws_url).map_err(|e|
		{
			log::error!("Failed to open WebSocket: {:?}", e);
			ClientError::Connection(e.to_string())
		})?;

		let (mut ws_write_sink, mut ws_read_stream) = ws_socket.split();

		// Sender task
		spawn_local(async move
		{
			log::info!("WS Sender task started.");
			while let Some(frame) = outgoing.next().await
			{
				if ws_write_sink.send(WsMessage::Text(frame)).await.is_err()
				{
					log::error!("Error sending message via WebSocket in sender task.");
					break;
				}
			}
			log::info!("WS Sender task finished");
		});

		// Receiver task
		spawn_local(async move
		{
			log::info!("WebSocket receiver task started.");
			while let Some(msg_result) = ws_read_stream.next().await
			{
				match msg_result
				{
					Ok(WsMessage::Text(text)) =>
					{
						log::debug!("Received text: {}", text);
						if let Err(e) = session.borrow_mut().receive_frame(&text)
						{
							log::warn!("Dropping inbound frame: {}. Raw: {}", e, text);
						}
					}
					Ok(WsMessage::Bytes(bin)) =>
					{
						log::debug!("Ignoring binary frame (len: {})", bin.len());
					}
					Err(e) =>
					{
						log::error!("WebSocket error in receiver task: {:?}", e);
						break;
					}
				}
			}
			log::info!("WebSocket receiver task finished.");
		});

		Ok(())
	}
}
