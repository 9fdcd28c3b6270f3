//! Wiring for the three host pages.

use std::cell::RefCell;
use std::rc::Rc;

use chatterfly_shared::room_key_from_path;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{self, DomChatView, DomRoomListView};
use crate::rooms::{fetch_listing, render_listing};
use crate::session::{ChatSession, PageKind};
use crate::socket::{self, ChannelOutbox};
use crate::{ClientConfig, ClientError};

type PageSession = Rc<RefCell<ChatSession<ChannelOutbox, DomChatView>>>;

fn location() -> web_sys::Location
{
	gloo_utils::window().location()
}

fn js_err(e: wasm_bindgen::JsValue) -> ClientError
{
	ClientError::Dom(format!("{:?}", e))
}

fn open_session(config: &ClientConfig, page: PageKind, view: DomChatView) -> Result<PageSession, ClientError>
{
	let location = location();
	let ws_url = config.websocket_url(&location.protocol().map_err(js_err)?, &location.host().map_err(js_err)?);

	let (outbox, outgoing) = socket::channel();
	let session = Rc::new(RefCell::new(ChatSession::new(page, outbox, view)));
	socket::connect(&ws_url, outgoing, session.clone())?;

	Ok(session)
}

fn bind_message_form(session: &PageSession, form_id: &'static str, input_id: &'static str) -> Result<(), ClientError>
{
	let session = session.clone();
	let text = dom::input(input_id)?;
	dom::on_submit(form_id, move ||
	{
		if let Err(e) = session.borrow_mut().submit_message(&text.value())
		{
			log::warn!("Message not sent: {}", e);
		}
	})
}

pub fn start_chatbox(config: &ClientConfig) -> Result<(), ClientError>
{
	let session = open_session(config, PageKind::Direct, DomChatView::direct()?)?;

	let username = dom::input("username")?;
	let friend = dom::input("friend")?;
	let password = dom::input("password")?;
	{
		let session = session.clone();
		dom::on_submit("input-form", move ||
		{
			if let Err(e) = session.borrow_mut().submit_identity(&username.value(), &friend.value(), &password.value())
			{
				log::error!("Identity not sent: {}", e);
			}
		})?;
	}

	bind_message_form(&session, "chat-form", "message")
}

pub fn start_chatroom(config: &ClientConfig) -> Result<(), ClientError>
{
	let path = location().pathname().map_err(js_err)?;
	let key = room_key_from_path(&path)?;
	log::info!("Joining room {}", key);

	let session = open_session(config, PageKind::Room(key), DomChatView::room()?)?;
	bind_message_form(&session, "input-form", "input-text")
}

pub fn load_room_list(config: &ClientConfig) -> Result<(), ClientError>
{
	let mut view = DomRoomListView::new()?;
	let origin = location().origin().map_err(js_err)?;
	let endpoint = config.room_list_endpoint.clone();

	spawn_local(async move
	{
		match fetch_listing(&endpoint).await
		{
			Ok(listing) => render_listing(&listing, &origin, &mut view),
			Err(e) => log::error!("Failed to load chat rooms: {}", e),
		}
	});

	Ok(())
}
