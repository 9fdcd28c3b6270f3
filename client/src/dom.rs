use chatterfly_shared::RoomLink;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::ClientError;
use crate::view::{ChatView, RoomListView};

pub fn element(id: &'static str) -> Result<Element, ClientError>
{
	gloo_utils::document()
		.get_element_by_id(id)
		.ok_or(ClientError::MissingElement(id))
}

pub fn input(id: &'static str) -> Result<HtmlInputElement, ClientError>
{
	element(id)?
		.dyn_into::<HtmlInputElement>()
		.map_err(|_| ClientError::Dom(format!("#{} is not an input element", id)))
}

fn optional_element(id: &str) -> Option<Element>
{
	gloo_utils::document().get_element_by_id(id)
}

/// Runs `f` once the document has been parsed.
pub fn on_ready<F>(f: F)
where
	F: FnOnce() + 'static,
{
	let document = gloo_utils::document();
	if document.ready_state() != "loading"
	{
		f();
		return;
	}

	let callback = Closure::once_into_js(f);
	if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
	{
		log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
	}
}

/// Calls `handler` on every submit of the form, suppressing navigation.
pub fn on_submit<F>(form_id: &'static str, mut handler: F) -> Result<(), ClientError>
where
	F: FnMut() + 'static,
{
	let form = element(form_id)?;
	let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event|
	{
		event.prevent_default();
		handler();
	});

	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
		.map_err(|e| ClientError::Dom(format!("{:?}", e)))?;
	// The listener lives as long as the page.
	closure.forget();

	Ok(())
}

fn create(document: &Document, tag: &str) -> Option<Element>
{
	match document.create_element(tag)
	{
		Ok(el) => Some(el),
		Err(e) =>
		{
			log::error!("Failed to create <{}>: {:?}", tag, e);
			None
		}
	}
}

fn append(parent: &Element, child: &Element)
{
	if let Err(e) = parent.append_child(child)
	{
		log::error!("Failed to append <{}>: {:?}", child.tag_name(), e);
	}
}

pub struct DomChatView
{
	messages: Element,
	input: HtmlInputElement,
	title: Option<Element>,
	pairing: Option<Element>,
}

impl DomChatView
{
	/// The one-to-one chat page.
	pub fn direct() -> Result<Self, ClientError>
	{
		Ok(Self
		{
			messages: element("chatbox")?,
			input: input("message")?,
			title: optional_element("chatroom"),
			pairing: Some(element("usersender")?),
		})
	}

	/// The room chat page.
	pub fn room() -> Result<Self, ClientError>
	{
		Ok(Self
		{
			messages: element("chat-text")?,
			input: input("input-text")?,
			title: Some(element("chatroom")?),
			pairing: None,
		})
	}
}

impl ChatView for DomChatView
{
	fn append_line(&mut self, line: &str)
	{
		if let Some(p) = create(&gloo_utils::document(), "p")
		{
			p.set_text_content(Some(line));
			append(&self.messages, &p);
		}
	}

	fn set_room_title(&mut self, title: &str)
	{
		match &self.title
		{
			Some(el) => el.set_text_content(Some(title)),
			None => log::warn!("Page has no #chatroom element for room title {}", title),
		}
	}

	fn scroll_to_bottom(&mut self)
	{
		self.messages.set_scroll_top(self.messages.scroll_height());
	}

	fn show_pairing(&mut self, sender: &str, receiver: &str)
	{
		if let Some(el) = &self.pairing
		{
			el.set_text_content(Some(&format!("Sender: {} | Receiver: {}", sender, receiver)));
		}
	}

	fn clear_message_input(&mut self)
	{
		self.input.set_value("");
	}
}

pub struct DomRoomListView
{
	root: Element,
}

impl DomRoomListView
{
	pub fn new() -> Result<Self, ClientError>
	{
		Ok(Self { root: element("chatrooms")? })
	}
}

impl RoomListView for DomRoomListView
{
	fn render_links(&mut self, links: &[RoomLink])
	{
		let document = gloo_utils::document();
		let Some(list) = create(&document, "ul") else
		{
			return;
		};

		for link in links
		{
			let (Some(item), Some(anchor)) = (create(&document, "li"), create(&document, "a")) else
			{
				continue;
			};
			if let Err(e) = anchor.set_attribute("href", &link.href)
			{
				log::error!("Failed to set href {}: {:?}", link.href, e);
			}
			anchor.set_text_content(Some(&link.label));
			append(&item, &anchor);
			append(&list, &item);
		}

		self.root.set_text_content(None);
		append(&self.root, &list);
	}
}
