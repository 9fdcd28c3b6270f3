use chatterfly_shared::{ClientMessage, Dispatch, RoomKey, dispatch};

use crate::ClientError;
use crate::view::ChatView;

/// Somewhere to put outbound text frames.
pub trait Outbox
{
	fn send_frame(&self, frame: String) -> Result<(), ClientError>;
}

/// Which chat page the session drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind
{
	/// One-to-one chat; messages go to the friend named on the identity form.
	Direct,
	/// Room chat; messages carry the room key.
	Room(RoomKey),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState
{
	pub sender: Option<String>,
	pub receiver: Option<String>,
}

/// State of one chat page for the lifetime of its socket.
pub struct ChatSession<O, V>
{
	page: PageKind,
	state: SessionState,
	outbox: O,
	view: V,
}

impl<O: Outbox, V: ChatView> ChatSession<O, V>
{
	pub fn new(page: PageKind, outbox: O, view: V) -> Self
	{
		Self
		{
			page,
			state: SessionState::default(),
			outbox,
			view,
		}
	}

	pub fn state(&self) -> &SessionState
	{
		&self.state
	}

	pub fn view(&self) -> &V
	{
		&self.view
	}

	/// Sends the identity frame and remembers who talks to whom.
	pub fn submit_identity(&mut self, user: &str, friend: &str, password: &str) -> Result<(), ClientError>
	{
		let client_msg = ClientMessage::Auth
		{
			user: user.to_string(),
			friend: friend.to_string(),
			password: password.to_string(),
		};
		self.outbox.send_frame(client_msg.to_frame()?)?;
		log::info!("Sent identity for {} -> {}", user, friend);

		self.state.sender = Some(user.to_string());
		self.state.receiver = Some(friend.to_string());
		self.view.show_pairing(user, friend);

		Ok(())
	}

	/// Sends `text` as a chat or room message and clears the input.
	pub fn submit_message(&mut self, text: &str) -> Result<(), ClientError>
	{
		let client_msg = match &self.page
		{
			PageKind::Direct =>
			{
				let (Some(sender), Some(receiver)) = (&self.state.sender, &self.state.receiver) else
				{
					return Err(ClientError::MissingIdentity);
				};
				ClientMessage::Chat
				{
					sender: sender.clone(),
					receiver: receiver.clone(),
					message: text.to_string(),
				}
			}
			PageKind::Room(key) => ClientMessage::Room
			{
				key: key.to_string(),
				message: text.to_string(),
			},
		};

		self.outbox.send_frame(client_msg.to_frame()?)?;
		log::debug!("Sent: {:?}", client_msg);
		self.view.clear_message_input();

		Ok(())
	}

	/// Applies one inbound text frame to the page.
	pub fn receive_frame(&mut self, frame: &str) -> Result<Dispatch, ClientError>
	{
		let outcome = dispatch(frame)?;
		match &outcome
		{
			Dispatch::AppendLine(line) =>
			{
				self.view.append_line(line);
				self.view.scroll_to_bottom();
			}
			Dispatch::SetRoomTitle(title) =>
			{
				log::info!("Room title is now {}", title);
				self.view.set_room_title(title);
			}
		}
		Ok(outcome)
	}
}
