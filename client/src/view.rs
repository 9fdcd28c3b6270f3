use chatterfly_shared::RoomLink;

/// The parts of a chat page a session writes to.
pub trait ChatView
{
	fn append_line(&mut self, line: &str);

	fn set_room_title(&mut self, title: &str);

	/// Brings the newest row into view.
	fn scroll_to_bottom(&mut self);

	fn show_pairing(&mut self, sender: &str, receiver: &str);

	fn clear_message_input(&mut self);
}

pub trait RoomListView
{
	/// Replaces whatever list was shown before.
	fn render_links(&mut self, links: &[RoomLink]);
}
