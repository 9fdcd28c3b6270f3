use chatterfly_shared::{ProtocolError, RoomListing};

use crate::ClientError;
use crate::view::RoomListView;

pub fn parse_listing(body: &str) -> Result<RoomListing, ClientError>
{
	serde_json::from_str(body).map_err(|e| ClientError::Protocol(ProtocolError::MalformedPayload(e)))
}

/// Renders one link per room; an empty listing clears the list.
pub fn render_listing<V: RoomListView>(listing: &RoomListing, origin: &str, view: &mut V)
{
	let links = listing.links(origin);
	log::info!("Rendering {} chat rooms", links.len());
	view.render_links(&links);
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_listing(endpoint: &str) -> Result<RoomListing, ClientError>
{
	use gloo_net::http::Request;

	let response = Request::get(endpoint)
		.send()
		.await
		.map_err(|e| ClientError::Fetch(e.to_string()))?;

	if !response.ok()
	{
		return Err(ClientError::Fetch(format!("{} answered {} {}", endpoint, response.status(), response.status_text())));
	}

	let body = response.text().await.map_err(|e| ClientError::Fetch(e.to_string()))?;
	parse_listing(&body)
}
