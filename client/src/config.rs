pub const DEFAULT_WEBSOCKET_PATH: &str = "/websocket";
pub const DEFAULT_ROOM_LIST_ENDPOINT: &str = "http://localhost:4444/linkdata";

/// Where the pages find their collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig
{
	pub websocket_path: String,
	pub room_list_endpoint: String,
}

impl Default for ClientConfig
{
	fn default() -> Self
	{
		Self
		{
			websocket_path: DEFAULT_WEBSOCKET_PATH.to_string(),
			room_list_endpoint: DEFAULT_ROOM_LIST_ENDPOINT.to_string(),
		}
	}
}

impl ClientConfig
{
	/// Builds the socket URL for a page served over `protocol` (as reported
	/// by `window.location.protocol`, e.g. `"https:"`) from `host`.
	pub fn websocket_url(&self, protocol: &str, host: &str) -> String
	{
		let ws_protocol = if protocol == "https:" { "wss:" } else { "ws:" };
		format!("{}//{}{}", ws_protocol, host, self.websocket_path)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use pretty_assertions::assert_eq;

	#[test_log::test]
	fn plain_pages_use_ws()
	{
		let config = ClientConfig::default();

		assert_eq!(config.websocket_url("http:", "localhost:4444"), "ws://localhost:4444/websocket");
	}

	#[test_log::test]
	fn secure_pages_use_wss()
	{
		let config = ClientConfig::default();

		assert_eq!(config.websocket_url("https:", "chat.example"), "wss://chat.example/websocket");
	}

	#[test_log::test]
	fn default_room_list_endpoint()
	{
		assert_eq!(ClientConfig::default().room_list_endpoint, "http://localhost:4444/linkdata");
	}
}
