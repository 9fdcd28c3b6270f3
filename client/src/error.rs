use chatterfly_shared::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError
{
	#[error("websocket connection failed: {0}")]
	Connection(String),

	#[error(transparent)]
	Protocol(#[from] ProtocolError),

	#[error("room list request failed: {0}")]
	Fetch(String),

	#[error("page is missing element #{0}")]
	MissingElement(&'static str),

	#[error("DOM call failed: {0}")]
	Dom(String),

	#[error("identity form has not been submitted yet")]
	MissingIdentity,
}
