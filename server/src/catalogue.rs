use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use chatterfly_shared::RoomListing;

/// Loads the room catalogue. A missing file is an empty catalogue.
pub async fn load_catalogue(path: &Path) -> anyhow::Result<RoomListing>
{
    let body = match tokio::fs::read_to_string(path).await {
        Ok(body) => body,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("No room catalogue at {}, serving an empty list.", path.display());
            return Ok(RoomListing::default());
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };

    let listing: RoomListing =
        serde_json::from_str(&body).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!("Loaded {} chat rooms from {}", listing.chatrooms.len(), path.display());

    Ok(listing)
}
