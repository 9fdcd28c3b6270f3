//! Development server for the chat pages.
//!
//! Serves the host pages, the compiled client bundle and the room listing.
//! The chat socket itself is provided by a separate backend.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::Uri,
    response::Redirect,
    routing::get,
};
use chatterfly_shared::RoomListing;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

mod catalogue;
mod config;

pub use catalogue::load_catalogue;
pub use config::{DEFAULT_PORT, ServerConfig};

struct AppState
{
    rooms: RoomListing,
}

pub fn app(config: &ServerConfig, rooms: RoomListing) -> Router
{
    let chatroom_page = config.public_dir.join("chatroom/index.html");
    let public_serve_dir = ServeDir::new(&config.public_dir)
        .append_index_html_on_directories(true);

    Router::new()
        .route("/linkdata", get(link_data))
        .route_service("/chatbox/", ServeFile::new(config.public_dir.join("chatbox/index.html")))
        .route_service("/chatroom/:key/", ServeFile::new(&chatroom_page))
        .route_service("/chatroom/c/:key/", ServeFile::new(&chatroom_page))
        .route("/chatbox", get(add_trailing_slash))
        .route("/chatroom/:key", get(add_trailing_slash))
        .route("/chatroom/c/:key", get(add_trailing_slash))
        .nest_service("/pkg", ServeDir::new(&config.client_dist_dir))
        .fallback_service(public_serve_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { rooms }))
}

async fn link_data(State(state): State<Arc<AppState>>) -> Json<RoomListing>
{
    Json(state.rooms.clone())
}

async fn add_trailing_slash(uri: Uri) -> Redirect
{
    Redirect::to(&format!("{}/", uri.path()))
}
