use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chatterfly_server::{ServerConfig, app, load_catalogue};
use chatterfly_shared::{RoomEntry, RoomListing};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn manifest_dir() -> PathBuf
{
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn test_config() -> ServerConfig
{
    ServerConfig {
        port: 0,
        public_dir: manifest_dir().join("public"),
        client_dist_dir: manifest_dir().join("no-such-bundle"),
        rooms_file: manifest_dir().join("rooms.json"),
    }
}

fn one_room() -> RoomListing
{
    RoomListing {
        chatrooms: vec![RoomEntry {
            key: "k1".to_string(),
            name: "Room One".to_string(),
        }],
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String)
{
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, location, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn link_data_serves_catalogue()
{
    let (status, _, body) = get(app(&test_config(), one_room()), "/linkdata").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"Chatrooms":[{"Key":"k1","ChatRoomName":"Room One"}]}"#);
}

#[tokio::test]
async fn empty_catalogue_serves_empty_list()
{
    let (status, _, body) = get(app(&test_config(), RoomListing::default()), "/linkdata").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"Chatrooms":[]}"#);
}

#[tokio::test]
async fn room_page_is_served_for_any_key()
{
    for uri in ["/chatroom/c/abc123/", "/chatroom/abc123/", "/chatroom/cat/"] {
        let (status, _, body) = get(app(&test_config(), one_room()), uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("start_chatroom"), "{uri}");
        assert!(body.contains(r#"id="chat-text""#), "{uri}");
    }
}

#[tokio::test]
async fn paths_without_slash_redirect()
{
    for (uri, target) in [
        ("/chatroom/c/abc123", "/chatroom/c/abc123/"),
        ("/chatroom/cat", "/chatroom/cat/"),
        ("/chatbox", "/chatbox/"),
    ] {
        let (status, location, _) = get(app(&test_config(), one_room()), uri).await;

        assert_eq!(status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location.as_deref(), Some(target), "{uri}");
    }
}

#[tokio::test]
async fn chatbox_and_room_list_pages_are_served()
{
    let (status, _, body) = get(app(&test_config(), one_room()), "/chatbox/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="usersender""#));

    let (status, _, body) = get(app(&test_config(), one_room()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="chatrooms""#));
}

#[tokio::test]
async fn catalogue_file_is_loaded()
{
    let listing = load_catalogue(&test_config().rooms_file).await.unwrap();

    assert_eq!(
        listing.chatrooms.iter().map(|room| room.key.as_str()).collect::<Vec<_>>(),
        vec!["general", "rust-help"]
    );
}

#[tokio::test]
async fn missing_catalogue_is_empty()
{
    let listing = load_catalogue(&manifest_dir().join("missing.json")).await.unwrap();

    assert_eq!(listing, RoomListing::default());
}
