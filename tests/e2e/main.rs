//! End-to-end tests for wraithdeck using mock HTTP endpoints
//!
//! These tests run the real feed tasks against mockito servers and
//! drive their updates into a real App, without touching the network.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::timeout;

use wraithdeck::config::Config;
use wraithdeck::feed::{self, Update};
use wraithdeck::lanyard::types::{Presence, SocketMessage};
use wraithdeck::lanyard::Status;
use wraithdeck::tui::{ActivityState, App};

const DISCORD_ID: &str = "843136836947410945";

async fn recv(rx: &mut mpsc::Receiver<Update>) -> Update {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for an update")
        .expect("feed channel closed")
}

fn presence_path() -> String {
    format!("/users/{}", DISCORD_ID)
}

/// Test that the startup snapshot reaches the header
#[tokio::test]
async fn test_initial_snapshot_fills_header() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "success": true,
        "data": {
            "discord_user": {
                "id": DISCORD_ID,
                "username": "wraiths",
                "avatar": "a_8f3cfd7e145d6f3b"
            },
            "discord_status": "idle",
            "activities": []
        }
    });
    let mock = server
        .mock("GET", presence_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::channel(8);
    let handle = feed::spawn_initial_presence(
        reqwest::Client::new(),
        server.url(),
        DISCORD_ID.to_string(),
        tx,
    );

    let mut app = App::new(Config::default());
    app.apply_update(recv(&mut rx).await);
    handle.await?;

    let view = app.presence().expect("header should be populated");
    assert_eq!(view.status, Status::Idle);
    assert!(view.animated);
    assert!(view.avatar_url.ends_with("/a_8f3cfd7e145d6f3b.gif?size=512"));

    mock.assert_async().await;
    Ok(())
}

/// Test that a raw socket frame replaces the header wholesale
#[test]
fn test_presence_update_frame_replaces_header() -> Result<()> {
    let frame = json!({
        "op": 0,
        "seq": 3,
        "t": "PRESENCE_UPDATE",
        "d": {
            "discord_user": {"id": DISCORD_ID, "username": "wraiths", "avatar": null},
            "discord_status": "streaming",
            "activities": []
        }
    });

    let message: SocketMessage = serde_json::from_value(frame)?;
    assert_eq!(message.t.as_deref(), Some("PRESENCE_UPDATE"));
    let presence: Presence = serde_json::from_value(message.d.expect("frame payload"))?;

    let mut app = App::new(Config::default());
    app.apply_update(Update::Presence(presence));

    let view = app.presence().expect("header should be populated");
    // Unrecognized status strings coerce to offline
    assert_eq!(view.status, Status::Offline);
    // No avatar hash falls back to the configured still image
    assert_eq!(view.avatar_url, Config::default().profile.fallback_avatar);
    Ok(())
}

/// Test that a failed poll hides the section and the next good poll restores it
#[tokio::test]
async fn test_activity_poll_failure_then_recovery() -> Result<()> {
    let mut app = App::new(Config::default());

    let mut down = mockito::Server::new_async().await;
    let down_mock = down
        .mock("GET", presence_path().as_str())
        .with_status(500)
        .with_body("upstream broke")
        .expect_at_least(1)
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::channel(8);
    let handle = feed::spawn_activity_poll(
        reqwest::Client::new(),
        down.url(),
        DISCORD_ID.to_string(),
        tx,
    );
    app.apply_update(recv(&mut rx).await);
    handle.abort();

    assert_eq!(*app.activity(), ActivityState::Errored);
    down_mock.assert_async().await;

    let now = Utc::now().timestamp_millis();
    let mut up = mockito::Server::new_async().await;
    let body = json!({
        "success": true,
        "data": {
            "discord_user": {"id": DISCORD_ID, "username": "wraiths", "avatar": null},
            "discord_status": "online",
            "activities": [],
            "spotify": {
                "song": "Affet",
                "artist": "Müslüm Gürses",
                "album": "Affet",
                "album_art_url": "https://i.scdn.co/image/abc",
                "timestamps": {"start": now - 60_000, "end": now + 60_000}
            }
        }
    });
    let up_mock = up
        .mock("GET", presence_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect_at_least(1)
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::channel(8);
    let handle = feed::spawn_activity_poll(
        reqwest::Client::new(),
        up.url(),
        DISCORD_ID.to_string(),
        tx,
    );
    app.apply_update(recv(&mut rx).await);
    handle.abort();

    match app.activity() {
        ActivityState::Ready(view) => {
            let track = view.track.as_ref().expect("track card");
            assert_eq!(track.song, "Affet");
            assert!(track.percent > 40.0 && track.percent < 60.0);
            assert_eq!(track.total, "2:00");
        }
        other => panic!("expected ready activity, got {:?}", other),
    }
    up_mock.assert_async().await;
    Ok(())
}

/// Test that the repo grid arrives sorted by stars and capped at six
#[tokio::test]
async fn test_repo_grid_sorted_and_capped() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let repos: Vec<serde_json::Value> = [
        ("dcstats", 3),
        ("wraith-site", 12),
        ("blog", 0),
        ("uptime", 7),
        ("dotfiles", 1),
        ("paste", 5),
        ("shorten", 9),
    ]
    .iter()
    .map(|(name, stars)| {
        json!({
            "name": name,
            "html_url": format!("https://github.com/wraithsdev/{}", name),
            "description": null,
            "language": "TypeScript",
            "stargazers_count": stars,
            "forks_count": 1
        })
    })
    .collect();
    let mock = server
        .mock("GET", "/users/wraithsdev/repos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::Value::Array(repos).to_string())
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::channel(8);
    let handle = feed::spawn_repo_fetch(
        reqwest::Client::new(),
        server.url(),
        "wraithsdev".to_string(),
        6,
        tx,
    );

    let mut app = App::new(Config::default());
    app.apply_update(recv(&mut rx).await);
    handle.await?;

    let grid = app.repos().expect("grid should be loaded");
    let names: Vec<&str> = grid.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["wraith-site", "shorten", "uptime", "paste", "dcstats", "dotfiles"]
    );
    assert_eq!(grid[0].description_or_default(), "No description provided");

    mock.assert_async().await;
    Ok(())
}

/// Test that a failed repo fetch still marks the grid as loaded
#[tokio::test]
async fn test_repo_fetch_failure_marks_grid_loaded() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/wraithsdev/repos")
        .with_status(403)
        .with_body("rate limited")
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::channel(8);
    let handle = feed::spawn_repo_fetch(
        reqwest::Client::new(),
        server.url(),
        "wraithsdev".to_string(),
        6,
        tx,
    );

    let mut app = App::new(Config::default());
    assert!(app.repos().is_none());
    app.apply_update(recv(&mut rx).await);
    handle.await?;

    // Loaded but empty, so the deck stops showing the placeholder
    assert_eq!(app.repos(), Some(&[][..]));

    mock.assert_async().await;
    Ok(())
}
