//! Background tasks that feed the deck.
//!
//! Each task owns its own connection and reports through one mpsc
//! channel; the app loop is the only consumer and the only owner of
//! widget state.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::github::{self, Repo};
use crate::lanyard::{rest, socket};
use crate::lanyard::types::Presence;
use crate::logging;
use crate::view::{self, ActivityView};

/// Refresh cadence for the activity cards
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Everything the background tasks can tell the app loop
#[derive(Debug)]
pub enum Update {
    /// Fresh presence snapshot (initial fetch or socket push)
    Presence(Presence),
    /// Activity poll result; empty view hides the section
    Activity(ActivityView),
    /// Activity poll failed; hide the section until a poll succeeds
    ActivityFailed,
    /// Repo grid finished loading
    Repos(Vec<Repo>),
    /// Repo fetch failed; the grid renders loaded and empty
    ReposFailed,
}

/// One-shot snapshot so the header has a status before the socket
/// finishes its handshake.
pub fn spawn_initial_presence(
    client: reqwest::Client,
    base: String,
    discord_id: String,
    tx: mpsc::Sender<Update>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match rest::fetch_presence(&client, &base, &discord_id).await {
            Ok(presence) => {
                let _ = tx.send(Update::Presence(presence)).await;
            }
            Err(err) => {
                logging::warn(&format!("Initial presence fetch failed: {}", err));
            }
        }
    })
}

/// Long-lived push channel; reconnects on its own
pub fn spawn_presence_socket(
    url: String,
    discord_id: String,
    tx: mpsc::Sender<Update>,
) -> JoinHandle<()> {
    tokio::spawn(socket::run(url, discord_id, tx))
}

/// 1s activity poll. Poll failures only log at debug.
pub fn spawn_activity_poll(
    client: reqwest::Client,
    base: String,
    discord_id: String,
    tx: mpsc::Sender<Update>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match rest::fetch_presence(&client, &base, &discord_id).await {
                Ok(presence) => {
                    let now = Utc::now().timestamp_millis();
                    let update = Update::Activity(view::activity_view(&presence, now));
                    if tx.send(update).await.is_err() {
                        return;
                    }
                }
                Err(err) => {
                    logging::debug(&format!("Activity poll failed: {}", err));
                    if tx.send(Update::ActivityFailed).await.is_err() {
                        return;
                    }
                }
            }
        }
    })
}

/// One fetch at startup fills the repo grid for the whole session
pub fn spawn_repo_fetch(
    client: reqwest::Client,
    base: String,
    user: String,
    limit: usize,
    tx: mpsc::Sender<Update>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match github::fetch_top_repos(&client, &base, &user, limit).await {
            Ok(repos) => {
                logging::info(&format!("Loaded {} repos for {}", repos.len(), user));
                let _ = tx.send(Update::Repos(repos)).await;
            }
            Err(err) => {
                logging::warn(&format!("Repo fetch failed: {}", err));
                let _ = tx.send(Update::ReposFailed).await;
            }
        }
    })
}
