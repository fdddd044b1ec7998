//! Wire types for the Lanyard presence API.
//!
//! The REST endpoint and the socket both deliver the same presence
//! snapshot shape; the socket wraps it in an opcode envelope.

use serde::Deserialize;

pub const OP_EVENT: u8 = 0;
pub const OP_HELLO: u8 = 1;
pub const OP_INITIALIZE: u8 = 2;
pub const OP_HEARTBEAT: u8 = 3;

pub const EVENT_INIT_STATE: &str = "INIT_STATE";
pub const EVENT_PRESENCE_UPDATE: &str = "PRESENCE_UPDATE";

/// Envelope returned by the REST endpoint
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Presence>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Error object attached when `success` is false
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope delivered on the socket
#[derive(Debug, Deserialize)]
pub struct SocketMessage {
    #[serde(default)]
    pub op: Option<u8>,
    #[serde(default)]
    pub t: Option<String>,
    #[serde(default)]
    pub d: Option<serde_json::Value>,
}

/// Payload of the server hello (op 1)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Hello {
    pub heartbeat_interval: u64,
}

/// One full presence snapshot for the watched user.
///
/// Snapshots are never merged; each one replaces the last wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct Presence {
    pub discord_user: DiscordUser,
    #[serde(default)]
    pub discord_status: Status,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub spotify: Option<Spotify>,
}

impl Presence {
    /// First real game activity, if any. Spotify shows up in `activities`
    /// as well, so it is filtered out by name here and surfaced through
    /// the dedicated `spotify` field instead.
    pub fn game_activity(&self) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|a| a.kind == activity_kind::PLAYING && a.name != "Spotify")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Discord status, coerced to `Offline` for anything unrecognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Idle,
    Dnd,
    #[default]
    #[serde(other)]
    Offline,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Online => "online",
            Status::Idle => "idle",
            Status::Dnd => "dnd",
            Status::Offline => "offline",
        }
    }
}

pub mod activity_kind {
    pub const PLAYING: i64 = 0;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: i64,
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub assets: Option<Assets>,
    #[serde(default)]
    pub timestamps: Option<ActivityTimestamps>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assets {
    #[serde(default)]
    pub large_image: Option<String>,
}

/// Millisecond epoch timestamps; game activities usually only carry `start`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActivityTimestamps {
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Spotify {
    pub song: String,
    pub artist: String,
    pub album: String,
    #[serde(default)]
    pub album_art_url: Option<String>,
    pub timestamps: SpotifyTimestamps,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotifyTimestamps {
    pub start: i64,
    pub end: i64,
}
