//! Pure projections from presence snapshots to what the deck renders.
//!
//! Everything here is a function of its inputs; `now` is always passed
//! in so the derivations stay testable.

use crate::lanyard::types::{DiscordUser, Presence, Status};

const AVATAR_CDN: &str = "https://cdn.discordapp.com/avatars";
const APP_ASSET_CDN: &str = "https://cdn.discordapp.com/app-assets";

/// Header state derived from a presence snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceView {
    pub status: Status,
    pub username: Option<String>,
    pub avatar_url: String,
    pub animated: bool,
}

/// Now-playing card. `elapsed`/`total` are preformatted `m:ss`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    pub song: String,
    pub artist: String,
    pub album: String,
    pub album_art_url: Option<String>,
    pub percent: f64,
    pub elapsed: String,
    pub total: String,
}

/// In-game card
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub name: String,
    pub details: Option<String>,
    pub state: Option<String>,
    pub minutes_playing: Option<i64>,
    pub asset_url: Option<String>,
}

/// Both live activity cards; empty means the section disappears
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityView {
    pub track: Option<TrackView>,
    pub game: Option<GameView>,
}

impl ActivityView {
    pub fn is_empty(&self) -> bool {
        self.track.is_none() && self.game.is_none()
    }
}

pub fn presence_view(presence: &Presence, fallback_avatar: &str) -> PresenceView {
    let animated = presence
        .discord_user
        .avatar
        .as_deref()
        .is_some_and(|hash| hash.starts_with("a_"));
    PresenceView {
        status: presence.discord_status,
        username: presence.discord_user.username.clone(),
        avatar_url: avatar_url(&presence.discord_user, fallback_avatar),
        animated,
    }
}

/// CDN URL for the user's avatar. Animated avatars (hash prefixed with
/// `a_`) get the gif variant; no hash at all falls back to the
/// configured still image.
pub fn avatar_url(user: &DiscordUser, fallback: &str) -> String {
    match user.avatar.as_deref() {
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!("{}/{}/{}.{}?size=512", AVATAR_CDN, user.id, hash, ext)
        }
        None => fallback.to_string(),
    }
}

pub fn activity_view(presence: &Presence, now_ms: i64) -> ActivityView {
    let track = presence.spotify.as_ref().map(|spotify| {
        let duration = spotify.timestamps.end - spotify.timestamps.start;
        let elapsed = now_ms - spotify.timestamps.start;
        TrackView {
            song: spotify.song.clone(),
            artist: spotify.artist.clone(),
            album: spotify.album.clone(),
            album_art_url: spotify.album_art_url.clone(),
            percent: progress_percent(spotify.timestamps.start, spotify.timestamps.end, now_ms),
            elapsed: format_track_time(elapsed),
            total: format_track_time(duration),
        }
    });

    let game = presence.game_activity().map(|activity| {
        let asset_url = match (&activity.application_id, &activity.assets) {
            (Some(app_id), Some(assets)) => assets
                .large_image
                .as_ref()
                .map(|image| format!("{}/{}/{}.png", APP_ASSET_CDN, app_id, image)),
            _ => None,
        };
        GameView {
            name: activity.name.clone(),
            details: activity.details.clone(),
            state: activity.state.clone(),
            minutes_playing: activity
                .timestamps
                .and_then(|t| t.start)
                .map(|start| (now_ms - start).max(0) / 60_000),
            asset_url,
        }
    });

    ActivityView { track, game }
}

/// Track position as a percentage, clamped to 0..=100. Zero or negative
/// durations yield 0 so the bar never goes NaN.
pub fn progress_percent(start: i64, end: i64, now: i64) -> f64 {
    let duration = end - start;
    if duration <= 0 {
        return 0.0;
    }
    let elapsed = now - start;
    (elapsed as f64 / duration as f64 * 100.0).clamp(0.0, 100.0)
}

/// `m:ss` with seconds zero-padded, e.g. 125000 -> "2:05"
pub fn format_track_time(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Strip the scheme for display next to a link label
pub fn link_display(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("mailto:"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanyard::types::{Activity, ActivityTimestamps, Spotify, SpotifyTimestamps};

    fn bare_presence() -> Presence {
        serde_json::from_str(r#"{"discord_user": {"id": "843136836947410945"}}"#).unwrap()
    }

    fn spotify(start: i64, end: i64) -> Spotify {
        Spotify {
            song: "Duvardaki Resim".to_string(),
            artist: "Sagopa Kajmer".to_string(),
            album: "Kalp Hastası".to_string(),
            album_art_url: None,
            timestamps: SpotifyTimestamps { start, end },
        }
    }

    #[test]
    fn avatar_url_picks_gif_for_animated_hash() {
        let user = DiscordUser {
            id: "843136836947410945".to_string(),
            username: None,
            avatar: Some("a_deadbeef".to_string()),
        };
        assert_eq!(
            avatar_url(&user, "https://fallback.example/x.png"),
            "https://cdn.discordapp.com/avatars/843136836947410945/a_deadbeef.gif?size=512"
        );
    }

    #[test]
    fn avatar_url_picks_png_for_static_hash() {
        let user = DiscordUser {
            id: "843136836947410945".to_string(),
            username: None,
            avatar: Some("deadbeef".to_string()),
        };
        assert_eq!(
            avatar_url(&user, "https://fallback.example/x.png"),
            "https://cdn.discordapp.com/avatars/843136836947410945/deadbeef.png?size=512"
        );
    }

    #[test]
    fn avatar_url_missing_hash_uses_fallback() {
        let user = DiscordUser {
            id: "843136836947410945".to_string(),
            username: None,
            avatar: None,
        };
        assert_eq!(
            avatar_url(&user, "https://fallback.example/x.png"),
            "https://fallback.example/x.png"
        );
    }

    #[test]
    fn progress_percent_clamps_both_ends() {
        // before the track started
        assert_eq!(progress_percent(1000, 2000, 500), 0.0);
        // after it ended
        assert_eq!(progress_percent(1000, 2000, 9000), 100.0);
        // halfway
        assert_eq!(progress_percent(1000, 2000, 1500), 50.0);
    }

    #[test]
    fn progress_percent_zero_duration_is_zero() {
        assert_eq!(progress_percent(1000, 1000, 1500), 0.0);
        assert_eq!(progress_percent(2000, 1000, 1500), 0.0);
    }

    #[test]
    fn format_track_time_pads_seconds() {
        assert_eq!(format_track_time(125_000), "2:05");
        assert_eq!(format_track_time(0), "0:00");
        assert_eq!(format_track_time(59_999), "0:59");
        assert_eq!(format_track_time(60_000), "1:00");
        assert_eq!(format_track_time(-500), "0:00");
    }

    #[test]
    fn activity_view_empty_when_idle() {
        let view = activity_view(&bare_presence(), 0);
        assert!(view.is_empty());
    }

    #[test]
    fn activity_view_derives_track_progress() {
        let mut presence = bare_presence();
        presence.spotify = Some(spotify(1_000_000, 1_200_000));

        let view = activity_view(&presence, 1_050_000);
        let track = view.track.unwrap();
        assert_eq!(track.percent, 25.0);
        assert_eq!(track.elapsed, "0:50");
        assert_eq!(track.total, "3:20");
    }

    #[test]
    fn activity_view_elapsed_runs_past_total_unclamped() {
        // The percent clamps at 100 but the elapsed label keeps counting.
        let mut presence = bare_presence();
        presence.spotify = Some(spotify(0, 200_000));

        let view = activity_view(&presence, 250_000);
        let track = view.track.unwrap();
        assert_eq!(track.percent, 100.0);
        assert_eq!(track.elapsed, "4:10");
        assert_eq!(track.total, "3:20");
    }

    #[test]
    fn activity_view_derives_game_card() {
        let mut presence = bare_presence();
        presence.activities = vec![Activity {
            kind: 0,
            name: "Minecraft".to_string(),
            details: Some("Celestial Network".to_string()),
            state: None,
            application_id: Some("356875570916753438".to_string()),
            assets: Some(crate::lanyard::types::Assets {
                large_image: Some("571474671968911380".to_string()),
            }),
            timestamps: Some(ActivityTimestamps {
                start: Some(1_000_000),
                end: None,
            }),
        }];

        let view = activity_view(&presence, 1_000_000 + 3 * 60_000 + 30_000);
        let game = view.game.unwrap();
        assert_eq!(game.name, "Minecraft");
        assert_eq!(game.minutes_playing, Some(3));
        assert_eq!(
            game.asset_url.as_deref(),
            Some("https://cdn.discordapp.com/app-assets/356875570916753438/571474671968911380.png")
        );
    }

    #[test]
    fn presence_view_carries_status_and_animation() {
        let mut presence = bare_presence();
        presence.discord_user.username = Some("wraiths".to_string());
        presence.discord_user.avatar = Some("a_cafe".to_string());
        presence.discord_status = Status::Dnd;

        let view = presence_view(&presence, "https://fallback.example/x.png");
        assert_eq!(view.status, Status::Dnd);
        assert_eq!(view.username.as_deref(), Some("wraiths"));
        assert!(view.animated);
        assert!(view.avatar_url.ends_with(".gif?size=512"));
    }

    #[test]
    fn link_display_strips_schemes() {
        assert_eq!(link_display("https://github.com/wraithsdev"), "github.com/wraithsdev");
        assert_eq!(
            link_display("mailto:wraithsisbirligi@gmail.com"),
            "wraithsisbirligi@gmail.com"
        );
        assert_eq!(link_display("ftp://x"), "ftp://x");
    }
}
