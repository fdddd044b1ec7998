//! Palette for the deck.
//!
//! Colors are lifted straight from the page this replaces: zinc grays,
//! a violet accent, green for Spotify, purple for the game card.

use ratatui::style::Color;

use crate::lanyard::types::Status;

pub const TEXT: Color = Color::Rgb(228, 228, 231); // zinc-200
pub const MUTED: Color = Color::Rgb(161, 161, 170); // zinc-400
pub const DIM: Color = Color::Rgb(113, 113, 122); // zinc-500
pub const RULE: Color = Color::Rgb(63, 63, 70); // zinc-700
pub const ACCENT: Color = Color::Rgb(167, 139, 250); // violet-400
pub const SPOTIFY: Color = Color::Rgb(74, 222, 128); // green-400
pub const SPOTIFY_BAR: Color = Color::Rgb(34, 197, 94); // green-500
pub const GAME: Color = Color::Rgb(192, 132, 252); // purple-400
pub const STAR: Color = Color::Rgb(250, 204, 21); // yellow-400
pub const BAR_BG: Color = Color::Rgb(55, 65, 81); // gray-700
pub const CHIP_BG: Color = Color::Rgb(39, 39, 42); // zinc-800

const STATUS_ONLINE: Color = Color::Rgb(34, 197, 94); // green-500
const STATUS_IDLE: Color = Color::Rgb(234, 179, 8); // yellow-500
const STATUS_DND: Color = Color::Rgb(239, 68, 68); // red-500
const STATUS_OFFLINE: Color = Color::Rgb(107, 114, 128); // gray-500

const LANGUAGE_DEFAULT: Color = Color::Rgb(0x99, 0x99, 0x99);

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Online => STATUS_ONLINE,
        Status::Idle => STATUS_IDLE,
        Status::Dnd => STATUS_DND,
        Status::Offline => STATUS_OFFLINE,
    }
}

/// GitHub linguist colors for the languages that actually show up on
/// the tracked account, everything else gets the neutral gray.
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::Rgb(0xf1, 0xe0, 0x5a),
        "TypeScript" => Color::Rgb(0x31, 0x78, 0xc6),
        "Python" => Color::Rgb(0x35, 0x72, 0xa5),
        "Java" => Color::Rgb(0xb0, 0x72, 0x19),
        "HTML" => Color::Rgb(0xe3, 0x4c, 0x26),
        "CSS" => Color::Rgb(0x56, 0x3d, 0x7c),
        "Shell" => Color::Rgb(0x89, 0xe0, 0x51),
        "C" => Color::Rgb(0x55, 0x55, 0x55),
        "C++" => Color::Rgb(0xf3, 0x4b, 0x7d),
        "Go" => Color::Rgb(0x00, 0xad, 0xd8),
        "Ruby" => Color::Rgb(0x70, 0x15, 0x16),
        _ => LANGUAGE_DEFAULT,
    }
}
