pub mod api;
pub mod config;
pub mod content;
pub mod feed;
pub mod github;
pub mod lanyard;
pub mod logging;
pub mod storage;
pub mod tui;
pub mod view;
