mod app;
mod theme;
mod ui;

pub use app::{ActivityState, App};
