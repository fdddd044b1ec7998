use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::config::Config;
use crate::feed::Update;
use crate::github::Repo;
use crate::logging;
use crate::view::{self, ActivityView, PresenceView};

/// Lifecycle of the live activity section
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityState {
    /// No poll has finished yet
    Loading,
    /// Latest poll result; an empty view hides the section
    Ready(ActivityView),
    /// Latest poll failed; the section renders nothing
    Errored,
}

/// All deck state. Fed exclusively through [`App::apply_update`]; the
/// tasks in `feed` never touch it directly.
pub struct App {
    config: Config,
    presence: Option<PresenceView>,
    activity: ActivityState,
    repos: Option<Vec<Repo>>,
    scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            presence: None,
            activity: ActivityState::Loading,
            repos: None,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn presence(&self) -> Option<&PresenceView> {
        self.presence.as_ref()
    }

    pub fn activity(&self) -> &ActivityState {
        &self.activity
    }

    /// `None` while loading; failures land as `Some` and empty
    pub fn repos(&self) -> Option<&[Repo]> {
        self.repos.as_deref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Route one feed update into widget state
    pub fn apply_update(&mut self, update: Update) {
        match update {
            Update::Presence(presence) => {
                self.presence = Some(view::presence_view(
                    &presence,
                    &self.config.profile.fallback_avatar,
                ));
            }
            Update::Activity(view) => {
                self.activity = ActivityState::Ready(view);
            }
            Update::ActivityFailed => {
                self.activity = ActivityState::Errored;
            }
            Update::Repos(repos) => {
                self.repos = Some(repos);
            }
            Update::ReposFailed => {
                self.repos = Some(Vec::new());
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            // Clamped against content height on the next draw
            KeyCode::End | KeyCode::Char('G') => self.scroll = u16::MAX,
            _ => {}
        }
    }

    /// Called from the draw pass, which is the only place that knows
    /// the rendered content height.
    pub(crate) fn clamp_scroll(&mut self, content_height: u16, viewport_height: u16) {
        let max = content_height.saturating_sub(viewport_height);
        if self.scroll > max {
            self.scroll = max;
        }
    }

    /// Run the deck until quit. The 1s tick keeps the clock and the
    /// track position label honest between feed updates.
    pub async fn run(
        mut self,
        mut terminal: DefaultTerminal,
        mut rx: mpsc::Receiver<Update>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut redraw = interval(Duration::from_secs(1));
        redraw.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            terminal.draw(|frame| super::ui::draw(frame, &mut self))?;

            if self.should_quit {
                break;
            }

            tokio::select! {
                _ = redraw.tick() => {}
                update = rx.recv() => {
                    match update {
                        Some(update) => self.apply_update(update),
                        // Every feed task is gone; nothing will ever change again
                        None => break,
                    }
                }
                event = event_stream.next() => {
                    match event {
                        Some(Ok(Event::Key(key))) => {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key.code, key.modifiers);
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            logging::error(&format!("Terminal event error: {}", err));
                            break;
                        }
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanyard::types::{Presence, Status};

    fn test_app() -> App {
        App::new(Config::default())
    }

    fn presence_json(json: &str) -> Presence {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn starts_loading_everywhere() {
        let app = test_app();
        assert!(app.presence().is_none());
        assert_eq!(*app.activity(), ActivityState::Loading);
        assert!(app.repos().is_none());
    }

    #[test]
    fn presence_update_replaces_snapshot_wholesale() {
        let mut app = test_app();
        app.apply_update(Update::Presence(presence_json(
            r#"{"discord_user": {"id": "1", "avatar": "abc"}, "discord_status": "online"}"#,
        )));
        let first = app.presence().unwrap().clone();
        assert_eq!(first.status, Status::Online);
        assert!(first.avatar_url.ends_with("abc.png?size=512"));

        // Next snapshot has no avatar; nothing from the old one survives
        app.apply_update(Update::Presence(presence_json(
            r#"{"discord_user": {"id": "1"}, "discord_status": "dnd"}"#,
        )));
        let second = app.presence().unwrap();
        assert_eq!(second.status, Status::Dnd);
        assert_eq!(
            second.avatar_url,
            Config::default().profile.fallback_avatar
        );
    }

    #[test]
    fn activity_errors_suppress_then_recover() {
        let mut app = test_app();
        app.apply_update(Update::ActivityFailed);
        assert_eq!(*app.activity(), ActivityState::Errored);

        app.apply_update(Update::Activity(ActivityView::default()));
        assert_eq!(*app.activity(), ActivityState::Ready(ActivityView::default()));
    }

    #[test]
    fn repo_failure_is_loaded_and_empty() {
        let mut app = test_app();
        app.apply_update(Update::ReposFailed);
        assert_eq!(app.repos(), Some(&[][..]));
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut app = test_app();
        app.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(app.scroll(), u16::MAX);
        app.clamp_scroll(100, 30);
        assert_eq!(app.scroll(), 70);

        app.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn quit_keys() {
        for (code, modifiers) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = test_app();
            app.handle_key(code, modifiers);
            assert!(app.should_quit);
        }
    }
}
