use chrono::Local;
use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::{ActivityState, App};
use super::theme;
use crate::content;
use crate::github::Repo;
use crate::view;

const TRACK_BAR_WIDTH: usize = 24;
const RULE_WIDTH: usize = 60;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Layout: scrollable deck + one status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let content_area = chunks[0];
    let lines = deck_lines(app, content_area.width);
    app.clamp_scroll(lines.len() as u16, content_area.height);

    let deck = Paragraph::new(Text::from(lines)).scroll((app.scroll(), 0));
    frame.render_widget(deck, content_area);

    draw_status_line(frame, chunks[1]);
}

/// Every line of the deck, top to bottom, pre-wrapped to `width`
fn deck_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = (width as usize).max(20);
    let mut lines = Vec::new();

    header_lines(app, &mut lines);
    about_lines(&mut lines, width);
    activity_lines(app.activity(), &mut lines);
    if app.config().display.technologies {
        tech_lines(&mut lines, width);
    }
    repo_lines(app.repos(), &mut lines, width);
    if app.config().display.experience {
        experience_lines(&mut lines);
    }
    footer_lines(&mut lines);

    lines
}

fn header_lines(app: &App, lines: &mut Vec<Line<'static>>) {
    let mut title = vec![Span::styled(
        content::NAME,
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    )];
    match app.presence() {
        Some(view) => {
            title.push(Span::raw("  "));
            title.push(Span::styled(
                "●",
                Style::default().fg(theme::status_color(view.status)),
            ));
            title.push(Span::styled(
                format!(" {}", view.status.label()),
                Style::default().fg(theme::MUTED),
            ));
        }
        None => {
            title.push(Span::raw("  "));
            title.push(Span::styled("●", Style::default().fg(theme::DIM)));
        }
    }
    lines.push(Line::from(title));

    lines.push(Line::from(Span::styled(
        content::TAGLINE,
        Style::default().fg(theme::ACCENT),
    )));

    let mut location = vec![Span::styled(
        content::LOCATION,
        Style::default().fg(theme::TEXT),
    )];
    if app.config().display.clock {
        location.push(Span::raw("  "));
        location.push(Span::styled("●", Style::default().fg(theme::ACCENT)));
        location.push(Span::styled(
            format!(" {}", Local::now().format("%I:%M %p")),
            Style::default().fg(theme::MUTED),
        ));
    }
    lines.push(Line::from(location));

    let avatar = match app.presence() {
        Some(view) => view.avatar_url.clone(),
        None => app.config().profile.fallback_avatar.clone(),
    };
    lines.push(Line::from(Span::styled(
        avatar,
        Style::default().fg(theme::DIM),
    )));

    lines.push(Line::from(""));
    for link in content::LINKS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", link.label),
                Style::default().fg(theme::TEXT),
            ),
            Span::styled(
                view::link_display(link.url).to_string(),
                Style::default().fg(theme::ACCENT),
            ),
        ]));
    }
    lines.push(Line::from(""));
}

fn about_lines(lines: &mut Vec<Line<'static>>, width: usize) {
    lines.push(Line::from(vec![
        Span::raw("👋 "),
        Span::styled(
            "Merhaba, Ben ",
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            content::ABOUT_NAME,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    for row in wrap_text(content::ABOUT, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(theme::MUTED),
        )));
    }
    lines.push(Line::from(""));
    for row in wrap_text(content::CONTACT, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(theme::MUTED),
        )));
    }
    lines.push(Line::from(""));
}

fn activity_lines(state: &ActivityState, lines: &mut Vec<Line<'static>>) {
    let view = match state {
        ActivityState::Loading => {
            lines.push(Line::from(Span::styled(
                "• • •",
                Style::default().fg(theme::DIM),
            )));
            lines.push(Line::from(""));
            return;
        }
        // Errors hide the section until the next successful poll
        ActivityState::Errored => return,
        ActivityState::Ready(view) if view.is_empty() => return,
        ActivityState::Ready(view) => view,
    };

    if let Some(track) = &view.track {
        lines.push(Line::from(Span::styled(
            "♪ Şu Anda Müzik Dinliyor",
            Style::default()
                .fg(theme::SPOTIFY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", track.song),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("  Sanatçı: ", Style::default().fg(theme::MUTED)),
            Span::styled(track.artist.clone(), Style::default().fg(theme::TEXT)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Albüm: ", Style::default().fg(theme::DIM)),
            Span::styled(track.album.clone(), Style::default().fg(theme::MUTED)),
        ]));

        let filled = ((track.percent / 100.0) * TRACK_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(TRACK_BAR_WIDTH);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", track.elapsed), Style::default().fg(theme::MUTED)),
            Span::styled("█".repeat(filled), Style::default().fg(theme::SPOTIFY_BAR)),
            Span::styled(
                "─".repeat(TRACK_BAR_WIDTH - filled),
                Style::default().fg(theme::BAR_BG),
            ),
            Span::styled(format!(" {}", track.total), Style::default().fg(theme::MUTED)),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(game) = &view.game {
        lines.push(Line::from(Span::styled(
            "🎮 Şu Anda Oynuyor",
            Style::default().fg(theme::GAME).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", game.name),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )));
        if let Some(details) = &game.details {
            lines.push(Line::from(Span::styled(
                format!("  {}", details),
                Style::default().fg(theme::MUTED),
            )));
        }
        if let Some(state) = &game.state {
            lines.push(Line::from(Span::styled(
                format!("  {}", state),
                Style::default().fg(theme::DIM),
            )));
        }
        if let Some(minutes) = game.minutes_playing {
            lines.push(Line::from(Span::styled(
                format!("  {} dakikadır oynuyor", minutes),
                Style::default().fg(theme::DIM),
            )));
        }
        lines.push(Line::from(""));
    }
}

fn tech_lines(lines: &mut Vec<Line<'static>>, width: usize) {
    rule(lines);
    section_header(lines, content::SECTION_TECH);

    let chip_style = Style::default().fg(theme::MUTED).bg(theme::CHIP_BG);
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;
    for tech in content::TECHNOLOGIES {
        let chip = format!(" {} ", tech);
        let chip_width = chip.width() + 1;
        if row_width + chip_width > width && !row.is_empty() {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        row.push(Span::styled(chip, chip_style));
        row.push(Span::raw(" "));
        row_width += chip_width;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines.push(Line::from(""));
}

fn repo_lines(repos: Option<&[Repo]>, lines: &mut Vec<Line<'static>>, width: usize) {
    rule(lines);
    section_header(lines, content::SECTION_REPOS);

    let repos = match repos {
        None => {
            lines.push(Line::from(Span::styled(
                "• • •",
                Style::default().fg(theme::DIM),
            )));
            lines.push(Line::from(""));
            return;
        }
        // A failed fetch lands here as an empty list: loaded, nothing to show
        Some(repos) => repos,
    };

    for repo in repos {
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                repo.name.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ★ ", Style::default().fg(theme::STAR)),
            Span::styled(
                repo.stargazers_count.to_string(),
                Style::default().fg(theme::MUTED),
            ),
            Span::styled("  ⑂ ", Style::default().fg(theme::DIM)),
            Span::styled(
                repo.forks_count.to_string(),
                Style::default().fg(theme::MUTED),
            ),
        ]));

        for row in wrap_text(repo.description_or_default(), width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(theme::MUTED),
            )));
        }

        if let Some(language) = &repo.language {
            lines.push(Line::from(vec![
                Span::styled(
                    "  ● ",
                    Style::default().fg(theme::language_color(language)),
                ),
                Span::styled(language.clone(), Style::default().fg(theme::MUTED)),
            ]));
        }

        lines.push(Line::from(Span::styled(
            format!("  {}", view::link_display(&repo.html_url)),
            Style::default().fg(theme::DIM),
        )));
        lines.push(Line::from(""));
    }
}

fn experience_lines(lines: &mut Vec<Line<'static>>) {
    rule(lines);
    section_header(lines, content::SECTION_EXPERIENCE);

    for exp in content::EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled(
                exp.name,
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", exp.period), Style::default().fg(theme::DIM)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", exp.summary),
            Style::default().fg(theme::MUTED),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", exp.role),
            Style::default().fg(theme::DIM),
        )));
        lines.push(Line::from(""));
    }
}

fn footer_lines(lines: &mut Vec<Line<'static>>) {
    rule(lines);
    lines.push(Line::from(Span::styled(
        format!("© {} - All rights reserved", Local::now().format("%Y")),
        Style::default().fg(theme::DIM),
    )));
}

fn rule(lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        "─".repeat(RULE_WIDTH),
        Style::default().fg(theme::RULE),
    )));
    lines.push(Line::from(""));
}

fn section_header(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
}

fn draw_status_line(frame: &mut Frame, area: Rect) {
    let left = "q quit · ↑/↓ scroll";
    let version = env!("WRAITHDECK_VERSION");
    let pad = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(version.width());
    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(theme::DIM)),
        Span::raw(" ".repeat(pad)),
        Span::styled(version, Style::default().fg(theme::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Greedy word wrap by display width. Words longer than the width get
/// a row of their own and are left to the terminal to clip.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
