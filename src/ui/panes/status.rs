//! Status bar rendering with keybindings and state indicators

use crate::player::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar at the bottom.
///
/// `is_error` paints the message in the error color.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    state: PlaybackState,
    is_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Left side: playback state and message
    let state_color = match state {
        PlaybackState::Idle => DEFAULT_THEME.primary,
        PlaybackState::Running => DEFAULT_THEME.secondary,
        PlaybackState::Paused => DEFAULT_THEME.comment,
        PlaybackState::Finished => DEFAULT_THEME.success,
    };
    let state_text = match state {
        PlaybackState::Running => " ▶ RUNNING ".to_string(),
        PlaybackState::Paused => " ⏸ PAUSED ".to_string(),
        other => format!(" {} ", other.label().to_uppercase()),
    };

    let left_spans = vec![
        Span::styled(
            state_text,
            Style::default()
                .bg(if is_error { DEFAULT_THEME.error } else { state_color })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings = [
        (" ⎵ ", " play/pause "),
        (" → ", " step "),
        (" ⌫ ", " stop "),
        (" ↑/↓ ", " algorithm "),
        (" +/- ", " speed "),
        (" [/] ", " size "),
        (" u ", " unorder "),
        (" r ", " new "),
        (" f ", " finish "),
        (" q ", " quit "),
    ];

    let mut right_spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, desc)) in bindings.into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
