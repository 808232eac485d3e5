//! Algorithm info and counters pane

use crate::algorithms::catalog::AlgorithmDescriptor;
use crate::player::Metrics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::time::Duration;

/// Render the info pane below the bars
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: &AlgorithmDescriptor,
    metrics: Metrics,
    len: usize,
    interval: Duration,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.value);

    let counters: Vec<Span> = [
        ("Steps", metrics.steps.to_string()),
        ("Comparisons", metrics.comparisons.to_string()),
        ("Array accesses", metrics.accesses.to_string()),
        ("Length", len.to_string()),
        ("Speed", format!("{} ms/step", interval.as_millis())),
        ("Complexity", algorithm.complexity.to_string()),
    ]
    .into_iter()
    .flat_map(|(name, text)| {
        [
            Span::styled(format!("{}: ", name), label),
            Span::styled(text, value),
            Span::raw("   "),
        ]
    })
    .collect();

    let lines = vec![
        Line::from(Span::styled(
            algorithm.name,
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            algorithm.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(counters),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
