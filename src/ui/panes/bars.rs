//! Bar chart of the current array

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Eighth-block glyphs, index = filled eighths of a cell
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, values: &[i32], highlighted: &[usize]) {
    let block = Block::default()
        .title(format!(" Array ({}) ", values.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner = block.inner(area);
    let lines = bar_rows(values, highlighted, inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Lay the bars out as `height` text rows fitting in `width` columns.
///
/// Bars get equal integer widths with a one-column gap once they are at least
/// three columns wide. Heights are scaled to the largest value (at least 1)
/// and drawn with eighth-block precision. Bars that do not fit are cut off on
/// the right.
pub fn bar_rows(
    values: &[i32],
    highlighted: &[usize],
    width: u16,
    height: u16,
) -> Vec<Line<'static>> {
    if values.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let slot = (width as usize / values.len()).max(1);
    let (fill, gap) = if slot >= 3 { (slot - 1, 1) } else { (slot, 0) };
    let visible = values.len().min(width as usize / slot);

    let max = values.iter().copied().max().unwrap_or(1).max(1) as u64;
    let eighths: Vec<u64> = values[..visible]
        .iter()
        .map(|&v| v.max(0) as u64 * height as u64 * 8 / max)
        .collect();

    (0..height as u64)
        .map(|row| {
            let from_bottom = height as u64 - 1 - row;
            let spans = eighths
                .iter()
                .enumerate()
                .map(|(i, &total)| {
                    let level = total.saturating_sub(from_bottom * 8).min(8) as usize;
                    let color = if highlighted.contains(&i) {
                        DEFAULT_THEME.bar_highlight
                    } else {
                        DEFAULT_THEME.bar
                    };
                    let mut cell = LEVELS[level].to_string().repeat(fill);
                    cell.push_str(&" ".repeat(gap));
                    Span::styled(cell, Style::default().fg(color))
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_single_row_scaling() {
        let rows = bar_rows(&[0, 4, 8], &[], 3, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(text(&rows[0]), " ▄█");
    }

    #[test]
    fn test_tall_bar_fills_lower_rows() {
        let rows = bar_rows(&[2, 4], &[], 2, 2);
        assert_eq!(text(&rows[0]), " █");
        assert_eq!(text(&rows[1]), "██");
    }

    #[test]
    fn test_wide_slots_get_a_gap() {
        let rows = bar_rows(&[1, 1], &[], 8, 1);
        assert_eq!(text(&rows[0]), "███ ███ ");
    }

    #[test]
    fn test_highlight_changes_color() {
        let rows = bar_rows(&[1, 1], &[1], 2, 1);
        assert_eq!(rows[0].spans[0].style.fg, Some(DEFAULT_THEME.bar));
        assert_eq!(rows[0].spans[1].style.fg, Some(DEFAULT_THEME.bar_highlight));
    }

    #[test]
    fn test_degenerate_areas() {
        assert!(bar_rows(&[], &[], 10, 10).is_empty());
        assert!(bar_rows(&[1, 2], &[], 0, 10).is_empty());
        // more bars than columns: only what fits
        let rows = bar_rows(&[1, 2, 3, 4], &[], 2, 1);
        assert_eq!(rows[0].spans.len(), 2);
    }
}
