//! Bar chart pane for the sorting algorithms
//!
//! Bars are drawn with a ratatui [`BarChart`]; the cursor arrows go in a
//! plain text block underneath, laid out by [`arrow_rows`] so each arrow sits
//! under the middle of its bar.

use crate::engine::constants::MAX_BAR_HEIGHT;
use crate::ui::scene::{arrow_rows, bar_layout, Scene};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render the bars and their cursor arrows
pub fn render_bars_pane(frame: &mut Frame, area: Rect, scene: &Scene, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", scene.title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (bar_width, gap) = bar_layout(scene.bars.len(), inner.width);
    let rows = arrow_rows(&scene.arrows, bar_width, gap, inner.width as usize);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(rows.len() as u16)])
        .split(inner);

    let show_values = bar_width >= 3;
    let bars: Vec<Bar> = scene
        .bars
        .iter()
        .map(|bar| {
            let color = if bar.changed {
                DEFAULT_THEME.changed
            } else {
                Color::Rgb(bar.color.r, bar.color.g, bar.color.b)
            };
            let text = if show_values {
                bar.value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(bar.value.max(0) as u64)
                .text_value(text)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(MAX_BAR_HEIGHT as u64);
    frame.render_widget(chart, chunks[0]);

    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(row, text)| {
            let color = if row == 0 {
                DEFAULT_THEME.arrow
            } else {
                DEFAULT_THEME.fg
            };
            Line::styled(text, Style::default().fg(color))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
