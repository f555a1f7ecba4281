//! Cell list pane for the priority queue and stack
//!
//! Cells are listed from the highest index down, so the stack grows upward
//! and the queue's front sits at the top of its items.

use crate::ui::scene::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the structure's cells with cursor labels beside them
pub fn render_cells_pane(frame: &mut Frame, area: Rect, scene: &Scene, is_focused: bool) {
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
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let items: Vec<ListItem> = scene
        .cells
        .iter()
        .rev()
        .map(|cell| {
            let mut spans = vec![Span::styled(
                format!("{:>3} ", cell.index),
                Style::default().fg(DEFAULT_THEME.comment),
            )];

            match (cell.value, cell.color) {
                (Some(value), Some(color)) => {
                    let bg = if cell.changed {
                        DEFAULT_THEME.changed
                    } else {
                        Color::Rgb(color.r, color.g, color.b)
                    };
                    spans.push(Span::styled(
                        format!(" {:>5} ", value),
                        Style::default()
                            .fg(Color::Black)
                            .bg(bg)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                _ => {
                    let style = if cell.changed {
                        Style::default().bg(DEFAULT_THEME.changed)
                    } else {
                        Style::default().bg(DEFAULT_THEME.empty_cell)
                    };
                    spans.push(Span::styled("       ", style));
                }
            }

            for arrow in scene.arrows_at(cell.index) {
                let style = if arrow.moved {
                    Style::default()
                        .fg(DEFAULT_THEME.arrow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.arrow)
                };
                spans.push(Span::styled(format!(" ← {}", arrow.name.label()), style));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
