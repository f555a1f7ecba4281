//! Side pane with counters, narration and the key-entry line

use crate::ui::scene::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub scene: &'a Scene,
    /// Last key returned by remove, pop or peek
    pub output: Option<i32>,
    /// Key being typed for insert/push
    pub input: Option<&'a str>,
    pub order: &'static str,
    pub size: usize,
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", name), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.number)),
    ])
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let scene = data.scene;
    let mut lines = vec![
        field("Size", data.size.to_string()),
        field("Order", data.order.to_string()),
        field("Phase", scene.phase.to_string()),
        Line::default(),
        field("Comparisons", scene.counters.comparisons.to_string()),
        field("Swaps", scene.counters.swaps.to_string()),
        field("Copies", scene.counters.copies.to_string()),
    ];

    if !scene.cells.is_empty() {
        // structures have no temp slot and no sort counters worth showing
        lines.truncate(3);
    } else {
        let temp = scene
            .temp
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(field("Temp", temp));
    }

    for (name, value) in &scene.extras {
        lines.push(field(name, value.clone()));
    }

    if let Some(output) = data.output {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Returned"), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                output.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.output_value)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::default());
    let narration_style = if scene.done {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    lines.push(Line::styled(scene.narration.clone(), narration_style));

    if let Some(input) = data.input {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Key: ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                format!("{}_", input),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
