//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub steps: u64,
    pub is_running: bool,
    pub is_done: bool,
    pub is_error: bool,
    pub is_input: bool,
    /// Structures get insert/remove/peek hints instead of size/draw
    pub is_structure: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step count and status
    let left_spans = vec![
        Span::styled(
            format!(" Step {} ", data.steps),
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.is_input {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let keys: &[(&str, &str)] = if data.is_input {
        &[("0-9", "key"), ("↵", "submit"), ("esc", "cancel")]
    } else if data.is_structure {
        &[
            ("i", "insert"),
            ("x", "remove"),
            ("p", "peek"),
            ("n", "new"),
            ("→", "step"),
            ("v", "next"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("→", "step"),
            ("⎵", "run"),
            ("↵", "finish"),
            ("n", "new"),
            ("z", "size"),
            ("d", "draw"),
            ("v", "next"),
            ("q", "quit"),
        ]
    };

    let mut right_spans = Vec::new();
    for (index, (key, desc)) in keys.iter().enumerate() {
        if index > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    // Show state indicator
    let indicator = if data.is_input {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_running {
        Some((" ▶ RUNNING ", DEFAULT_THEME.secondary))
    } else if data.is_done {
        Some((" DONE ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
