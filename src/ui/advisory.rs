//! Advisory block rendering.

use super::theme::{control_span, icon_glyph};
use crate::view::Advisory;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the static warning block with the emergency control.
pub fn render_advisory(advisory: &Advisory, area: Rect, buf: &mut Buffer) {
    let warning = Style::default().fg(Color::Yellow);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon_glyph(advisory.icon)), warning),
            Span::styled(advisory.title, warning.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(advisory.text, warning)),
        Line::from(control_span(&advisory.emergency, 'e')),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    Widget::render(paragraph, area, buf);
}
