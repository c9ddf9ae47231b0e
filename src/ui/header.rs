//! Banner and toolbar rendering.

use super::theme::{badge_span, control_span, icon_glyph};
use crate::view::{Banner, Toolbar};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the title banner.
///
/// # Details
/// Two lines inside a filled block: icon + title, then the subtitle.
pub fn render_banner(banner: &Banner, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(banner.icon)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                banner.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(banner.subtitle, Style::default().fg(Color::LightBlue))),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Blue)),
    );

    Widget::render(paragraph, area, buf);
}

/// Render the toolbar: controls on the left, count badge on the right.
pub fn render_toolbar(toolbar: &Toolbar, area: Rect, buf: &mut Buffer) {
    let controls = Line::from(vec![
        control_span(&toolbar.controls[0], 'f'),
        Span::raw(" "),
        control_span(&toolbar.controls[1], 's'),
    ]);
    let count = Line::from(badge_span(&toolbar.count));

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(count.width() as u16),
    ])
    .areas(inner);
    Widget::render(Paragraph::new(controls), left, buf);
    Widget::render(Paragraph::new(count).alignment(Alignment::Right), right, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use crate::view;

    #[test]
    fn test_toolbar_shows_controls_and_count() {
        let listing = view::render(&[]);
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        render_toolbar(&listing.toolbar, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Filters (f)"));
        assert!(text.contains("Sort (s)"));
        assert!(text.contains("Found: 0 cases"));
    }

    #[test]
    fn test_banner_shows_title() {
        let listing = view::render(&[]);
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        render_banner(&listing.banner, area, &mut buf);
        assert!(buffer_text(&buf).contains("Wanted Persons Database"));
    }
}
