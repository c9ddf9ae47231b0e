//! Details overlay for a single case.

use super::grid::card_lines;
use crate::view::CardView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered popup area covering most of `area`.
pub fn popup_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}

/// Render the full card for a case, wrapped instead of truncated.
pub fn render_details(card: &CardView, reported: bool, area: Rect, buf: &mut Buffer) {
    let popup = popup_area(area);
    Clear.render(popup, buf);

    let mut lines = card_lines(card, reported);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press 'Esc' to close",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!("Case #{}", card.key))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    Widget::render(paragraph, popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RecordSource, SampleCatalog};
    use crate::ui::buffer_text;
    use crate::view;

    #[test]
    fn test_details_shows_full_description() {
        let listing = view::render(&SampleCatalog.load().unwrap());
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        render_details(&listing.cards[1], true, area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Case #002"));
        assert!(text.contains("Petrova Maria Sergeevna"));
        assert!(text.contains("✓ Reported"));
        assert!(text.contains("Press 'Esc' to close"));
    }
}
