//! Card grid rendering.
//!
//! Lays the listing's cards out in a responsive grid with the selected card
//! kept in view.

use super::theme::{badge_span, control_span, label_style, value_style};
use crate::app::App;
use crate::view::{CardView, ImageSource};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height of one card including its border.
pub const CARD_HEIGHT: u16 = 10;

/// Column count for a grid area width (1, 2 or 3 columns).
pub fn grid_columns(width: u16) -> usize {
    match width {
        w if w >= 150 => 3,
        w if w >= 90 => 2,
        _ => 1,
    }
}

/// First card row shown, keeping the selected row centered when possible.
pub fn first_visible_row(app: &App, area: Rect) -> usize {
    let columns = app.columns.max(1);
    let total_rows = app.card_count().div_ceil(columns);
    let visible_rows = visible_rows(area);
    let selected_row = app.selected_index / columns;

    let offset = selected_row.saturating_sub(visible_rows / 2);
    offset.min(total_rows.saturating_sub(visible_rows))
}

fn visible_rows(area: Rect) -> usize {
    (area.height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize
}

/// Index of the card under a terminal cell, if any.
pub fn card_index_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = inner_area(area);
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let columns = app.columns.max(1);
    let card_width = (inner.width / columns as u16).max(1);
    let grid_col = ((column - inner.x) / card_width) as usize;
    let grid_row = ((row - inner.y) / CARD_HEIGHT) as usize + first_visible_row(app, area);
    if grid_col >= columns {
        return None;
    }
    let index = grid_row * columns + grid_col;
    (index < app.card_count()).then_some(index)
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Render the card grid.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each card shows the photo reference, priority and reward badges, name,
/// age and case number, last-seen place, description, charges and the
/// card's controls. The selected card gets a highlighted border.
pub fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let len = app.card_count();
    let title = if len == 0 {
        "Cases".to_string()
    } else {
        format!("Cases ({}/{})", app.selected_index.min(len - 1) + 1, len)
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    if len == 0 {
        Widget::render(
            Paragraph::new(Span::styled("No cases to display", Style::default().fg(Color::Gray))),
            inner,
            buf,
        );
        return;
    }

    let columns = app.columns.max(1);
    let card_width = inner.width / columns as u16;
    let first_row = first_visible_row(app, area);

    for (visible_row, row) in (first_row..).take(visible_rows(area)).enumerate() {
        for col in 0..columns {
            let index = row * columns + col;
            let Some(card) = app.listing.cards.get(index) else {
                return;
            };

            let y = inner.y + visible_row as u16 * CARD_HEIGHT;
            if y >= inner.y + inner.height {
                return;
            }
            let card_area = Rect {
                x: inner.x + col as u16 * card_width,
                y,
                width: card_width,
                height: CARD_HEIGHT.min(inner.y + inner.height - y),
            };
            let selected = index == app.selected_index;
            render_card(card, selected, app.is_reported(card), card_area, buf);
        }
    }
}

fn render_card(card: &CardView, selected: bool, reported: bool, area: Rect, buf: &mut Buffer) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(card_lines(card, reported)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    Widget::render(paragraph, area, buf);
}

/// Lines of a card body, shared with the details overlay.
///
/// Cases with a filed report get a marker after the badges.
pub fn card_lines(card: &CardView, reported: bool) -> Vec<Line<'_>> {
    let photo = match &card.image.source {
        ImageSource::Remote(url) => Line::from(vec![
            Span::styled(format!("Photo of {}: ", card.image.alt), label_style()),
            Span::styled(url.as_str(), Style::default().fg(Color::Blue)),
        ]),
        ImageSource::Placeholder => Line::from(Span::styled(
            format!("Photo of {}: unavailable", card.image.alt),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let mut badges = vec![badge_span(&card.priority)];
    if let Some(reward) = &card.reward {
        badges.push(Span::raw(" "));
        badges.push(badge_span(reward));
    }
    if reported {
        badges.push(Span::styled(" ✓ Reported", Style::default().fg(Color::Green)));
    }

    let mut charges = vec![Span::styled(card.charges_label, label_style())];
    for charge in &card.charges {
        charges.push(Span::raw(" "));
        charges.push(badge_span(charge));
    }

    vec![
        photo,
        Line::from(badges),
        Line::from(Span::styled(
            card.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.subtitle.as_str(), Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled(card.last_seen.label, label_style()),
            Span::raw(" "),
            Span::styled(card.last_seen.value.as_str(), value_style()),
        ]),
        Line::from(vec![
            Span::styled(card.description.label, label_style()),
            Span::raw(" "),
            Span::styled(card.description.value.as_str(), value_style()),
        ]),
        Line::from(charges),
        Line::from(vec![
            control_span(&card.actions[0], 'r'),
            Span::raw(" "),
            control_span(&card.actions[1], 'd'),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RecordSource, SampleCatalog};
    use crate::ui::buffer_text;

    fn sample_app() -> App {
        App::new(&SampleCatalog.load().unwrap())
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(100), 2);
        assert_eq!(grid_columns(200), 3);
    }

    #[test]
    fn test_render_grid_cards() {
        let app = sample_app();
        let area = Rect::new(0, 0, 120, 2 + 3 * CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Cases (1/3)"));
        assert!(text.contains("Ivanov Alexey Petrovich"));
        assert!(text.contains("Sidorov Vladimir Nikolaevich"));
        assert!(text.contains("Reward: 50,000 ₽"));
        assert!(text.contains("[Fraud] [Tax evasion]"));
        assert!(text.contains("High priority"));
    }

    #[test]
    fn test_reported_marker() {
        let mut app = sample_app();
        app.reported.insert("003".to_string());
        let area = Rect::new(0, 0, 60, 2 + 3 * CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);

        let text = buffer_text(&buf);
        let marked: Vec<&str> = text.lines().filter(|line| line.contains("Reported")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Reward: 100,000 ₽"));
    }

    #[test]
    fn test_render_empty_grid() {
        let app = App::new(&[]);
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);
        assert!(buffer_text(&buf).contains("No cases to display"));
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut app = sample_app();
        let area = Rect::new(0, 0, 60, 2 + CARD_HEIGHT);
        app.selected_index = 2;
        assert_eq!(first_visible_row(&app, area), 2);

        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Sidorov"));
        assert!(!text.contains("Ivanov"));
    }

    #[test]
    fn test_card_index_at() {
        let mut app = sample_app();
        app.columns = 2;
        let area = Rect::new(0, 0, 100, 2 + 2 * CARD_HEIGHT);
        assert_eq!(card_index_at(&app, area, 5, 3), Some(0));
        assert_eq!(card_index_at(&app, area, 60, 3), Some(1));
        assert_eq!(card_index_at(&app, area, 5, 1 + CARD_HEIGHT + 2), Some(2));
        assert_eq!(card_index_at(&app, area, 60, 1 + CARD_HEIGHT + 2), None);
        assert_eq!(card_index_at(&app, area, 0, 0), None);
    }
}
