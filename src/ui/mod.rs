//! UI components module.
//!
//! Contains ratatui widgets that draw the listing view tree.

pub mod advisory;
pub mod details;
pub mod grid;
pub mod header;
pub mod theme;

pub use advisory::render_advisory;
pub use details::render_details;
pub use grid::{card_index_at, grid_columns, render_grid};
pub use header::{render_banner, render_toolbar};

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

const KEY_HINT: &str = concat!(
    "q quit • ←↑↓→ select • Enter/d details • r report • ",
    "e emergency • f filters • s sort"
);

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct Areas {
    pub banner: Rect,
    pub toolbar: Rect,
    pub grid: Rect,
    pub advisory: Rect,
    pub status: Rect,
}

/// Split the terminal area into the listing regions.
pub fn layout(area: Rect) -> Areas {
    let [banner, toolbar, grid, advisory, status] = Layout::vertical([
        Constraint::Length(4), // Banner
        Constraint::Length(3), // Toolbar
        Constraint::Min(0),    // Card grid
        Constraint::Length(5), // Advisory
        Constraint::Length(1), // Status line
    ])
    .areas(area);

    Areas {
        banner,
        toolbar,
        grid,
        advisory,
        status,
    }
}

/// Render the complete UI.
///
/// # Details
/// Draws banner, toolbar, card grid, advisory block and status line, then
/// the details overlay when one is open.
pub fn render_ui(f: &mut Frame, app: &App, areas: &Areas) {
    let buf = f.buffer_mut();
    render_banner(&app.listing.banner, areas.banner, buf);
    render_toolbar(&app.listing.toolbar, areas.toolbar, buf);
    render_grid(app, areas.grid, buf);
    render_advisory(&app.listing.advisory, areas.advisory, buf);

    let status_text = app.status_message.as_deref().unwrap_or(KEY_HINT);
    let status = Paragraph::new(Line::from(status_text)).style(Style::default().fg(Color::Gray));
    f.render_widget(status, areas.status);

    if let Some(card) = app.details_card() {
        render_details(card, app.is_reported(card), f.area(), f.buffer_mut());
    }
}

/// Flatten a buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RecordSource, SampleCatalog};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_layout_regions() {
        let areas = layout(Rect::new(0, 0, 100, 50));
        assert_eq!(areas.banner.height, 4);
        assert_eq!(areas.toolbar.y, 4);
        assert_eq!(areas.grid.height, 50 - 4 - 3 - 5 - 1);
        assert_eq!(areas.status.y, 49);
    }

    #[test]
    fn test_render_ui_full_frame() {
        let app = App::new(&SampleCatalog.load().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal
            .draw(|f| {
                let areas = layout(f.area());
                render_ui(f, &app, &areas);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Wanted Persons Database"));
        assert!(text.contains("Found: 3 cases"));
        assert!(text.contains("Petrova Maria Sergeevna"));
        assert!(text.contains("Important information"));
        assert!(text.contains("q quit"));
    }
}
