//! Terminal styling for view-tree primitives.

use crate::view::{Badge, BadgeVariant, ButtonSize, ButtonVariant, Control, Icon};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Glyph drawn for a named icon.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon.0 {
        "Search" => "⌕",
        "Filter" => "≡",
        "SortAsc" => "↑",
        "Phone" => "☎",
        "FileText" => "▤",
        "AlertTriangle" => "⚠",
        _ => "•",
    }
}

pub fn badge_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Critical => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Neutral => Style::default().fg(Color::Black).bg(Color::Gray),
        BadgeVariant::Subdued => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        BadgeVariant::Outline => Style::default().fg(Color::Cyan),
        BadgeVariant::Success => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

/// Badge as a padded chip; outline badges get brackets instead of a fill.
pub fn badge_span(badge: &Badge) -> Span<'_> {
    let text = match badge.variant {
        BadgeVariant::Outline => format!("[{}]", badge.label),
        _ => format!(" {} ", badge.label),
    };
    Span::styled(text, badge_style(badge.variant))
}

/// Control as `[glyph label]` with the key that triggers it.
pub fn control_span(control: &Control, key: char) -> Span<'_> {
    let style = match control.variant {
        ButtonVariant::Primary => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        ButtonVariant::Outline => Style::default().fg(Color::White),
    };
    let text = format!("[{} {} ({})]", icon_glyph(control.icon), control.label, key);
    match control.size {
        ButtonSize::Regular => Span::styled(format!(" {} ", text), style),
        ButtonSize::Small => Span::styled(text, style),
    }
}

pub fn label_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
}

pub fn value_style() -> Style {
    Style::default().fg(Color::White)
}
