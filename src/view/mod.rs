//! Listing view.
//!
//! A pure transformation from a record sequence to a view tree. The tree is
//! plain data; the `ui` module draws it into the terminal.

pub mod format;
pub mod listing;
pub mod priority;

pub use listing::render;
pub use priority::priority_presentation;

/// Named glyph, drawn by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon(pub &'static str);

impl Icon {
    pub const SEARCH: Icon = Icon("Search");
    pub const FILTER: Icon = Icon("Filter");
    pub const SORT_ASC: Icon = Icon("SortAsc");
    pub const PHONE: Icon = Icon("Phone");
    pub const FILE_TEXT: Icon = Icon("FileText");
    pub const ALERT_TRIANGLE: Icon = Icon("AlertTriangle");
}

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Strong emphasis (high priority)
    Critical,
    /// Default emphasis
    Neutral,
    /// Reduced emphasis (low priority)
    Subdued,
    /// Outlined chip (counts, charges)
    Outline,
    /// Positive highlight (rewards)
    Success,
}

/// Labeled chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Regular,
    Small,
}

/// Outbound action a control delegates to.
///
/// The view only names the action; handling belongs to an
/// [`ActionHandler`](crate::actions::ActionHandler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Filters,
    Sort,
    /// Report a sighting for the case id
    Report(String),
    /// Open the per-case view for the case id
    Details(String),
    EmergencyCall,
}

/// Labeled clickable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub icon: Icon,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub action: Action,
}

/// Where a card photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote resource, fetched by the host (if at all)
    Remote(String),
    /// No usable reference; the host draws a placeholder
    Placeholder,
}

/// Photo with its accessible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: ImageSource,
    pub alt: String,
}

/// Label + value pair inside a card body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// One card per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Rendering key (the record id; not guaranteed unique)
    pub key: String,
    pub image: Image,
    pub priority: Badge,
    pub reward: Option<Badge>,
    pub title: String,
    pub subtitle: String,
    pub last_seen: Field,
    pub description: Field,
    pub charges_label: &'static str,
    pub charges: Vec<Badge>,
    pub actions: [Control; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub controls: [Control; 2],
    pub count: Badge,
}

/// Static warning block shown under the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub emergency: Control,
}

/// Complete view tree of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub banner: Banner,
    pub toolbar: Toolbar,
    pub cards: Vec<CardView>,
    pub advisory: Advisory,
}

impl ListingView {
    /// Plain-text rendering of the tree, one element per line.
    ///
    /// Used by `--dump` and handy in tests.
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        out.push(format!("[{}] {}", self.banner.icon.0, self.banner.title));
        out.push(self.banner.subtitle.to_string());
        let [filters, sort] = &self.toolbar.controls;
        out.push(format!(
            "<{}> <{}> ({})",
            filters.label, sort.label, self.toolbar.count.label
        ));
        for card in &self.cards {
            out.push(String::new());
            match &card.image.source {
                ImageSource::Remote(url) => {
                    out.push(format!("Photo of {}: {}", card.image.alt, url))
                }
                ImageSource::Placeholder => {
                    out.push(format!("Photo of {}: unavailable", card.image.alt))
                }
            }
            out.push(format!("({})", card.priority.label));
            if let Some(reward) = &card.reward {
                out.push(format!("({})", reward.label));
            }
            out.push(card.title.clone());
            out.push(card.subtitle.clone());
            out.push(format!("{} {}", card.last_seen.label, card.last_seen.value));
            out.push(format!("{} {}", card.description.label, card.description.value));
            let charges: Vec<String> = card
                .charges
                .iter()
                .map(|badge| format!("({})", badge.label))
                .collect();
            let charges_line = format!("{} {}", card.charges_label, charges.join(" "));
            out.push(charges_line.trim_end().to_string());
            out.push(format!("<{}> <{}>", card.actions[0].label, card.actions[1].label));
        }
        out.push(String::new());
        out.push(format!("[{}] {}", self.advisory.icon.0, self.advisory.title));
        out.push(self.advisory.text.to_string());
        out.push(format!("<{}>", self.advisory.emergency.label));
        out.join("\n")
    }
}
