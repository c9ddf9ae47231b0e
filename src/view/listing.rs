//! Record sequence → listing view tree.

use super::format::{case_subtitle, found_label, reward_label};
use super::{
    Action, Advisory, Badge, BadgeVariant, Banner, ButtonSize, ButtonVariant, CardView, Control,
    Field, Icon, Image, ImageSource, ListingView, Toolbar, priority_presentation,
};
use crate::model::Record;

const TITLE: &str = "Wanted Persons Database";
const SUBTITLE: &str = "Information on persons under federal and international search";
const ADVISORY_TITLE: &str = "Important information";
const ADVISORY_TEXT: &str = "If you spot a wanted person, call 102 or 112 immediately. \
                             Do not attempt to act on your own!";

/// Render the listing view for a record sequence.
///
/// # Arguments
/// * `records` - Records in display order
///
/// # Returns
/// * `ListingView` - Banner, toolbar, one card per record, advisory block
///
/// # Details
/// Pure and infallible: empty sequences, missing rewards, empty charge lists,
/// unrecognized priorities and duplicate ids all render.
pub fn render(records: &[Record]) -> ListingView {
    ListingView {
        banner: Banner {
            icon: Icon::SEARCH,
            title: TITLE,
            subtitle: SUBTITLE,
        },
        toolbar: Toolbar {
            controls: [
                control(
                    "Filters",
                    Icon::FILTER,
                    ButtonVariant::Outline,
                    ButtonSize::Regular,
                    Action::Filters,
                ),
                control(
                    "Sort",
                    Icon::SORT_ASC,
                    ButtonVariant::Outline,
                    ButtonSize::Regular,
                    Action::Sort,
                ),
            ],
            count: Badge::new(found_label(records.len()), BadgeVariant::Outline),
        },
        cards: records.iter().map(render_card).collect(),
        advisory: Advisory {
            icon: Icon::ALERT_TRIANGLE,
            title: ADVISORY_TITLE,
            text: ADVISORY_TEXT,
            emergency: control(
                "Emergency line: 102",
                Icon::PHONE,
                ButtonVariant::Primary,
                ButtonSize::Regular,
                Action::EmergencyCall,
            ),
        },
    }
}

/// Render a single record card.
pub fn render_card(record: &Record) -> CardView {
    let priority = priority_presentation(&record.priority);

    CardView {
        key: record.id.clone(),
        image: Image {
            source: image_source(&record.photo_url),
            alt: record.name.clone(),
        },
        priority: Badge::new(priority.label, priority.variant),
        reward: record
            .reward
            .map(|amount| Badge::new(reward_label(amount), BadgeVariant::Success)),
        title: record.name.clone(),
        subtitle: case_subtitle(record.age, &record.id),
        last_seen: Field {
            label: "Last seen:",
            value: record.last_seen_location.clone(),
        },
        description: Field {
            label: "Description:",
            value: record.description.clone(),
        },
        charges_label: "Charges:",
        charges: record
            .charges
            .iter()
            .map(|charge| Badge::new(charge.as_str(), BadgeVariant::Outline))
            .collect(),
        actions: [
            control(
                "Report",
                Icon::PHONE,
                ButtonVariant::Primary,
                ButtonSize::Small,
                Action::Report(record.id.clone()),
            ),
            control(
                "Details",
                Icon::FILE_TEXT,
                ButtonVariant::Outline,
                ButtonSize::Small,
                Action::Details(record.id.clone()),
            ),
        ],
    }
}

/// Blank or non-http references fall back to a placeholder.
fn image_source(photo_url: &str) -> ImageSource {
    let url = photo_url.trim();
    if url.starts_with("https://") || url.starts_with("http://") {
        ImageSource::Remote(url.to_string())
    } else {
        ImageSource::Placeholder
    }
}

fn control(
    label: &str,
    icon: Icon,
    variant: ButtonVariant,
    size: ButtonSize,
    action: Action,
) -> Control {
    Control {
        label: label.to_string(),
        icon,
        variant,
        size,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn record(id: &str, priority: Priority, reward: Option<u64>, charges: &[&str]) -> Record {
        Record {
            id: id.to_string(),
            name: format!("Person {}", id),
            age: 30,
            last_seen_location: "Moscow, Khamovniki district".to_string(),
            description: "Height 175 cm".to_string(),
            charges: charges.iter().map(|c| c.to_string()).collect(),
            priority,
            photo_url: "https://example.com/photo.jpg".to_string(),
            reward,
        }
    }

    #[test]
    fn test_empty_listing() {
        let view = render(&[]);
        assert!(view.cards.is_empty());
        assert_eq!(view.toolbar.count.label, "Found: 0 cases");
        assert_eq!(view.advisory.emergency.action, Action::EmergencyCall);
    }

    #[test]
    fn test_card_count_matches_input() {
        let records: Vec<Record> = (0..7)
            .map(|i| record(&format!("{:03}", i), Priority::Low, None, &[]))
            .collect();
        let view = render(&records);
        assert_eq!(view.cards.len(), 7);
        assert_eq!(view.toolbar.count.label, "Found: 7 cases");
        let keys: Vec<&str> = view.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["000", "001", "002", "003", "004", "005", "006"]);
    }

    #[test]
    fn test_reward_badge_iff_reward_defined() {
        let view = render(&[
            record("001", Priority::High, Some(50000), &[]),
            record("002", Priority::Medium, None, &[]),
            record("003", Priority::High, Some(0), &[]),
        ]);
        let reward = view.cards[0].reward.as_ref().unwrap();
        assert_eq!(reward.label, "Reward: 50,000 ₽");
        assert_eq!(reward.variant, BadgeVariant::Success);
        assert!(view.cards[1].reward.is_none());
        // A defined zero is still an offered reward
        assert_eq!(view.cards[2].reward.as_ref().unwrap().label, "Reward: 0 ₽");
    }

    #[test]
    fn test_charges_in_order() {
        let view = render(&[
            record("001", Priority::High, None, &["Fraud", "Tax evasion"]),
            record("002", Priority::High, None, &[]),
        ]);
        let labels: Vec<&str> = view.cards[0].charges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Fraud", "Tax evasion"]);
        assert!(view.cards[0].charges.iter().all(|b| b.variant == BadgeVariant::Outline));
        assert!(view.cards[1].charges.is_empty());
        assert_eq!(view.cards[1].charges_label, "Charges:");
    }

    #[test]
    fn test_card_content() {
        let card = render_card(&record("042", Priority::Low, None, &[]));
        assert_eq!(card.title, "Person 042");
        assert_eq!(card.subtitle, "30 yrs • Case #042");
        assert_eq!(card.image.alt, "Person 042");
        assert_eq!(
            card.image.source,
            ImageSource::Remote("https://example.com/photo.jpg".to_string())
        );
        assert_eq!(card.priority, Badge::new("Low priority", BadgeVariant::Subdued));
        assert_eq!(card.last_seen.value, "Moscow, Khamovniki district");
        assert_eq!(card.actions[0].action, Action::Report("042".to_string()));
        assert_eq!(card.actions[1].action, Action::Details("042".to_string()));
    }

    #[test]
    fn test_unusable_photo_falls_back_to_placeholder() {
        let mut r = record("001", Priority::High, None, &[]);
        r.photo_url = "   ".to_string();
        assert_eq!(render_card(&r).image.source, ImageSource::Placeholder);
        r.photo_url = "file:///etc/passwd".to_string();
        assert_eq!(render_card(&r).image.source, ImageSource::Placeholder);
    }

    #[test]
    fn test_unrecognized_priority_renders_default_badge() {
        let view = render(&[record("001", Priority::parse("urgent"), None, &[])]);
        assert_eq!(
            view.cards[0].priority,
            Badge::new("Medium priority", BadgeVariant::Neutral)
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = vec![
            record("001", Priority::High, Some(100000), &["Robbery"]),
            record("002", Priority::Medium, None, &[]),
        ];
        let cloned = records.clone();
        assert_eq!(render(&records), render(&records));
        assert_eq!(render(&records), render(&cloned));
    }

    #[test]
    fn test_duplicate_ids_render_both() {
        let view = render(&[
            record("001", Priority::High, None, &[]),
            record("001", Priority::Low, None, &[]),
        ]);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].priority.label, "High priority");
    }

    #[test]
    fn test_to_text_lists_every_card() {
        let view = render(&[record("001", Priority::High, Some(50000), &["Fraud"])]);
        let text = view.to_text();
        assert!(text.contains("Found: 1 cases"));
        assert!(text.contains("(Reward: 50,000 ₽)"));
        assert!(text.contains("Charges: (Fraud)"));
        assert!(text.contains("<Emergency line: 102>"));
    }
}
