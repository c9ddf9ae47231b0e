//! Priority → badge presentation.

use super::BadgeVariant;
use crate::model::Priority;

/// Badge variant and label for a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityPresentation {
    pub variant: BadgeVariant,
    pub label: &'static str,
}

/// Known priority levels and their presentation.
const PRIORITY_TABLE: [(Priority, PriorityPresentation); 3] = [
    (
        Priority::High,
        PriorityPresentation {
            variant: BadgeVariant::Critical,
            label: "High priority",
        },
    ),
    (
        Priority::Medium,
        PriorityPresentation {
            variant: BadgeVariant::Neutral,
            label: "Medium priority",
        },
    ),
    (
        Priority::Low,
        PriorityPresentation {
            variant: BadgeVariant::Subdued,
            label: "Low priority",
        },
    ),
];

/// Presentation for `Priority::Unrecognized`.
const DEFAULT_PRESENTATION: PriorityPresentation = PriorityPresentation {
    variant: BadgeVariant::Neutral,
    label: "Medium priority",
};

/// Map a priority to its badge presentation.
///
/// # Arguments
/// * `priority` - Priority of the record
///
/// # Returns
/// * `PriorityPresentation` - Table entry, or the default entry for
///   unrecognized values
pub fn priority_presentation(priority: &Priority) -> PriorityPresentation {
    PRIORITY_TABLE
        .iter()
        .find(|(key, _)| key == priority)
        .map(|(_, presentation)| *presentation)
        .unwrap_or(DEFAULT_PRESENTATION)
}
