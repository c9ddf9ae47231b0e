//! Application state management.
//!
//! Holds the rendered listing, card selection, the details overlay, the
//! status line and background action tasks.

use crate::actions::Outcome;
use crate::model::Record;
use crate::view::{self, Action, CardView, ListingView};
use std::collections::HashSet;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Current UI mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Card grid
    Grid,
    /// Details overlay for the card at an index
    Details(usize),
}

/// External command started by an action.
#[derive(Debug)]
pub struct PendingAction {
    pub label: String,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Rendered view tree (rendered once per record set)
    pub listing: ListingView,
    /// Selected card index
    pub selected_index: usize,
    /// Grid column count, updated on every draw
    pub columns: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Status message to display
    pub status_message: Option<String>,
    /// Commands still running
    pub pending: Vec<PendingAction>,
    /// Case ids with a filed report
    pub reported: HashSet<String>,
}

impl App {
    /// Create application state for a record sequence.
    ///
    /// # Arguments
    /// * `records` - Records in display order
    pub fn new(records: &[Record]) -> Self {
        Self {
            listing: view::render(records),
            selected_index: 0,
            columns: 1,
            mode: UiMode::Grid,
            status_message: None,
            pending: Vec::new(),
            reported: HashSet::new(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.listing.cards.len()
    }

    pub fn selected_card(&self) -> Option<&CardView> {
        self.listing.cards.get(self.selected_index)
    }

    /// Card shown in the details overlay, if open.
    pub fn details_card(&self) -> Option<&CardView> {
        match self.mode {
            UiMode::Details(index) => self.listing.cards.get(index),
            UiMode::Grid => None,
        }
    }

    pub fn is_reported(&self, card: &CardView) -> bool {
        self.reported.contains(&card.key)
    }

    /// Move selection one card left, wrapping to the last card.
    pub fn move_left(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Move selection one card right, wrapping to the first card.
    pub fn move_right(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Move selection one grid row up, wrapping to the bottom of the column.
    pub fn move_up(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        let columns = self.columns.max(1);
        if self.selected_index >= columns {
            self.selected_index -= columns;
        } else {
            let column = self.selected_index;
            let last_row_start = (len - 1) / columns * columns;
            let candidate = last_row_start + column;
            self.selected_index = if candidate < len {
                candidate
            } else {
                candidate - columns
            };
        }
    }

    /// Move selection one grid row down, wrapping to the top of the column.
    pub fn move_down(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        let columns = self.columns.max(1);
        if self.selected_index + columns < len {
            self.selected_index += columns;
        } else {
            self.selected_index %= columns;
        }
    }

    /// Action of the selected card's control (0 = Report, 1 = Details).
    pub fn card_action(&self, control: usize) -> Option<Action> {
        self.selected_card()
            .and_then(|card| card.actions.get(control))
            .map(|control| control.action.clone())
    }

    /// Action of a toolbar control (0 = Filters, 1 = Sort).
    pub fn toolbar_action(&self, control: usize) -> Option<Action> {
        self.listing
            .toolbar
            .controls
            .get(control)
            .map(|control| control.action.clone())
    }

    pub fn emergency_action(&self) -> Action {
        self.listing.advisory.emergency.action.clone()
    }

    /// Apply the outcome of a dispatched action to the UI state.
    pub fn apply_outcome(&mut self, action: &Action, outcome: Outcome) {
        match outcome {
            Outcome::Ignored => {
                self.set_status(format!("{}: not available", action_name(action)));
            }
            Outcome::Done(message) => self.set_status(message),
            Outcome::ShowDetails(id) => match self.card_index(&id) {
                Some(index) => self.mode = UiMode::Details(index),
                None => self.set_status(format!("Case #{} not found", id)),
            },
            Outcome::Reported { case_id, follow_up } => {
                info!(case_id = %case_id, "report filed");
                self.reported.insert(case_id);
                self.apply_outcome(action, *follow_up);
            }
            Outcome::Launched { label, handle } => {
                self.set_status(format!("{}: started", label));
                self.pending.push(PendingAction { label, handle });
            }
        }
    }

    /// Index of the card for a case id, preferring the selected card.
    ///
    /// Ids are not unique; the selected card wins so the overlay shows the
    /// card the user acted on.
    fn card_index(&self, id: &str) -> Option<usize> {
        if self.selected_card().is_some_and(|card| card.key == id) {
            return Some(self.selected_index);
        }
        self.listing.cards.iter().position(|card| card.key == id)
    }

    /// Collect finished background commands and report them.
    pub async fn poll_pending(&mut self) {
        let mut still_running = Vec::with_capacity(self.pending.len());
        for pending in std::mem::take(&mut self.pending) {
            if !pending.handle.is_finished() {
                still_running.push(pending);
                continue;
            }
            match pending.handle.await {
                Ok(Ok(())) => {
                    info!(label = %pending.label, "action finished");
                    self.set_status(format!("{}: done", pending.label));
                }
                Ok(Err(e)) => {
                    warn!(label = %pending.label, error = %e, "action failed");
                    self.set_status(format!("{}: failed: {}", pending.label, e));
                }
                Err(e) => {
                    warn!(label = %pending.label, error = %e, "action task aborted");
                    self.set_status(format!("{}: aborted", pending.label));
                }
            }
        }
        self.pending = still_running;
    }

    pub fn close_details(&mut self) {
        self.mode = UiMode::Grid;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Filters => "Filters",
        Action::Sort => "Sort",
        Action::Report(_) => "Report",
        Action::Details(_) => "Details",
        Action::EmergencyCall => "Emergency call",
    }
}
