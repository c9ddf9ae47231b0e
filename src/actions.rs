//! Outbound actions of the listing view.
//!
//! Controls in the view tree only name an [`Action`]. An [`ActionHandler`]
//! decides what happens; every method defaults to doing nothing, so a handler
//! only overrides the actions it actually supports.

use crate::reports::ReportLog;
use crate::view::Action;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Result of dispatching an action.
#[derive(Debug)]
pub enum Outcome {
    /// No handler for this action
    Ignored,
    /// Finished; message for the status line
    Done(String),
    /// Open the in-terminal details overlay for a case id
    ShowDetails(String),
    /// Report stored for a case; `follow_up` is what happened next
    Reported {
        case_id: String,
        follow_up: Box<Outcome>,
    },
    /// External command running in the background
    Launched {
        label: String,
        handle: JoinHandle<Result<()>>,
    },
}

/// Capability set for the listing's controls.
pub trait ActionHandler {
    fn filters(&mut self) -> Outcome {
        Outcome::Ignored
    }

    fn sort(&mut self) -> Outcome {
        Outcome::Ignored
    }

    fn report(&mut self, _case_id: &str) -> Outcome {
        Outcome::Ignored
    }

    fn details(&mut self, _case_id: &str) -> Outcome {
        Outcome::Ignored
    }

    fn emergency_call(&mut self) -> Outcome {
        Outcome::Ignored
    }
}

/// Handler that accepts every action and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inert;

impl ActionHandler for Inert {}

/// Route an action to the matching handler method.
pub fn dispatch(handler: &mut dyn ActionHandler, action: &Action) -> Outcome {
    debug!(?action, "dispatching action");
    match action {
        Action::Filters => handler.filters(),
        Action::Sort => handler.sort(),
        Action::Report(id) => handler.report(id),
        Action::Details(id) => handler.details(id),
        Action::EmergencyCall => handler.emergency_call(),
    }
}

/// Handler backed by the report log and configured external commands.
///
/// Filters and sort stay inert.
#[derive(Debug)]
pub struct DesktopActions {
    reports: ReportLog,
    reports_path: PathBuf,
    report_command: Option<Vec<String>>,
    emergency_command: Vec<String>,
}

impl DesktopActions {
    pub fn new(
        reports: ReportLog,
        reports_path: PathBuf,
        report_command: Option<Vec<String>>,
        emergency_command: Vec<String>,
    ) -> Self {
        Self {
            reports,
            reports_path,
            report_command,
            emergency_command,
        }
    }
}

impl ActionHandler for DesktopActions {
    fn report(&mut self, case_id: &str) -> Outcome {
        self.reports.mark_reported(case_id);
        if let Err(e) = self.reports.save(&self.reports_path) {
            warn!(error = %e, case_id, "failed to save report log");
            return Outcome::Done(format!("Failed to save report for case #{}: {}", case_id, e));
        }

        let follow_up = match &self.report_command {
            Some(argv) => {
                let mut argv = argv.clone();
                argv.push(case_id.to_string());
                launch(format!("Report for case #{}", case_id), argv)
            }
            None => Outcome::Done(format!("Report filed for case #{}", case_id)),
        };
        Outcome::Reported {
            case_id: case_id.to_string(),
            follow_up: Box::new(follow_up),
        }
    }

    fn details(&mut self, case_id: &str) -> Outcome {
        Outcome::ShowDetails(case_id.to_string())
    }

    fn emergency_call(&mut self) -> Outcome {
        launch("Emergency call".to_string(), self.emergency_command.clone())
    }
}

/// Spawn an external command without blocking the UI.
fn launch(label: String, argv: Vec<String>) -> Outcome {
    let Some((program, args)) = argv.split_first() else {
        return Outcome::Done(format!("{}: no command configured", label));
    };

    let program = program.clone();
    let args = args.to_vec();
    let handle = tokio::spawn(async move {
        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("Failed to start {}", program))?;
        if status.success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("{} exited with {}", program, status))
        }
    });

    Outcome::Launched { label, handle }
}
