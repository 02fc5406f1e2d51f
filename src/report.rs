//! Completion report for a finished requirement flow.
//!
//! The report pairs the delivered answers with the requirement set so the
//! result can be printed, serialized, or used to decide whether to build.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::requirements::{Answer, AnswerMap, RequirementSet};
use crate::ui::UserInterface;

/// Message shown when at least one requirement is unmet.
pub const UNMET_MESSAGE: &str = "Please address all requirements before building.";

/// One requirement's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub title: String,
    pub answer: Option<Answer>,
    pub satisfied: bool,
}

/// Summary of the answers delivered at completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    /// Entries in requirement order.
    pub entries: Vec<ReportEntry>,
    /// Ids of unmet or unanswered requirements, sorted.
    pub unmet: Vec<String>,
    pub all_met: bool,
    pub completed_at: DateTime<Utc>,
}

impl CompletionReport {
    /// Build a report from delivered answers.
    pub fn new(requirements: &RequirementSet, answers: &AnswerMap) -> Self {
        let entries: Vec<ReportEntry> = requirements
            .iter()
            .map(|req| {
                let answer = answers.get(&req.id).cloned();
                let satisfied = answer.as_ref().is_some_and(Answer::is_satisfied);
                ReportEntry {
                    id: req.id.clone(),
                    title: req.title.clone(),
                    answer,
                    satisfied,
                }
            })
            .collect();

        let mut unmet: Vec<String> = entries
            .iter()
            .filter(|e| !e.satisfied)
            .map(|e| e.id.clone())
            .collect();
        unmet.sort();

        Self {
            all_met: unmet.is_empty(),
            entries,
            unmet,
            completed_at: Utc::now(),
        }
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print the report through the UI.
    pub fn show(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Requirement summary");

        for entry in &self.entries {
            let line = match &entry.answer {
                Some(answer) => format!("{}: {}", entry.title, answer.choice().label()),
                None => format!("{}: unanswered", entry.title),
            };
            if entry.satisfied {
                ui.success(&line);
            } else {
                ui.error(&line);
            }

            if let Some(text) = entry.answer.as_ref().and_then(Answer::custom_value) {
                ui.show_hint(&format!("Note: {}", text));
            }
        }

        if self.all_met {
            ui.success("All requirements met");
        } else {
            ui.warning(UNMET_MESSAGE);
        }
    }
}
