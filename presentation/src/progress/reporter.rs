//! Progress reporting for council runs

use colored::Colorize;
use council_application::RunObserver;
use council_domain::{InsightKind, InterimInsight, RunState};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Renders the run's event feed with a spinner per pipeline stage and a
/// colored line per interim insight.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn stage_message(state: &RunState) -> Option<&'static str> {
        match state {
            RunState::Processing => Some("Council in session - simulating perspectives..."),
            RunState::Debating => Some("Cross-examination - debating drafts..."),
            _ => None,
        }
    }

    fn insight_tag(kind: InsightKind) -> colored::ColoredString {
        match kind {
            InsightKind::Identified => "IDENTIFIED".yellow().bold(),
            InsightKind::Conflict => "CONFLICT".red().bold(),
            InsightKind::Grounded => "GROUNDED".blue().bold(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunObserver for ProgressReporter {
    fn on_state_change(&self, state: &RunState) {
        let mut guard = self.spinner.lock().unwrap();

        if let Some(previous) = guard.take() {
            previous.finish_and_clear();
        }

        match state {
            RunState::Complete => {
                println!("{} Council adjourned.", "v".green().bold());
            }
            RunState::Error => {
                println!("{} Council run failed.", "x".red().bold());
            }
            _ => {
                if let Some(message) = Self::stage_message(state) {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_style(Self::spinner_style());
                    spinner.set_message(message);
                    spinner.enable_steady_tick(Duration::from_millis(100));
                    *guard = Some(spinner);
                }
            }
        }
    }

    fn on_insight(&self, insight: &InterimInsight) {
        let line = format!(
            "  [{}] {} - {}",
            Self::insight_tag(insight.kind),
            insight.role.bold(),
            insight.text
        );

        // print above the live spinner when one is running
        match self.spinner.lock().unwrap().as_ref() {
            Some(spinner) => spinner.println(line),
            None => println!("{}", line),
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl RunObserver for SimpleProgress {
    fn on_state_change(&self, state: &RunState) {
        println!("{} {}", "->".cyan(), state.display_name().bold());
    }

    fn on_insight(&self, insight: &InterimInsight) {
        println!("  [{}] {} - {}", insight.kind, insight.role, insight.text);
    }
}
