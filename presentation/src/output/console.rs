//! Console output formatter for run results

use chrono::{DateTime, Utc};
use colored::Colorize;
use council_domain::{HistoryItem, RunResult, SavedArtifact};

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run result
    pub fn format(result: &RunResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Results"));
        output.push('\n');

        output.push_str(&Self::section_header("Master Plan"));
        output.push_str(&format!("\n{}\n", result.final_draft));

        output.push_str(&Self::section_header("Improved Prompt"));
        output.push_str(&format!("\n{}\n", result.improved_prompt));

        if !result.why_it_is_better.is_empty() {
            output.push_str(&format!("\n{}\n", "Why it is better:".cyan().bold()));
            for (i, reason) in result.why_it_is_better.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, reason));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Generalizable insight:".cyan().bold(),
            result.generalizable_insight
        ));

        if !result.simulation_tensions.is_empty() {
            output.push_str(&format!("\n{}\n", "Tensions:".yellow().bold()));
            for tension in &result.simulation_tensions {
                output.push_str(&format!("  * {}\n", tension));
            }
        }

        if !result.collision_map.is_empty() {
            output.push_str(&Self::section_header("Collision Map"));
            for collision in &result.collision_map {
                output.push_str(&format!(
                    "\n{}\n  Tension: {}\n  Resolution: {}\n",
                    format!("-- {} vs {} --", collision.persona_a, collision.persona_b)
                        .yellow()
                        .bold(),
                    collision.tension,
                    collision.resolution
                ));
            }
        }

        if !result.sacrifice_log.is_empty() {
            output.push_str(&Self::section_header("Sacrifice Log"));
            for sacrifice in &result.sacrifice_log {
                output.push_str(&format!(
                    "\n  * {} ({} risk)\n    {}\n",
                    sacrifice.sacrifice.bold(),
                    sacrifice.risk,
                    sacrifice.reason
                ));
            }
        }

        if !result.redlines.is_empty() {
            output.push_str(&format!("\n{}\n", "Redlines:".red().bold()));
            for redline in &result.redlines {
                output.push_str(&format!("  * {}\n", redline));
            }
        }

        output.push_str(&Self::section_header("Council Drafts"));
        for draft in &result.drafts {
            output.push_str(&format!(
                "\n{}\n  Key point: {}\n  Friction: {}\n",
                format!("-- {} --", draft.perspective_role).yellow().bold(),
                draft.key_point,
                draft.friction_point
            ));
            if let Some(critique) = &draft.debate_critique {
                output.push_str(&format!("  Debate critique: {}\n", critique));
            }
        }

        if let Some(demonstration) = &result.concrete_demonstration {
            output.push_str(&Self::section_header("Concrete Demonstration"));
            output.push_str(&format!("\n{}\n", demonstration.working_example));
            if !demonstration.actionable_structure.is_empty() {
                output.push_str(&format!("\n{}\n", "Structure:".cyan().bold()));
                for (i, step) in demonstration.actionable_structure.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, step));
                }
            }
        }

        if let Some(sources) = &result.sources {
            output.push_str(&format!("\n{}\n", "Sources:".cyan().bold()));
            for source in sources {
                output.push_str(&format!("  * {} <{}>\n", source.title, source.uri));
            }
        }

        if !result.follow_up_questions.is_empty() {
            output.push_str(&format!("\n{}\n", "Follow-up questions:".cyan().bold()));
            for question in &result.follow_up_questions {
                output.push_str(&format!("  ? {}\n", question));
            }
        }

        output.push_str(&format!(
            "\n{}\n",
            format!(
                "artifact {} | model {}",
                result.metadata.prompt_version, result.metadata.model
            )
            .dimmed()
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &RunResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format only the final artifact (concise output)
    pub fn format_final_only(result: &RunResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Council Conclusion ===".cyan().bold()));
        output.push_str(&result.final_draft);
        output.push_str(&format!(
            "\n\n{}\n{}\n",
            "Improved prompt:".bold(),
            result.improved_prompt
        ));

        if !result.follow_up_questions.is_empty() {
            output.push_str(&format!("\n{}\n", "Follow-up questions:".dimmed()));
            for question in &result.follow_up_questions {
                output.push_str(&format!("  ? {}\n", question));
            }
        }

        output
    }

    /// Format the run history listing
    pub fn format_history(items: &[HistoryItem]) -> String {
        if items.is_empty() {
            return "No runs recorded yet.".to_string();
        }

        let mut output = String::new();
        output.push_str(&Self::header("Run History"));
        output.push('\n');

        for item in items {
            let roles = item
                .perspectives
                .iter()
                .map(|p| p.role.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "\n{} {}\n  {}\n  Lenses: {}\n",
                Self::format_timestamp(item.timestamp_ms).dimmed(),
                item.id.yellow().bold(),
                item.original_goal,
                roles
            ));
        }

        output
    }

    /// Format the saved-artifact listing
    pub fn format_artifacts(artifacts: &[SavedArtifact]) -> String {
        if artifacts.is_empty() {
            return "No saved artifacts yet.".to_string();
        }

        let mut output = String::new();
        output.push_str(&Self::header("Artifact Library"));
        output.push('\n');

        for artifact in artifacts {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                Self::format_timestamp(artifact.timestamp_ms).dimmed(),
                artifact.label.yellow().bold(),
                Self::indent(&artifact.content, "  ")
            ));
        }

        output
    }

    fn format_timestamp(timestamp_ms: i64) -> String {
        DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| timestamp_ms.to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
