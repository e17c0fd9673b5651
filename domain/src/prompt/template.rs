//! Prompt templates for the council pipeline

use crate::council::draft::Draft;
use crate::council::profile::PerspectiveProfile;
use crate::council::task_type::TaskType;
use crate::core::objective::Objective;

/// Templates for generating prompts at each stage
///
/// Every template spells out the JSON shape the reply must take; the reply
/// parsers in [`crate::council::reply`] enforce it.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for one lens's independent simulation pass
    pub fn simulation(
        profile: &PerspectiveProfile,
        objective: &Objective,
        context: &str,
        task_type: TaskType,
    ) -> String {
        let grounding = if task_type.wants_grounding() {
            "IMPORTANT: Search the web for real-world benchmarks, regulatory data, or technical case studies to ground your reasoning.\n"
        } else {
            ""
        };

        format!(
            r#"You are simulating the following persona:
Role: {role}
Directive: {directive}
Heuristics: {heuristics}
Vibe: {vibe}
Constraints: {constraints}

Goal: {objective}
Context: {context}

Task: Write a detailed white paper analyzing the goal from your perspective.
{grounding}Identify one core key point and one major friction point.
Return a JSON object with: content, keyPoint, frictionPoint, whitePaper, and brief (coreThesis, evidenceSnippets, technicalConstraints)."#,
            role = profile.role,
            directive = profile.directive,
            heuristics = profile.heuristics,
            vibe = profile.vibe,
            constraints = profile.constraints,
        )
    }

    /// Prompt for one draft's debate pass against its peers.
    ///
    /// With no peers the voices section is empty and the pass still runs -
    /// the persona re-examines its own write-up without adversarial input.
    pub fn debate(draft: &Draft, peers: &[Draft]) -> String {
        let voices = peers
            .iter()
            .map(|d| format!("{} argues: \"{}\"", d.perspective_role, d.key_point))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are {role}.
Review your white paper and the key points from other council members:

Your white paper: {white_paper}

Other council voices:
{voices}

Task: Provide a debate critique. How do their views conflict with or enhance yours?
Update your white paper and friction point based on this adversarial validation.

Return a JSON object with: debateCritique, whitePaper, frictionPoint."#,
            role = draft.perspective_role,
            white_paper = draft.white_paper,
        )
    }

    /// Prompt for the final synthesis over all post-debate drafts
    pub fn synthesis(objective: &Objective, drafts: &[Draft], task_type: TaskType) -> String {
        let transcripts = drafts
            .iter()
            .map(|d| {
                format!(
                    "[{}]\nWhite Paper: {}\nFriction: {}",
                    d.perspective_role, d.white_paper, d.friction_point
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let demonstration = match task_type {
            TaskType::Generative => {
                r#"
3. MANDATORY: As this is a creative/generative task, provide a concreteDemonstration section that bridges theory to execution.
   - workingExample: a long-form actual output demonstrating the concepts discussed.
   - actionableStructure: the high-level frameworks converted into numbered steps.
   - specs: variables, comparison references ("similar to X but with Y adjustment"), and toneMood examples.
"#
            }
            TaskType::Analytical => {
                "\nIMPORTANT: Verify collective claims using web search to ensure technical and regulatory accuracy.\n"
            }
        };

        format!(
            r#"As the executive council lead, synthesize the following perspectives on the goal: "{objective}"

Council transcripts:
{transcripts}

Your mission:
1. Create a master plan (finalDraft).
2. Design an improved prompt (improvedPrompt).
{demonstration}
Return a JSON object with: finalDraft, improvedPrompt, whyItIsBetter, generalizableInsight, simulationTensions, collisionMap (personaA, personaB, tension, resolution), sacrificeLog (sacrifice, reason, risk), redlines, followUpQuestions, and concreteDemonstration where required."#,
        )
    }

    /// Prompt for suggesting a council roster for an objective
    pub fn suggest_council(objective: &Objective) -> String {
        format!(
            r#"Analyze this strategic goal: "{objective}".
1. Determine if it is task type 'A' (creative/generative) or 'B' (technical/strategic/analytical).
2. Suggest 3 diverse expert personas (council lenses) to stress-test this goal.
Return a JSON object with taskType ('A' or 'B') and profiles (array of objects with role, directive, heuristics, vibe, constraints, seed)."#,
        )
    }

    /// Prompt for distilling a persona out of free text
    pub fn extract_persona(text: &str) -> String {
        format!(
            r#"Extract a professional persona from the following text.
Return a JSON object with: role, directive (core mission), heuristics (rules of thumb), vibe (personality), constraints (limitations).
Text: {text}"#,
        )
    }
}
