//! Council roster file loading
//!
//! The roster is a TOML file of `[[perspectives]]` tables. Ids are
//! assigned positionally; entries with a blank role are loaded as-is and
//! excluded later by the run's active-lens filter.
//!
//! ```toml
//! [[perspectives]]
//! role = "CFO"
//! directive = "Guard the margins"
//! heuristics = "Cash is oxygen"
//! vibe = "Dry, numerate"
//! constraints = "No growth-at-all-costs plans"
//! ```

use council_domain::PerspectiveProfile;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CouncilFileError {
    #[error("Failed to read council file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse council file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Council file defines no perspectives")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CouncilFile {
    #[serde(default)]
    perspectives: Vec<CouncilEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CouncilEntry {
    role: String,
    directive: String,
    heuristics: String,
    vibe: String,
    constraints: String,
    seed: String,
    fidelity_score: f64,
    is_high_fidelity: bool,
}

impl Default for CouncilEntry {
    fn default() -> Self {
        Self {
            role: String::new(),
            directive: String::new(),
            heuristics: String::new(),
            vibe: String::new(),
            constraints: String::new(),
            seed: String::new(),
            fidelity_score: 1.0,
            is_high_fidelity: false,
        }
    }
}

/// Load a council roster from a TOML file
pub fn load_council_file(path: impl AsRef<Path>) -> Result<Vec<PerspectiveProfile>, CouncilFileError> {
    let text = std::fs::read_to_string(path)?;
    let file: CouncilFile = toml::from_str(&text)?;

    if file.perspectives.is_empty() {
        return Err(CouncilFileError::Empty);
    }

    Ok(file
        .perspectives
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            PerspectiveProfile::new(format!("lens-{}", i + 1), entry.role)
                .with_directive(entry.directive)
                .with_heuristics(entry.heuristics)
                .with_vibe(entry.vibe)
                .with_constraints(entry.constraints)
                .with_seed(entry.seed)
                .with_fidelity_score(entry.fidelity_score)
                .with_high_fidelity(entry.is_high_fidelity)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_roster() {
        let file = write_temp(
            r#"
            [[perspectives]]
            role = "CFO"
            directive = "Guard the margins"

            [[perspectives]]
            role = "Growth Lead"
            fidelity_score = 0.7
            "#,
        );

        let profiles = load_council_file(file.path()).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, "lens-1");
        assert_eq!(profiles[0].role, "CFO");
        assert_eq!(profiles[0].directive, "Guard the margins");
        assert_eq!(profiles[1].id, "lens-2");
        assert_eq!(profiles[1].fidelity_score, 0.7);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let file = write_temp("");
        assert!(matches!(
            load_council_file(file.path()),
            Err(CouncilFileError::Empty)
        ));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let file = write_temp("[[perspectives]\nrole = ");
        assert!(matches!(
            load_council_file(file.path()),
            Err(CouncilFileError::Parse(_))
        ));
    }
}
