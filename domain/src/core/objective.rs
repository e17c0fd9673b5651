//! Objective value object

use serde::{Deserialize, Serialize};

/// The strategic goal a council run deliberates on (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    content: String,
}

impl Objective {
    /// Create a new objective
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Objective cannot be empty");
        Self { content }
    }

    /// Try to create a new objective, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the objective content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Objective {
    fn from(s: &str) -> Self {
        Objective::new(s)
    }
}

impl From<String> for Objective {
    fn from(s: String) -> Self {
        Objective::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_creation() {
        let o = Objective::new("Launch a subscription newsletter");
        assert_eq!(o.content(), "Launch a subscription newsletter");
    }

    #[test]
    #[should_panic]
    fn test_empty_objective_panics() {
        Objective::new("");
    }

    #[test]
    fn test_try_new() {
        assert!(Objective::try_new("   ").is_none());
        assert!(Objective::try_new("Ship it").is_some());
    }
}
