//! Candidate profile assembled over the intake stages.

use serde::{Deserialize, Serialize};

/// Everything collected about one candidate. Owned by the session for the
/// lifetime of a conversation; fields fill in stage order and are only
/// cleared by a full reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Years of experience, kept as free text.
    pub experience: String,
    pub position: String,
    pub location: String,
    /// Normalized technology keys, empty until the tech-stack stage completes.
    pub tech_stack: Vec<String>,
}

/// Split a comma-separated technology list into normalized keys: trimmed,
/// lower-cased, empties dropped.
pub fn normalize_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|tech| tech.trim().to_lowercase())
        .filter(|tech| !tech.is_empty())
        .collect()
}
