//! mindmate-instruments
//!
//! Standardized screening questionnaires and their scoring engine. Pure data
//! and arithmetic — no I/O. Defines the items, severity bands, and scoring
//! rules for each supported questionnaire, plus the resource library and
//! professional directory offered alongside results.

pub mod definition;
pub mod error;
pub mod events;
pub mod instruments;
pub mod questionnaire;
pub mod scoring;
pub mod session;
pub mod support;

pub use error::{DefinitionError, InstrumentError, ScoringError};
pub use questionnaire::{Item, Questionnaire, SeverityBand};
pub use scoring::{ResponseSet, ResponseValue, ScoreResult};
pub use session::{AssessmentSession, AttemptState};
pub use support::{Professional, Resource, ResourceKind};

/// Shown alongside every result.
pub const SCREENING_DISCLAIMER: &str = "These assessments are for screening purposes only and do \
    not replace professional diagnosis. If you're experiencing distress, please consult with a \
    healthcare provider.";

/// Return all shipped questionnaires.
pub fn all_questionnaires() -> Vec<&'static Questionnaire> {
    vec![instruments::phq9::phq9(), instruments::gad7::gad7()]
}

/// Look up a shipped questionnaire by ID (`"depression-screen"`) or by its
/// short name, ignoring case and punctuation (`"phq9"`, `"PHQ-9"`).
pub fn get_questionnaire(key: &str) -> Option<&'static Questionnaire> {
    let wanted = normalize_key(key);
    all_questionnaires()
        .into_iter()
        .find(|q| q.id == key || normalize_key(&q.name) == wanted)
}

/// Like [`get_questionnaire`], but reports a miss as an error.
pub fn find_questionnaire(key: &str) -> Result<&'static Questionnaire, InstrumentError> {
    get_questionnaire(key).ok_or_else(|| InstrumentError::UnknownQuestionnaire(key.to_string()))
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
