use serde::Serialize;
use tracing::info;

/// A structured event describing progress through an assessment attempt.
///
/// Emitted via `tracing`; answers themselves are never included, only
/// counts and the resulting band.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentEvent {
    pub action: &'static str,
    pub questionnaire_id: String,
    pub details: Option<serde_json::Value>,
}

impl AssessmentEvent {
    pub fn new(action: &'static str, questionnaire_id: impl Into<String>) -> Self {
        Self {
            action,
            questionnaire_id: questionnaire_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        match &self.details {
            Some(details) => info!(
                assessment.action = self.action,
                assessment.questionnaire = %self.questionnaire_id,
                assessment.details = %details,
                "assessment event"
            ),
            None => info!(
                assessment.action = self.action,
                assessment.questionnaire = %self.questionnaire_id,
                "assessment event"
            ),
        }
    }
}
