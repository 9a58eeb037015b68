use serde::Serialize;
use serde_json::json;
use ts_rs::TS;

use crate::error::ScoringError;
use crate::events::AssessmentEvent;
use crate::questionnaire::{Item, Questionnaire};
use crate::scoring::{self, ResponseSet, ScoreResult};

/// Where an attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AttemptState {
    /// At least one item is unanswered.
    InProgress,
    /// Every item is answered, whether or not a score was requested.
    Complete,
}

/// One attempt at one questionnaire. Owns its responses exclusively.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'q> {
    questionnaire: &'q Questionnaire,
    responses: ResponseSet,
    result: Option<ScoreResult>,
}

impl<'q> AssessmentSession<'q> {
    pub fn new(questionnaire: &'q Questionnaire) -> Self {
        AssessmentEvent::new("assessment_started", &questionnaire.id).emit();
        Self {
            questionnaire,
            responses: ResponseSet::new(),
            result: None,
        }
    }

    pub fn questionnaire(&self) -> &'q Questionnaire {
        self.questionnaire
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// The most recent score, cleared by any later change to the responses.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> AttemptState {
        if self.is_complete() {
            AttemptState::Complete
        } else {
            AttemptState::InProgress
        }
    }

    /// Switch to another questionnaire, starting over with no answers.
    pub fn select(&mut self, questionnaire: &'q Questionnaire) {
        *self = Self::new(questionnaire);
    }

    pub fn record(&mut self, item_id: u32, value: i64) -> Result<(), ScoringError> {
        scoring::record_response(&mut self.responses, self.questionnaire, item_id, value)?;
        self.result = None;
        AssessmentEvent::new("response_recorded", &self.questionnaire.id)
            .with_details(json!({
                "answered": self.responses.len(),
                "items": self.questionnaire.items.len(),
            }))
            .emit();
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        scoring::is_complete(&self.responses, self.questionnaire)
    }

    pub fn unanswered(&self) -> Vec<u32> {
        scoring::missing_items(&self.responses, self.questionnaire)
    }

    pub fn next_unanswered(&self) -> Option<&'q Item> {
        self.questionnaire
            .items
            .iter()
            .find(|item| self.responses.get(item.id).is_none())
    }

    pub fn score(&mut self) -> Result<&ScoreResult, ScoringError> {
        let result = scoring::score(&self.responses, self.questionnaire)?;
        AssessmentEvent::new("assessment_scored", &self.questionnaire.id)
            .with_details(json!({
                "total": result.total,
                "band": result.band.label,
            }))
            .emit();
        Ok(self.result.insert(result))
    }

    /// Discard every answer and the cached score; keep the questionnaire.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.result = None;
        AssessmentEvent::new("assessment_reset", &self.questionnaire.id).emit();
    }
}
