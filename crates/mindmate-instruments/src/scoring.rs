use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::error;
use ts_rs::TS;

use crate::error::ScoringError;
use crate::questionnaire::{Questionnaire, SeverityBand};

/// A frequency answer on the 0–3 scale shared by PHQ-9 and GAD-7.
///
/// Only obtainable through [`ResponseValue::new`], so a held value is always
/// in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct ResponseValue(u8);

impl ResponseValue {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 3;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Every valid answer, lowest first.
    pub fn all() -> [ResponseValue; 4] {
        [Self(0), Self(1), Self(2), Self(3)]
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Frequency wording shown next to the answer.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Not at all",
            1 => "Several days",
            2 => "More than half the days",
            _ => "Nearly every day",
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answers collected during one assessment attempt, keyed by item ID.
///
/// Last write wins per item. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<u32, ResponseValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: u32) -> Option<ResponseValue> {
        self.answers.get(&item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers in item-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, ResponseValue)> + '_ {
        self.answers.iter().map(|(id, value)| (*id, *value))
    }

    /// Drop every answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// The outcome of scoring a complete response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub questionnaire_id: String,
    pub total: u32,
    pub max_score: u32,
    pub band: SeverityBand,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}: {}",
            self.total, self.max_score, self.band.label
        )
    }
}

/// Record (or overwrite) the answer to one item.
///
/// Nothing is written when the item is not part of `questionnaire` or the
/// value is outside 0–3; an unknown item is reported ahead of a bad value.
pub fn record_response(
    responses: &mut ResponseSet,
    questionnaire: &Questionnaire,
    item_id: u32,
    value: i64,
) -> Result<(), ScoringError> {
    if !questionnaire.contains_item(item_id) {
        return Err(ScoringError::UnknownItem {
            questionnaire_id: questionnaire.id.clone(),
            item_id,
        });
    }
    let value =
        ResponseValue::new(value).ok_or(ScoringError::InvalidResponseValue { item_id, value })?;
    responses.answers.insert(item_id, value);
    Ok(())
}

/// True iff every item of `questionnaire` has an answer.
pub fn is_complete(responses: &ResponseSet, questionnaire: &Questionnaire) -> bool {
    questionnaire
        .item_ids()
        .all(|id| responses.answers.contains_key(&id))
}

/// Item IDs of `questionnaire` without an answer, in questionnaire order.
pub fn missing_items(responses: &ResponseSet, questionnaire: &Questionnaire) -> Vec<u32> {
    questionnaire
        .item_ids()
        .filter(|id| !responses.answers.contains_key(id))
        .collect()
}

/// Sum the answers and classify the total.
///
/// Answers recorded for IDs outside `questionnaire` do not count.
pub fn score(
    responses: &ResponseSet,
    questionnaire: &Questionnaire,
) -> Result<ScoreResult, ScoringError> {
    let missing = missing_items(responses, questionnaire);
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAssessment {
            questionnaire_id: questionnaire.id.clone(),
            missing,
        });
    }

    let total: u32 = questionnaire
        .item_ids()
        .filter_map(|id| responses.get(id))
        .map(|value| u32::from(value.get()))
        .sum();

    let Some(band) = questionnaire.band_for(total) else {
        error!(
            questionnaire = %questionnaire.id,
            total,
            "severity band table does not cover total"
        );
        return Err(ScoringError::BandTableDefect {
            questionnaire_id: questionnaire.id.clone(),
            total,
        });
    };

    Ok(ScoreResult {
        questionnaire_id: questionnaire.id.clone(),
        total,
        max_score: questionnaire.max_score(),
        band: band.clone(),
    })
}
