//! Loading and checking questionnaire definitions supplied as JSON.
//!
//! A definition is accepted only if its band table tiles `[0, 3N]` exactly,
//! so scoring a complete response set can never miss a band.

use std::collections::HashSet;

use tracing::debug;

use crate::error::DefinitionError;
use crate::questionnaire::Questionnaire;

impl Questionnaire {
    /// Parse a definition and reject it unless [`validate_definition`] passes.
    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        let questionnaire: Questionnaire = serde_json::from_str(text)?;
        validate_definition(&questionnaire)?;
        debug!(
            questionnaire = %questionnaire.id,
            items = questionnaire.items.len(),
            bands = questionnaire.bands.len(),
            "loaded questionnaire definition"
        );
        Ok(questionnaire)
    }
}

/// Check item uniqueness and that the bands partition `[0, max_score]`.
pub fn validate_definition(questionnaire: &Questionnaire) -> Result<(), DefinitionError> {
    let id = &questionnaire.id;
    if questionnaire.items.is_empty() {
        return Err(DefinitionError::NoItems(id.clone()));
    }

    let mut seen = HashSet::new();
    for item in &questionnaire.items {
        if !seen.insert(item.id) {
            return Err(DefinitionError::DuplicateItem {
                questionnaire_id: id.clone(),
                item_id: item.id,
            });
        }
    }

    if questionnaire.bands.is_empty() {
        return Err(DefinitionError::NoBands(id.clone()));
    }

    for band in &questionnaire.bands {
        if band.min_score > band.max_score {
            return Err(DefinitionError::InvertedBand {
                label: band.label.clone(),
                min_score: band.min_score,
                max_score: band.max_score,
            });
        }
    }

    let mut bands: Vec<_> = questionnaire.bands.iter().collect();
    bands.sort_by_key(|band| (band.min_score, band.max_score));

    let first = bands[0];
    if first.min_score != 0 {
        return Err(DefinitionError::BandTableStart {
            label: first.label.clone(),
            min_score: first.min_score,
        });
    }

    for pair in bands.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.min_score <= prev.max_score {
            return Err(DefinitionError::BandOverlap {
                first: prev.label.clone(),
                second: next.label.clone(),
            });
        }
        if next.min_score > prev.max_score + 1 {
            return Err(DefinitionError::BandGap {
                before: prev.label.clone(),
                after: next.label.clone(),
                from: prev.max_score + 1,
                to: next.min_score - 1,
            });
        }
    }

    let last = bands[bands.len() - 1];
    let expected = questionnaire.max_score();
    if last.max_score != expected {
        return Err(DefinitionError::BandTableEnd {
            label: last.label.clone(),
            max_score: last.max_score,
            expected,
        });
    }

    Ok(())
}
