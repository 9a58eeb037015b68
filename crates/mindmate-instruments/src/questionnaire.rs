use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::ResponseValue;

/// A single question within a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique within its questionnaire.
    pub id: u32,
    pub prompt: String,
}

/// A scoring bucket: an inclusive total-score range with its label and
/// guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min_score: u32,
    pub max_score: u32,
    pub label: String,
    pub description: String,
}

impl SeverityBand {
    pub fn contains(&self, total: u32) -> bool {
        self.min_score <= total && total <= self.max_score
    }
}

/// A screening questionnaire: an ordered item list plus the band table that
/// turns a summed score into a severity classification.
///
/// Every supported questionnaire is a value of this one type; PHQ-9 and
/// GAD-7 differ only in their data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    /// Stable identifier (e.g., "depression-screen").
    pub id: String,
    /// Short display name (e.g., "PHQ-9").
    pub name: String,
    /// Full name (e.g., "Patient Health Questionnaire-9").
    pub title: String,
    pub description: String,
    /// Question stem shared by every item.
    pub preamble: String,
    pub items: Vec<Item>,
    /// Ordered by `min_score`; tiles `[0, max_score()]`.
    pub bands: Vec<SeverityBand>,
}

impl Questionnaire {
    /// Highest achievable total: every item answered with the top value.
    pub fn max_score(&self) -> u32 {
        self.items.len() as u32 * u32::from(ResponseValue::MAX)
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: u32) -> bool {
        self.item(id).is_some()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// The band whose inclusive range contains `total`, if any.
    pub fn band_for(&self, total: u32) -> Option<&SeverityBand> {
        self.bands.iter().find(|band| band.contains(total))
    }

    /// Human-readable scoring guide, one band per line (`"0-4: No depression"`).
    pub fn scoring_guide(&self) -> String {
        let mut output = String::new();
        for band in &self.bands {
            output.push_str(&format!(
                "{}-{}: {}\n",
                band.min_score, band.max_score, band.label
            ));
        }
        output
    }
}
