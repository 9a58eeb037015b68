pub mod gad7;
pub mod phq9;

use crate::questionnaire::{Item, SeverityBand};

/// Question stem shared by PHQ-9 and GAD-7.
pub(crate) const TWO_WEEK_PREAMBLE: &str =
    "Over the last 2 weeks, how often have you been bothered by any of the following problems?";

pub(crate) fn items(prompts: &[&str]) -> Vec<Item> {
    prompts
        .iter()
        .zip(1..)
        .map(|(prompt, id)| Item {
            id,
            prompt: prompt.to_string(),
        })
        .collect()
}

pub(crate) fn band(min_score: u32, max_score: u32, label: &str, description: &str) -> SeverityBand {
    SeverityBand {
        min_score,
        max_score,
        label: label.to_string(),
        description: description.to_string(),
    }
}
