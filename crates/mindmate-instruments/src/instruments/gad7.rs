use std::sync::LazyLock;

use super::{band, items, TWO_WEEK_PREAMBLE};
use crate::questionnaire::Questionnaire;

pub const ID: &str = "anxiety-screen";

/// GAD-7: Generalized Anxiety Disorder-7.
/// Seven anxiety items scored 0–3; totals 0–21 in four severity bands.
pub fn gad7() -> &'static Questionnaire {
    static GAD7: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
        id: ID.to_string(),
        name: "GAD-7".to_string(),
        title: "Generalized Anxiety Disorder-7".to_string(),
        description: "This questionnaire is a screening tool for anxiety. It is not a \
                      diagnostic tool, but it can help you understand your symptoms."
            .to_string(),
        preamble: TWO_WEEK_PREAMBLE.to_string(),
        items: items(&[
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
            "Worrying too much about different things",
            "Trouble relaxing",
            "Being so restless that it's hard to sit still",
            "Becoming easily annoyed or irritable",
            "Feeling afraid as if something awful might happen",
        ]),
        bands: vec![
            band(
                0,
                4,
                "Minimal anxiety",
                "Your symptoms suggest minimal or no signs of anxiety.",
            ),
            band(
                5,
                9,
                "Mild anxiety",
                "Your symptoms suggest mild anxiety. Consider monitoring your symptoms and \
                 practicing relaxation techniques.",
            ),
            band(
                10,
                14,
                "Moderate anxiety",
                "Your symptoms suggest moderate anxiety. Consider consulting with a mental \
                 health professional.",
            ),
            band(
                15,
                21,
                "Severe anxiety",
                "Your symptoms suggest severe anxiety. It's strongly recommended that you \
                 consult with a mental health professional as soon as possible.",
            ),
        ],
    });
    &GAD7
}
