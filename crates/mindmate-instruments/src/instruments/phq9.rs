use std::sync::LazyLock;

use super::{band, items, TWO_WEEK_PREAMBLE};
use crate::questionnaire::Questionnaire;

pub const ID: &str = "depression-screen";

/// PHQ-9: Patient Health Questionnaire-9.
/// Nine depression items scored 0–3; totals 0–27 in five severity bands.
pub fn phq9() -> &'static Questionnaire {
    static PHQ9: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
        id: ID.to_string(),
        name: "PHQ-9".to_string(),
        title: "Patient Health Questionnaire-9".to_string(),
        description: "This questionnaire is a screening tool for depression. It is not a \
                      diagnostic tool, but it can help you understand your symptoms."
            .to_string(),
        preamble: TWO_WEEK_PREAMBLE.to_string(),
        items: items(&[
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself - or that you are a failure or have let yourself or \
             your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching \
             television",
            "Moving or speaking so slowly that other people could have noticed, or the \
             opposite - being so fidgety or restless that you have been moving around a lot \
             more than usual",
            "Thoughts that you would be better off dead, or of hurting yourself in some way",
        ]),
        bands: vec![
            band(
                0,
                4,
                "No depression",
                "Your symptoms suggest minimal or no signs of depression.",
            ),
            band(
                5,
                9,
                "Mild depression",
                "Your symptoms suggest mild depression. Consider monitoring your mood and \
                 practicing self-care.",
            ),
            band(
                10,
                14,
                "Moderate depression",
                "Your symptoms suggest moderate depression. Consider talking to a mental \
                 health professional.",
            ),
            band(
                15,
                19,
                "Moderately severe depression",
                "Your symptoms suggest moderately severe depression. It's recommended that you \
                 consult with a mental health professional.",
            ),
            band(
                20,
                27,
                "Severe depression",
                "Your symptoms suggest severe depression. It's strongly recommended that you \
                 consult with a mental health professional as soon as possible.",
            ),
        ],
    });
    &PHQ9
}
