//! Plain-text rendering for terminal output.

use mindmate_analysis::EmotionReading;
use mindmate_instruments::{
    Item, Professional, Questionnaire, Resource, ResponseValue, ScoreResult, SCREENING_DISCLAIMER,
};

pub fn questionnaire_list(questionnaires: &[&Questionnaire]) -> String {
    let mut output = String::new();
    for q in questionnaires {
        output.push_str(&format!(
            "{:<20} {:<7} {} items, scores 0-{}\n",
            q.id,
            q.name,
            q.items.len(),
            q.max_score()
        ));
    }
    output
}

pub fn answer_scale() -> String {
    ResponseValue::all()
        .iter()
        .map(|v| format!("  {v}) {}", v.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn guide(q: &Questionnaire) -> String {
    let mut output = format!("## {} ({})\n\n{}\n\n{}\n\n", q.name, q.title, q.description, q.preamble);
    for item in &q.items {
        output.push_str(&format!("{}. {}\n", item.id, item.prompt));
    }
    output.push_str("\nAnswers:\n");
    output.push_str(&answer_scale());
    output.push_str("\n\nScoring guide:\n");
    output.push_str(&q.scoring_guide());
    output
}

pub fn item_prompt(q: &Questionnaire, item: &Item, answered: usize) -> String {
    format!(
        "[{}/{}] {}\n{}\n",
        answered + 1,
        q.items.len(),
        item.prompt,
        answer_scale()
    )
}

pub fn result(q: &Questionnaire, result: &ScoreResult) -> String {
    format!(
        "{} score: {} / {}\nSeverity: {}\n{}\n\nScoring guide:\n{}\n{}\n",
        q.name,
        result.total,
        result.max_score,
        result.band.label,
        result.band.description,
        q.scoring_guide(),
        SCREENING_DISCLAIMER,
    )
}

pub fn reading(reading: &EmotionReading) -> String {
    let mut output = format!(
        "Detected mood: {} ({}% confidence)\n",
        reading.primary, reading.confidence
    );
    if let Some(secondary) = &reading.secondary {
        output.push_str(&format!("Secondary: {secondary}\n"));
    }
    if let Some(voice) = &reading.voice {
        output.push_str(&format!(
            "Tone {} / Pace {} / Volume {} / Clarity {}\n",
            voice.tone, voice.pace, voice.volume, voice.clarity
        ));
    }
    for recommendation in &reading.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }
    output
}

pub fn resources(resources: &[&Resource]) -> String {
    let mut output = String::new();
    for r in resources {
        output.push_str(&format!(
            "[{}] {} ({})\n    {}\n    {}\n",
            r.kind, r.title, r.source, r.description, r.link
        ));
    }
    output
}

pub fn professionals(professionals: &[&Professional]) -> String {
    let mut output = String::new();
    for p in professionals {
        output.push_str(&format!(
            "{}, {}\n    Specialties: {}\n    Available: {}\n    {} | {}\n",
            p.name,
            p.title,
            p.specialties.join(", "),
            p.availability,
            p.email,
            p.phone
        ));
    }
    output
}

pub fn referrals(referrals: &[&Professional]) -> String {
    format!(
        "\nYour score suggests talking to a mental health professional:\n{}",
        professionals(referrals)
    )
}
