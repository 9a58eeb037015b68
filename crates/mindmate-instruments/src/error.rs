use thiserror::Error;

/// Failures while recording answers or scoring an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("answer {value} for item {item_id} is outside the 0-3 scale")]
    InvalidResponseValue { item_id: u32, value: i64 },

    #[error("item {item_id} is not part of questionnaire '{questionnaire_id}'")]
    UnknownItem {
        questionnaire_id: String,
        item_id: u32,
    },

    #[error("incomplete assessment: please answer all questions (missing items {missing:?})")]
    IncompleteAssessment {
        questionnaire_id: String,
        missing: Vec<u32>,
    },

    /// The questionnaire's band table is malformed. A programming error, not
    /// something the user can fix.
    #[error("severity bands for '{questionnaire_id}' do not cover total {total}")]
    BandTableDefect { questionnaire_id: String, total: u32 },
}

impl ScoringError {
    /// Conditions the person taking the assessment can correct.
    pub fn is_user_error(&self) -> bool {
        !self.is_defect()
    }

    pub fn is_defect(&self) -> bool {
        matches!(self, Self::BandTableDefect { .. })
    }
}

/// Reasons a questionnaire definition is rejected.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("invalid definition JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("questionnaire '{0}' has no items")]
    NoItems(String),

    #[error("questionnaire '{questionnaire_id}' defines item {item_id} more than once")]
    DuplicateItem {
        questionnaire_id: String,
        item_id: u32,
    },

    #[error("questionnaire '{0}' has no severity bands")]
    NoBands(String),

    #[error("band '{label}' has min {min_score} above max {max_score}")]
    InvertedBand {
        label: String,
        min_score: u32,
        max_score: u32,
    },

    #[error("first band '{label}' starts at {min_score}, expected 0")]
    BandTableStart { label: String, min_score: u32 },

    #[error("last band '{label}' ends at {max_score}, expected {expected}")]
    BandTableEnd {
        label: String,
        max_score: u32,
        expected: u32,
    },

    #[error("scores {from}-{to} fall between bands '{before}' and '{after}'")]
    BandGap {
        before: String,
        after: String,
        from: u32,
        to: u32,
    },

    #[error("bands '{first}' and '{second}' overlap")]
    BandOverlap { first: String, second: String },
}

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
