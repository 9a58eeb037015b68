//! mindmate-analysis
//!
//! Emotion-analysis collaborators for captured camera frames and voice
//! recordings. The analyzers here are mocks: they expose the interface a
//! real inference service would (captured signal in, labelled reading with
//! confidence out) without inspecting the signal's content.

pub mod error;
pub mod facial;
pub mod voice;

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use error::AnalysisError;
pub use facial::MockFacialAnalyzer;
pub use voice::MockVoiceAnalyzer;

/// The kind of capture an analyzer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Modality {
    Facial,
    Voice,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Facial => "facial",
            Self::Voice => "voice",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Neutral,
        Mood::Sad,
        Mood::Anxious,
    ];
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Raw bytes from a camera frame or microphone recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedSignal {
    pub modality: Modality,
    pub data: Vec<u8>,
}

impl CapturedSignal {
    pub fn new(modality: Modality, data: impl Into<Vec<u8>>) -> Self {
        Self {
            modality,
            data: data.into(),
        }
    }
}

/// Voice characteristics, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoiceAttributes {
    /// Low to high.
    pub tone: u8,
    /// Slow to fast.
    pub pace: u8,
    /// Soft to loud.
    pub volume: u8,
    /// Unclear to clear.
    pub clarity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionReading {
    pub modality: Modality,
    pub primary: Mood,
    pub secondary: Option<String>,
    /// Percent.
    pub confidence: u8,
    pub voice: Option<VoiceAttributes>,
    pub recommendations: Vec<String>,
}

/// An emotion-inference backend.
pub trait EmotionAnalyzer: Send {
    fn modality(&self) -> Modality;

    fn analyze(&mut self, signal: &CapturedSignal) -> Result<EmotionReading, AnalysisError>;

    /// Reject signals this analyzer cannot read.
    fn check_signal(&self, signal: &CapturedSignal) -> Result<(), AnalysisError> {
        if signal.modality != self.modality() {
            return Err(AnalysisError::UnsupportedModality {
                analyzer: self.modality(),
                signal: signal.modality,
            });
        }
        if signal.data.is_empty() {
            return Err(AnalysisError::EmptySignal(signal.modality));
        }
        Ok(())
    }
}

/// The default analyzer for a modality.
pub fn analyzer_for(modality: Modality) -> Box<dyn EmotionAnalyzer> {
    match modality {
        Modality::Facial => Box::new(MockFacialAnalyzer::new()),
        Modality::Voice => Box::new(MockVoiceAnalyzer),
    }
}
