use tracing::info;

use crate::{
    AnalysisError, CapturedSignal, EmotionAnalyzer, EmotionReading, Modality, Mood,
    VoiceAttributes,
};

/// Stand-in for voice-emotion inference. Always returns the same reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVoiceAnalyzer;

impl EmotionAnalyzer for MockVoiceAnalyzer {
    fn modality(&self) -> Modality {
        Modality::Voice
    }

    fn analyze(&mut self, signal: &CapturedSignal) -> Result<EmotionReading, AnalysisError> {
        self.check_signal(signal)?;
        info!(bytes = signal.data.len(), "voice analysis complete");

        Ok(EmotionReading {
            modality: Modality::Voice,
            primary: Mood::Neutral,
            secondary: Some("Slight anxiety".to_string()),
            confidence: 78,
            voice: Some(VoiceAttributes {
                tone: 65,
                pace: 42,
                volume: 58,
                clarity: 72,
            }),
            recommendations: vec![
                "Your voice indicates mild anxiety. Consider practicing deep breathing exercises."
                    .to_string(),
                "Try speaking a bit more slowly to reduce stress signals in your tone."
                    .to_string(),
                "Regular mindfulness practices may help stabilize your emotional patterns."
                    .to_string(),
            ],
        })
    }
}
