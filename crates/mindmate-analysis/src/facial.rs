use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::{AnalysisError, CapturedSignal, EmotionAnalyzer, EmotionReading, Modality, Mood};

const MIN_CONFIDENCE: u8 = 70;
const MAX_CONFIDENCE: u8 = 99;

/// Stand-in for facial-expression inference: picks a mood uniformly at
/// random with a confidence between 70 and 99 percent.
#[derive(Debug, Clone)]
pub struct MockFacialAnalyzer<R = StdRng> {
    rng: R,
}

impl MockFacialAnalyzer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible readings for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MockFacialAnalyzer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockFacialAnalyzer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> EmotionAnalyzer for MockFacialAnalyzer<R> {
    fn modality(&self) -> Modality {
        Modality::Facial
    }

    fn analyze(&mut self, signal: &CapturedSignal) -> Result<EmotionReading, AnalysisError> {
        self.check_signal(signal)?;

        let primary = Mood::ALL[self.rng.gen_range(0..Mood::ALL.len())];
        let confidence = self.rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
        info!(bytes = signal.data.len(), mood = %primary, confidence, "facial analysis complete");

        Ok(EmotionReading {
            modality: Modality::Facial,
            primary,
            secondary: None,
            confidence,
            voice: None,
            recommendations: Vec::new(),
        })
    }
}
