use thiserror::Error;

use crate::Modality;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("captured {0} signal is empty")]
    EmptySignal(Modality),

    #[error("{analyzer} analyzer cannot read a {signal} signal")]
    UnsupportedModality { analyzer: Modality, signal: Modality },
}
