use crate::{CallKind, Phase, Prediction, SavedPrediction, Selection, TarotReading};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selection: Selection,
    pub phase: Phase,
    pub prediction: Option<Prediction>,
    pub tarot_enabled: bool,
    pub tarot: Option<TarotReading>,
    pub saved: Vec<SavedPrediction>,
    pub saved_stale: bool,
    pub error: Option<String>,
    pub in_flight: Option<CallKind>,
    pub dirty: bool,
}
