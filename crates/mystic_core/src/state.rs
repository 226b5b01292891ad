use crate::view_model::AppViewModel;
use crate::{Category, Prediction, SavedPrediction, Selection, TarotReading, ZodiacSign};

/// Session phase for the working prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    PredictionReady,
    PredictionSaved,
}

/// The remote call currently in flight, if any. The view disables the
/// triggering control while one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    FetchPrediction,
    SavePrediction,
    FetchSavedList,
    DeleteSaved,
    FetchTarot,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: Selection,
    phase: Phase,
    prediction: Option<Prediction>,
    tarot_enabled: bool,
    tarot: Option<TarotReading>,
    saved: Vec<SavedPrediction>,
    saved_stale: bool,
    error: Option<String>,
    in_flight: Option<CallKind>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            selection: self.selection,
            phase: self.phase,
            prediction: self.prediction.clone(),
            tarot_enabled: self.tarot_enabled,
            tarot: self.tarot.clone(),
            saved: self.saved.clone(),
            saved_stale: self.saved_stale,
            error: self.error.clone(),
            in_flight: self.in_flight,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn selection(&self) -> Selection {
        self.selection
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn in_flight(&self) -> Option<CallKind> {
        self.in_flight
    }

    pub(crate) fn tarot_enabled(&self) -> bool {
        self.tarot_enabled
    }

    pub(crate) fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub(crate) fn set_sign(&mut self, sign: ZodiacSign) {
        // Changing the selector never clears a fetched prediction; the two
        // may momentarily diverge until the next explicit fetch.
        self.selection.sign = sign;
        self.mark_dirty();
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.selection.category = category;
        self.mark_dirty();
    }

    pub(crate) fn begin_call(&mut self, kind: CallKind) {
        self.in_flight = Some(kind);
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_call(&mut self) {
        self.in_flight = None;
        self.mark_dirty();
    }

    pub(crate) fn store_prediction(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
        self.phase = Phase::PredictionReady;
        self.tarot_enabled = true;
        self.error = None;
        self.mark_dirty();
    }

    /// The working prediction is cleared on save success; the canonical
    /// saved list is always re-fetched from the service, never synthesized.
    pub(crate) fn record_saved(&mut self) {
        self.prediction = None;
        self.phase = Phase::PredictionSaved;
        self.saved_stale = true;
        self.mark_dirty();
    }

    pub(crate) fn store_tarot(&mut self, reading: TarotReading) {
        self.tarot = Some(reading);
        self.mark_dirty();
    }

    pub(crate) fn store_saved_list(&mut self, saved: Vec<SavedPrediction>) {
        self.saved = saved;
        self.saved_stale = false;
        self.mark_dirty();
    }

    pub(crate) fn mark_saved_stale(&mut self) {
        self.saved_stale = true;
        self.mark_dirty();
    }

    pub(crate) fn surface_error(&mut self, message: String) {
        self.error = Some(message);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
