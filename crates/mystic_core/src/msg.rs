use crate::{Category, Prediction, SavedPrediction, TarotReading, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a zodiac sign.
    SignSelected(ZodiacSign),
    /// User picked a category.
    CategorySelected(Category),
    /// User asked for a horoscope for the current selection.
    FetchClicked,
    /// Remote horoscope fetch finished.
    PredictionFetched(Result<Prediction, String>),
    /// User asked to persist the current prediction.
    SaveClicked,
    /// Remote save finished.
    SaveCompleted(Result<(), String>),
    /// User asked for a daily tarot reading.
    TarotClicked,
    /// Remote tarot fetch finished.
    TarotFetched(Result<TarotReading, String>),
    /// User opened or refreshed the saved-predictions view.
    SavedViewOpened,
    /// Remote saved-list fetch finished.
    SavedListFetched(Result<Vec<SavedPrediction>, String>),
    /// User asked to delete a saved prediction.
    DeleteClicked { id: String },
    /// Remote delete finished.
    DeleteCompleted(Result<(), String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
